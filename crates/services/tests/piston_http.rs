use std::sync::Arc;

use review_core::EditorId;
use services::{ExecutionConfig, ExecutionOutcome, PistonExecutor, RunCoordinator};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves one HTTP reply on a local port and hands back the request body.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;

        let reply = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(reply.as_bytes()).await.expect("write reply");
        socket.shutdown().await.expect("shutdown");
        request
    });

    (format!("http://{addr}/api/v2/piston/execute"), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut raw = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let read = socket.read(&mut chunk).await.expect("read request");
        if read == 0 {
            break;
        }
        raw.extend_from_slice(&chunk[..read]);

        let text = String::from_utf8_lossy(&raw);
        if let Some(split) = text.find("\r\n\r\n") {
            let length = text[..split]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if raw.len() >= split + 4 + length {
                return text[split + 4..].to_string();
            }
        }
    }
    String::new()
}

fn coordinator(endpoint: &str) -> RunCoordinator {
    let config = ExecutionConfig::default()
        .with_endpoint(endpoint)
        .expect("valid url");
    RunCoordinator::new(Arc::new(PistonExecutor::new(config)))
}

#[tokio::test]
async fn error_status_with_message_is_reported() {
    let (endpoint, server) =
        serve_once("400 Bad Request", r#"{"message":"c++-99.0.0 runtime is unknown"}"#).await;

    let report = coordinator(&endpoint)
        .run(EditorId::new(1), "int main() {}")
        .await;

    assert_eq!(
        report.outcome,
        ExecutionOutcome::Reported("c++-99.0.0 runtime is unknown".into())
    );
    assert_eq!(
        report.outcome.to_panel().lines()[0].text,
        "Error: c++-99.0.0 runtime is unknown"
    );

    let request = server.await.expect("server task");
    let json: serde_json::Value = serde_json::from_str(&request).expect("request is json");
    assert_eq!(json["language"], "c++");
    assert_eq!(json["files"][0]["content"], "int main() {}");
}

#[tokio::test]
async fn non_json_body_counts_as_unreachable() {
    let (endpoint, server) = serve_once("200 OK", "not json").await;

    let report = coordinator(&endpoint)
        .run(EditorId::new(2), "int main() {}")
        .await;

    assert_eq!(report.outcome, ExecutionOutcome::Unreachable);
    server.await.expect("server task");
}

#[tokio::test]
async fn successful_reply_is_classified_as_output() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"language":"c++","version":"10.2.0","run":{"stdout":"5\n","stderr":"","code":0,"output":"5\n"}}"#,
    )
    .await;

    let report = coordinator(&endpoint)
        .run(EditorId::new(3), "int main() { std::cout << 5; }")
        .await;

    assert_eq!(report.outcome, ExecutionOutcome::Success("5\n".into()));
    server.await.expect("server task");
}
