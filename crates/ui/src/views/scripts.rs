use dioxus::document::eval;

pub async fn scroll_to_top() {
    let _ = eval(scroll_to_top_script()).await;
}

pub async fn scroll_into_view(element_id: &str) {
    let script = scroll_into_view_script(element_id);
    let _ = eval(&script).await;
}

/// Blocking prompt, as the reader sees it for invalid submissions.
pub async fn show_alert(message: &str) {
    let script = alert_script(message);
    let _ = eval(&script).await;
}

pub async fn print_page() {
    let _ = eval(print_script()).await;
}

/// Copy `text` to the system clipboard. Returns `false` if the platform
/// refused the write.
pub async fn write_clipboard(text: &str) -> bool {
    let script = write_clipboard_script(text);
    eval(&script).join::<bool>().await.unwrap_or(false)
}

fn scroll_to_top_script() -> &'static str {
    "window.scrollTo({ top: 0, behavior: \"smooth\" });"
}

fn scroll_into_view_script(element_id: &str) -> String {
    let id_literal = js_string_literal(element_id);
    format!(
        r#"
        const el = document.getElementById({id_literal});
        if (el) {{
            requestAnimationFrame(() => el.scrollIntoView({{ behavior: "smooth", block: "nearest" }}));
        }}
        "#
    )
}

fn alert_script(message: &str) -> String {
    format!("alert({});", js_string_literal(message))
}

fn print_script() -> &'static str {
    "window.print();"
}

fn write_clipboard_script(text: &str) -> String {
    let text_literal = js_string_literal(text);
    format!(
        r#"
        const text = {text_literal};
        try {{
            if (navigator.clipboard && navigator.clipboard.writeText) {{
                await navigator.clipboard.writeText(text);
                return true;
            }}
        }} catch (_) {{}}
        return false;
        "#
    )
}

fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
