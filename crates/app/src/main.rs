use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use review_core::Course;
use services::{AppServices, CourseSource, ExecutionConfig, ProgressService, RunCoordinator};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidExecUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidExecUrl { raw } => write!(f, "invalid --exec-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn course(&self) -> Arc<Course> {
        self.services.course()
    }

    fn run_coordinator(&self) -> Arc<RunCoordinator> {
        self.services.run_coordinator()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    course: CourseSource,
    exec: ExecutionConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--course <path>] [--db <sqlite_url>] [--exec-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --course  built-in data structures review");
    eprintln!("  --db      sqlite:review.sqlite3");
    eprintln!("  --exec-url https://emkc.org/api/v2/piston/execute");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  REVIEW_COURSE, REVIEW_DB_URL, REVIEW_EXEC_URL,");
    eprintln!("  REVIEW_EXEC_LANGUAGE, REVIEW_EXEC_VERSION, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("REVIEW_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| normalize_sqlite_url("review.sqlite3".into()), normalize_sqlite_url);
        let mut course = CourseSource::from_path(std::env::var("REVIEW_COURSE").ok().as_deref());
        let mut exec = ExecutionConfig::from_env().map_err(|_| ArgsError::InvalidExecUrl {
            raw: std::env::var("REVIEW_EXEC_URL").unwrap_or_default(),
        })?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--course" => {
                    let value = require_value(args, "--course")?;
                    course = CourseSource::from_path(Some(&value));
                }
                "--exec-url" => {
                    let value = require_value(args, "--exec-url")?;
                    exec = exec
                        .with_endpoint(&value)
                        .map_err(|_| ArgsError::InvalidExecUrl { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            course,
            exec,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

const SHORTCUTS: &[&str] = &[
    "Ctrl/Cmd+Enter runs the focused editor",
    "Alt+Left/Right switches lectures",
];

fn log_shortcuts(course: &Course) {
    tracing::info!(course = %course.title, lectures = course.lectures.len(), "review loaded");
    for shortcut in SHORTCUTS {
        tracing::info!("keyboard shortcut: {shortcut}");
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    tracing::debug!(?parsed, "starting");

    // Migrations run inside new_sqlite.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, parsed.exec, &parsed.course).await?;
    log_shortcuts(&services.course());

    let title = services.course().title.clone();
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&[
            "--db",
            "sqlite:/tmp/review-test.sqlite3",
            "--course",
            "lectures.json",
            "--exec-url",
            "http://localhost:2000/api/v2/execute",
        ])
        .unwrap();
        assert_eq!(args.db_url, "sqlite:///tmp/review-test.sqlite3");
        assert_eq!(
            args.course,
            CourseSource::File(std::path::PathBuf::from("lectures.json"))
        );
        assert_eq!(args.exec.endpoint.port(), Some(2000));
    }

    #[test]
    fn missing_value_is_reported() {
        let err = parse(&["--db"]).unwrap_err();
        assert_eq!(err.to_string(), "--db requires a value");
    }

    #[test]
    fn bad_exec_url_is_rejected() {
        let err = parse(&["--exec-url", "not a url"]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidExecUrl { .. }));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["--lecture", "1"]).unwrap_err();
        assert!(matches!(err, ArgsError::UnknownArg(arg) if arg == "--lecture"));
    }

    #[test]
    fn banner_lists_only_bound_shortcuts() {
        assert_eq!(SHORTCUTS.len(), 2);
        assert!(SHORTCUTS.iter().all(|line| !line.starts_with("Tab")));
    }

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/review.sqlite3".into());
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/review.sqlite3"));
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
    }
}
