use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fiend_core::Clock;
use services::{ApiConfig, AppServices};
use ui::{App, build_app_context};

#[derive(Debug)]
enum ArgsError {
    InvalidDbUrl { raw: String },
    InvalidTimeout,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidTimeout => write!(f, "--timeout-secs must be at least 1"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Parser, Debug)]
#[command(name = "fiend")]
#[command(about = "My Fitness Fiend desktop client")]
struct Args {
    /// Base URL of the Fiend backend
    #[arg(long, env = "FIEND_API_URL", default_value = services::api::DEFAULT_BASE_URL)]
    api_url: String,

    /// SQLite database holding the session, or `memory` to keep it in RAM
    #[arg(long = "db", env = "FIEND_DB_URL", default_value = "sqlite://fiend.sqlite3")]
    db_url: String,

    /// Per-request timeout for backend calls
    #[arg(long, env = "FIEND_API_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,services=debug,fiend_core=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), ArgsError> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let invalid = || ArgsError::InvalidDbUrl {
        raw: db_url.to_string(),
    };
    let path = db_url.strip_prefix("sqlite://").ok_or_else(invalid)?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(invalid());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|_| invalid())?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .map_err(|_| invalid())?;
    }

    Ok(())
}

async fn build_services(args: &Args) -> Result<AppServices, Box<dyn std::error::Error>> {
    if args.timeout_secs == 0 {
        return Err(ArgsError::InvalidTimeout.into());
    }
    let api = ApiConfig::new(&args.api_url, Duration::from_secs(args.timeout_secs))?;
    let clock = Clock::system();

    if args.db_url.trim() == "memory" {
        info!(api = %api.base_url, "using in-memory session store");
        return Ok(AppServices::new_in_memory(api, clock)?);
    }

    let db_url = normalize_sqlite_url(&args.db_url);
    // Open + migrate SQLite at startup so services never see a missing file.
    prepare_sqlite_file(&db_url)?;
    info!(api = %api.base_url, db = %db_url, "opening session store");
    Ok(AppServices::new_sqlite(&db_url, api, clock).await?)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let services = build_services(&args).await?;
    let context = build_app_context(Arc::new(services));

    // Some dev setups default the window to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("My Fitness Fiend")
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
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_become_absolute_urls() {
        let url = normalize_sqlite_url("sqlite:data/fiend.sqlite3");
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/fiend.sqlite3"), "{url}");
        assert_eq!(normalize_sqlite_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/x.db"),
            "sqlite:///tmp/x.db"
        );
    }

    #[test]
    fn prepare_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("fiend-app-test-{}", std::process::id()));
        let file = dir.join("nested").join("session.sqlite3");
        let url = format!("sqlite://{}", file.display());
        prepare_sqlite_file(&url).unwrap();
        assert!(file.exists());
        prepare_sqlite_file(&url).unwrap();
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn prepare_rejects_non_file_urls() {
        assert!(prepare_sqlite_file("postgres://db").is_err());
        assert!(prepare_sqlite_file("sqlite://").is_err());
    }

    /// Parse with the env fallbacks stripped so exported `FIEND_*`
    /// variables cannot leak into the assertions.
    fn parse_without_env(argv: &[&str]) -> Args {
        use clap::{CommandFactory, FromArgMatches};

        let matches = Args::command()
            .mut_args(|arg| arg.env(None::<&'static str>))
            .try_get_matches_from(argv.iter().copied())
            .unwrap();
        Args::from_arg_matches(&matches).unwrap()
    }

    #[test]
    fn cli_defaults_match_local_backend() {
        let args = parse_without_env(&["fiend"]);
        assert_eq!(args.timeout_secs, 10);
        assert_eq!(args.api_url, services::api::DEFAULT_BASE_URL);
        assert_eq!(args.db_url, "sqlite://fiend.sqlite3");
        let args = parse_without_env(&["fiend", "--api-url", "https://api.example", "--db", "memory"]);
        assert_eq!(args.api_url, "https://api.example");
        assert_eq!(args.db_url, "memory");
    }
}
