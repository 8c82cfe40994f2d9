//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise `LOG_LEVEL` (default `info`) applies
//! to this crate, `tower_http` and the access log. When `LOG_DIR` names an
//! existing directory a daily-rolling plain-text file is written there as
//! well.

use std::path::PathBuf;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Logger settings, normally read from the environment
#[derive(Debug, Clone, Default)]
pub struct LoggerOptions {
    pub level: Option<String>,
    /// JSON lines on stdout instead of human-readable text
    pub json: bool,
    pub log_dir: Option<PathBuf>,
}

impl LoggerOptions {
    pub fn from_env() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").ok(),
            json: std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")),
            log_dir: std::env::var("LOG_DIR").ok().map(PathBuf::from),
        }
    }

    fn default_directives(&self) -> String {
        let level = self.level.as_deref().unwrap_or("info");
        format!("catalog_server={level},tower_http={level},http_access={level}")
    }
}

/// Initialize the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_logger(options: &LoggerOptions) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.default_directives()));

    let (text, json) = if options.json {
        (None, Some(fmt::layer().json().with_target(true)))
    } else {
        (Some(fmt::layer().with_target(false)), None)
    };

    let file = options
        .log_dir
        .as_ref()
        .filter(|dir| dir.is_dir())
        .map(|dir| {
            let appender = tracing_appender::rolling::daily(dir, "catalog-server");
            fmt::layer().with_ansi(false).with_writer(appender)
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .with(file)
        .try_init()
}
