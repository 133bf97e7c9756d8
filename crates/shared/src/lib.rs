//! Types shared by the exercise tracker server and anything talking to it:
//! users, exercises and their logs, the API routes and the error body.

use std::path::PathBuf;

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

pub mod api;
pub mod model;
pub mod types;

/// Used when `RUST_LOG` isn't set. Request spans from `tower_http` and the
/// handlers' own events are the interesting part of a tracker's output
pub const DEFAULT_LOG_FILTER: &str = "info,server=debug,tower_http=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn configure_tracing() -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::TRACE)
            .with_env_filter(env_filter())
            .with_line_number(true)
            .with_file(true)
            .with_span_events(FmtSpan::CLOSE)
            .finish(),
    )
}

/// Reads `PORT`, `BIND_ADDR` and `CORS_ORIGIN` overrides from a `.env` file
/// when one is present
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenv::Error> {
    match dotenv::dotenv() {
        Err(dotenv::Error::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        r => r.map(Some),
    }
}
