// Logging setup (stderr only; stdout is reserved for command output)

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Env var selecting `json` or `pretty` log output
pub const LOG_FORMAT_ENV: &str = "DEQ_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "warn";

/// Initialize the global tracing subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: filter directives (default: `warn`)
/// - `DEQ_LOG_FORMAT`: `json` for structured logs, anything else for pretty
pub fn init() -> Result<()> {
    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| anyhow!("Failed to create env filter: {}", e))?;

    match log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    }
    .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
