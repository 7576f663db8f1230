//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors returned while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs a formatting subscriber filtered by `directive`.
///
/// `RUST_LOG` takes precedence over `directive` when set.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the directive is invalid or a global
/// subscriber already exists.
pub fn init_tracing(directive: &str) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directive)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{TelemetryError, init_tracing};

    #[test]
    fn second_install_is_reported() {
        // The first call may already have happened in another test thread.
        let _first = init_tracing("info");
        let second = init_tracing("info");
        assert!(matches!(second, Err(TelemetryError::AlreadyInstalled(_))));
    }
}
