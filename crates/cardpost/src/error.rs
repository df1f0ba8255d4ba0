use thiserror::Error;

use cardpost_notify::NotifyError;

/// Error type for the cardpost binary, aggregating configuration failures
/// and delivery failures from the notify crate.
///
/// Every variant is fatal: the top-level handler prints the message and
/// terminates with a non-zero status. There is no retry and no partial
/// success.
#[derive(Debug, Error)]
pub enum RootError {
    #[error("failed to read configuration file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("malformed configuration file: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("configuration field '{field}' is missing or empty, check conf.json")]
    MissingField { field: &'static str },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("notification error: {0}")]
    Notify(#[from] NotifyError),
}

pub type RootResult<T> = Result<T, RootError>;
