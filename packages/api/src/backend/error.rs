/// Why a call to the users backend failed, as seen from the server.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("invalid backend configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Settings(#[from] config::ConfigError),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
}
