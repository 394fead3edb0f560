use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShareError>;

/// Failure kinds for one polling run. Every variant is terminal: the process
/// prints the message and exits, and the menu-bar host retries on its next
/// refresh cycle.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("login rejected ({status}): {body}")]
    Auth { status: u16, body: String },
    #[error("readings request failed ({status}): {body}")]
    Network { status: u16, body: String },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Parse(String),
}
