use thiserror::Error;

/// Every way a REST call can end other than a 2xx response
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RestError {
    /// 401: the session is gone; the shell sends the page to the login screen
    #[error("session expired")]
    AuthExpired,

    #[error("HTTP {status}")]
    Failure { status: u16, body: String },

    /// No response at all (network down, CORS, aborted)
    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("failed to serialize request: {0}")]
    Encode(String),

    #[error("invalid client config: {0}")]
    Config(String),

    #[error("no window")]
    NoWindow,
}

impl RestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::AuthExpired => Some(401),
            RestError::Failure { status, .. } => Some(*status),
            _ => None,
        }
    }
}
