use thiserror::Error;

#[derive(Error, Debug)]
pub enum WgerError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl WgerError {
    /// Status code of a non-2xx response, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            WgerError::Status { status, .. } => Some(*status),
            WgerError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WgerError>;
