use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{message}: '{tag}'")]
    InvalidArgument { message: String, tag: String },

    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("{failed} of {total} observers failed to handle the notification")]
    Notification { failed: usize, total: usize },

    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),

    #[error("invalid hunt plan: {message}")]
    Plan { message: String },
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            tag: tag.into(),
        }
    }

    pub fn plan(message: impl Into<String>) -> Self {
        Self::Plan {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::plan(err.message().to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
