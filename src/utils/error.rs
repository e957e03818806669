use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeldError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Configuration is invalid ({} error(s))", .errors.len())]
    Validation { errors: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MeldError>;

impl MeldError {
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    /// Individual validation messages, empty for every other kind of error.
    pub fn validation_errors(&self) -> &[String] {
        match self {
            Self::Validation { errors } => errors,
            _ => &[],
        }
    }
}
