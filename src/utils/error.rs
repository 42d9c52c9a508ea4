use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    /// A field failed its rule. Display is the message shown to the user.
    #[error("{message}")]
    InvalidField { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl FormError {
    pub fn invalid_field(field: &str, message: &str) -> Self {
        FormError::InvalidField {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Field identifier for rule failures, `None` for everything else.
    pub fn field(&self) -> Option<&str> {
        match self {
            FormError::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
