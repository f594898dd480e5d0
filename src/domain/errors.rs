use thiserror::Error;

/// Error taxonomy shared by every resource operation. `Display` output is the
/// exact `message` text sent over the wire.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{type_name} with id {key} not found")]
    NotFound { type_name: &'static str, key: String },
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(type_name: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            type_name,
            key: key.to_string(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
