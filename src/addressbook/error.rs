use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("{0}")]
    Validation(String),

    #[error("Contact {0} not found")]
    ContactNotFound(String),

    #[error("Phone {phone} not found for contact {contact}")]
    PhoneNotFound { phone: String, contact: String },

    #[error("Incomplete command")]
    ArgumentCount,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse classification used when turning an error into a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    ArgumentCount,
    Other,
}

impl BookError {
    pub fn validation(detail: impl Into<String>) -> Self {
        BookError::Validation(detail.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::Validation(_) => ErrorKind::Validation,
            BookError::ContactNotFound(_) | BookError::PhoneNotFound { .. } => ErrorKind::NotFound,
            BookError::ArgumentCount => ErrorKind::ArgumentCount,
            BookError::Io(_) | BookError::Serialization(_) | BookError::Store(_) => {
                ErrorKind::Other
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
