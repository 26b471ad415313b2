use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

/// A single rejected field from an edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Load failed: {0}")]
    Load(#[from] reqwest::Error),
    #[error("Parsing error")]
    Parse,
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for DirectoryError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}
