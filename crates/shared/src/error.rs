#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field is missing or empty, or the payload could not be decoded.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("storage failed: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("notification failed: {0:#}")]
    Notification(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<validator::ValidationErrors> for Error {
    fn from(value: validator::ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
