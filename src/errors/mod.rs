use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] sqlx::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Malformed birth date {value:?} for employee {external_id}")]
    MalformedDate { external_id: i64, value: String },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(err.to_string())
    }
}
