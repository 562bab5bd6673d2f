use std::fmt;

use fb_core::ValidationError;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Json(serde_json::Error),
    Config(toml::de::Error),
    Io(std::io::Error),
    Validation(ValidationError),
    InvalidData(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Sqlite(e) => write!(f, "SQLite error: {e}"),
            StoreError::Json(e) => write!(f, "JSON error: {e}"),
            StoreError::Config(e) => write!(f, "config error: {e}"),
            StoreError::Io(e) => write!(f, "I/O error: {e}"),
            StoreError::Validation(e) => write!(f, "validation failed: {e}"),
            StoreError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Sqlite(e) => Some(e),
            StoreError::Json(e) => Some(e),
            StoreError::Config(e) => Some(e),
            StoreError::Io(e) => Some(e),
            StoreError::Validation(e) => Some(e),
            StoreError::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Sqlite(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(e: toml::de::Error) -> Self {
        StoreError::Config(e)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<ValidationError> for StoreError {
    fn from(e: ValidationError) -> Self {
        StoreError::Validation(e)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
