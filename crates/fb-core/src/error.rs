use std::fmt;

/// Rejections raised where records and catalogs are constructed.
/// The analytical functions themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    UnknownEmotion(String),
    UnknownActivity(String),
    DuplicateId(String),
    UnknownTag { activity: String, tag: String },
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "missing required field: {field}"),
            ValidationError::UnknownEmotion(id) => write!(f, "unknown emotion: {id}"),
            ValidationError::UnknownActivity(id) => write!(f, "unknown activity: {id}"),
            ValidationError::DuplicateId(id) => write!(f, "duplicate catalog id: {id}"),
            ValidationError::UnknownTag { activity, tag } => {
                write!(f, "activity {activity} references unknown emotion tag: {tag}")
            }
            ValidationError::InvalidDate(date) => write!(f, "invalid ISO-8601 date: {date}"),
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;
