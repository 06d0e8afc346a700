use crate::domain::FieldId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("field has no text value: {0}")]
    NotATextField(FieldId),
    #[error("unknown social platform: {0}")]
    UnknownPlatform(String),
}
