use kontakt_core::FieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VcfError {
    #[error("qr error: {0}")]
    Qr(#[from] qrcode::types::QrError),
}

/// Why a photo could not be turned into an inline payload.
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("photo rejected: {0}")]
    Rejected(FieldError),
    #[error("unknown image type: {0}")]
    UnknownType(String),
    #[error("photo file is empty")]
    Empty,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PhotoError {
    /// The message merged into the error set under the `photo` key.
    ///
    /// Only rejections block export. A photo that cannot be read is dropped
    /// and the card is written without it, so this returns `None`.
    pub fn field_error(&self) -> Option<FieldError> {
        match self {
            PhotoError::Rejected(error) => Some(error.clone()),
            PhotoError::UnknownType(_) => Some(FieldError::UnsupportedPhotoType),
            PhotoError::Empty | PhotoError::Io(_) => None,
        }
    }

    /// Message shown to the user when the photo is dropped.
    pub fn notice(&self) -> FieldError {
        self.field_error().unwrap_or(FieldError::PhotoUnreadable)
    }
}

pub type Result<T> = std::result::Result<T, VcfError>;
