use serde::{Deserialize, Serialize};

/// Inline photo payload as produced by the photo loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Photo {
    pub base64: String,
    /// Uppercase image subtype, e.g. `PNG` or `JPEG`.
    pub mime_subtype: String,
}

impl Photo {
    pub fn new(base64: impl Into<String>, mime_subtype: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
            mime_subtype: mime_subtype.into().to_ascii_uppercase(),
        }
    }

    pub fn is_present(&self) -> bool {
        !self.base64.is_empty() && !self.mime_subtype.is_empty()
    }
}

/// What is known about a photo file before it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub mime: String,
    pub size: u64,
}
