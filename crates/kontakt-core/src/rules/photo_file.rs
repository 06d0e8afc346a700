use crate::domain::PhotoFile;
use crate::rules::validation::FieldError;

pub const KIB: u64 = 1024;
/// Default ceiling for embedded photos.
pub const MAX_PHOTO_SIZE: u64 = 400 * KIB;
pub const ACCEPTED_PHOTO_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Checks type and size before a photo is read. No file means no error.
pub fn validate_photo_file(file: Option<&PhotoFile>, max_bytes: u64) -> Option<FieldError> {
    let file = file?;
    let mime = file.mime.trim().to_ascii_lowercase();
    if !ACCEPTED_PHOTO_TYPES.contains(&mime.as_str()) {
        return Some(FieldError::UnsupportedPhotoType);
    }
    if file.size > max_bytes {
        return Some(FieldError::PhotoTooLarge {
            max_kib: max_bytes / KIB,
        });
    }
    None
}

/// `image/png` -> `PNG`; the `TYPE=` value of the `PHOTO` line.
pub fn photo_subtype(mime: &str) -> Option<String> {
    let (kind, subtype) = mime.trim().split_once('/')?;
    if !kind.eq_ignore_ascii_case("image") || subtype.is_empty() {
        return None;
    }
    Some(subtype.to_ascii_uppercase())
}
