use crate::error::PhotoError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use kontakt_core::{photo_subtype, validate_photo_file, Photo, PhotoFile};
use std::fs;
use std::io::Read;
use std::path::Path;

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
const JPEG_SIGNATURE: &[u8] = &[0xff, 0xd8, 0xff];
const GIF_SIGNATURE: &[u8] = b"GIF8";

/// Reads an image from disk and turns it into an inline vCard photo.
///
/// The type is taken from the file's magic bytes, falling back to its
/// extension. Type and size are checked before the content is read.
pub fn load_photo(path: &Path, max_bytes: u64) -> Result<Photo, PhotoError> {
    let metadata = fs::metadata(path)?;
    let mime = sniff_mime(path)?;
    let file = PhotoFile {
        mime: mime.clone(),
        size: metadata.len(),
    };
    if let Some(error) = validate_photo_file(Some(&file), max_bytes) {
        return Err(PhotoError::Rejected(error));
    }

    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(PhotoError::Empty);
    }
    let subtype = photo_subtype(&mime).ok_or(PhotoError::UnknownType(mime))?;
    Ok(Photo::new(STANDARD.encode(bytes), subtype))
}

fn sniff_mime(path: &Path) -> Result<String, PhotoError> {
    let mut head = [0u8; 8];
    let read = fs::File::open(path)?.read(&mut head)?;
    if let Some(mime) = mime_from_magic(&head[..read]) {
        return Ok(mime.to_string());
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg".to_string()),
        "png" => Ok("image/png".to_string()),
        "gif" => Ok("image/gif".to_string()),
        "webp" => Ok("image/webp".to_string()),
        "txt" => Ok("text/plain".to_string()),
        other => Err(PhotoError::UnknownType(other.to_string())),
    }
}

fn mime_from_magic(head: &[u8]) -> Option<&'static str> {
    if head.starts_with(PNG_SIGNATURE) {
        Some("image/png")
    } else if head.starts_with(JPEG_SIGNATURE) {
        Some("image/jpeg")
    } else if head.starts_with(GIF_SIGNATURE) {
        Some("image/gif")
    } else {
        None
    }
}
