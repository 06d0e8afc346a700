pub mod photo_file;
pub mod validation;

pub use photo_file::{photo_subtype, validate_photo_file, ACCEPTED_PHOTO_TYPES, KIB, MAX_PHOTO_SIZE};
pub use validation::{can_serialize, compute_errors, compute_field_error, ErrorSet, FieldError};
