pub mod domain;
pub mod error;
pub mod filename;
pub mod preview;
pub mod rules;

pub use domain::*;
pub use error::CoreError;
pub use filename::{build_safe_file_name, safe_file_name, FALLBACK_FILE_NAME};
pub use preview::{build_preview_model, build_vcf_preview, PreviewModel, VcfPreview};
pub use rules::*;
