pub mod error;
pub mod photo;
pub mod qr;
pub mod text;
pub mod vcf;

pub use error::{PhotoError, Result, VcfError};
pub use photo::load_photo;
pub use qr::{render_svg, render_terminal, svg_data_url, DEFAULT_QR_SIZE};
pub use text::{escape_value, fold_line, format_date_for_vcf, unescape_value, unfold_lines};
pub use vcf::{create_vcf_string, create_vcf_string_with, qr_payload, VcfOptions, DEFAULT_PRODUCT_ID};
