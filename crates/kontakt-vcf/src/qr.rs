use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use qrcode::render::{svg, unicode};
use qrcode::QrCode;

pub const DEFAULT_QR_SIZE: u32 = 220;

/// Renders the payload with Unicode half blocks for a terminal.
pub fn render_terminal(payload: &str) -> Result<String> {
    let code = QrCode::new(payload.as_bytes())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

/// Renders the payload as a standalone SVG document at least `size` pixels
/// wide.
pub fn render_svg(payload: &str, size: u32) -> Result<String> {
    let code = QrCode::new(payload.as_bytes())?;
    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(size, size)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
