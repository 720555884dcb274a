use anyhow::{Context, Result};
use qrcode::render::svg;
use qrcode::QrCode;

const QR_SIZE: u32 = 128;

/// Generate the share QR code for an address as SVG (stable, no image crate)
pub fn address_qr_svg(address: &str) -> Result<String> {
    let code = QrCode::new(address.as_bytes()).context("Failed to generate QR code")?;

    let svg = code
        .render::<svg::Color>()
        .min_dimensions(QR_SIZE, QR_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(svg)
}
