use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use recipe_qr_shared::RecipeQrError;
use std::io::Cursor;

/// Renders text to a PNG-encoded QR code.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrGenerator;

impl QrGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Default error-correction level, quiet zone included. Fails with
    /// `Encoding` when the text exceeds QR capacity.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, RecipeQrError> {
        let code = QrCode::new(text.as_bytes())
            .map_err(|e| RecipeQrError::Encoding(e.to_string()))?;

        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(10, 10)
            .build();

        let mut png_bytes = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| RecipeQrError::Encoding(e.to_string()))?;

        Ok(png_bytes)
    }
}
