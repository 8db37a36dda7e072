use std::path::Path;

use image::{ImageError, ImageFormat};
use tracing::info;

use crate::render::Canvas;

/// Enregistre le canevas en PNG RGBA, sans perte : un pixel par entrée,
/// ligne par ligne, origine en haut à gauche.
pub fn save_png(canvas: &Canvas, output: &Path) -> Result<(), ImageError> {
    let img = canvas.to_rgba_image();
    img.save_with_format(output, ImageFormat::Png)?;
    info!(
        path = %output.display(),
        width = canvas.width(),
        height = canvas.height(),
        "PNG écrit"
    );
    Ok(())
}
