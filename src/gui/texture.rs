use egui::ColorImage;

use crate::render::Canvas;

/// Convertit un canevas ARGB en ColorImage egui pour affichage.
pub fn canvas_to_color_image(canvas: &Canvas) -> ColorImage {
    let width = canvas.width() as usize;
    let height = canvas.height() as usize;

    // Canvas stocke 0xAARRGGBB, ColorImage attend [R, G, B, A, ...]
    let img = canvas.to_rgba_image();
    ColorImage::from_rgba_unmultiplied([width, height], img.as_raw())
}
