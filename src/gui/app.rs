use egui::{Context, TextureHandle, TextureOptions};
use tracing::debug;

use crate::fractal::{ComplexParameter, ViewParameters};
use crate::gui::texture::canvas_to_color_image;
use crate::render::Canvas;

/// Titre de la fenêtre, p. ex. `Julia Set: -0.7 + 0.27015i`.
pub fn window_title(c: &ComplexParameter) -> String {
    format!("Julia Set: {} + {}i", format_double(c.c_re), format_double(c.c_im))
}

/// Écriture d'un double façon `Double.toString` : au moins une décimale
/// (`1.0`), et notation `d.dddE±n` hors de [1e-3, 1e7).
fn format_double(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let abs = value.abs();

    if abs == 0.0 || (1e-3..1e7).contains(&abs) {
        let mut plain = abs.to_string();
        if !plain.contains('.') {
            plain.push_str(".0");
        }
        return format!("{sign}{plain}");
    }

    // `{:e}` donne les chiffres les plus courts, p. ex. `1e-4` ou `1.23e7`
    let scientific = format!("{abs:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let mantissa = if mantissa.contains('.') {
        mantissa.to_string()
    } else {
        format!("{mantissa}.0")
    };
    format!("{sign}{mantissa}E{exponent}")
}

/// Options de la fenêtre : taille exacte du canevas, non redimensionnable.
pub fn native_options(view: &ViewParameters, c: &ComplexParameter) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_title(c))
            .with_inner_size([view.width as f32, view.height as f32])
            .with_resizable(false),
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    }
}

/// Affiche un canevas déjà calculé. Aucun recalcul pendant la vie de la fenêtre.
pub struct JuliaApp {
    canvas: Canvas,
    texture: Option<TextureHandle>,
}

impl JuliaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, canvas: Canvas) -> Self {
        Self { canvas, texture: None }
    }

    /// Envoie le canevas au GPU au premier affichage.
    fn ensure_texture(&mut self, ctx: &Context) -> &TextureHandle {
        let canvas = &self.canvas;
        self.texture.get_or_insert_with(|| {
            debug!(width = canvas.width(), height = canvas.height(), "chargement de la texture");
            ctx.load_texture("julia", canvas_to_color_image(canvas), TextureOptions::NEAREST)
        })
    }
}

impl eframe::App for JuliaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let size = egui::Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        let texture = self.ensure_texture(ctx).clone();

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                ui.add(egui::Image::new(&texture).fit_to_exact_size(size));
            });
    }
}
