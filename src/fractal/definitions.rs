use crate::fractal::{ComplexParameter, ViewParameters};

// Valeurs de référence au démarrage
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 1000;
pub const DEFAULT_C_RE: f64 = -0.7;
pub const DEFAULT_C_IM: f64 = 0.27015;
pub const DEFAULT_CENTER_X: f64 = 0.0;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 250;

/// Vue par défaut : 1000x1000, centrée sur l'origine, zoom 1, 250 itérations.
#[allow(dead_code)]
pub fn default_view() -> ViewParameters {
    ViewParameters {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        center_x: DEFAULT_CENTER_X,
        center_y: DEFAULT_CENTER_Y,
        zoom: DEFAULT_ZOOM,
        max_iterations: DEFAULT_MAX_ITERATIONS,
    }
}

/// c = -0.7 + 0.27015i
#[allow(dead_code)]
pub fn default_parameter() -> ComplexParameter {
    ComplexParameter::new(DEFAULT_C_RE, DEFAULT_C_IM)
}
