use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::color::Coloring;
use crate::fractal::definitions::{
    DEFAULT_CENTER_X, DEFAULT_CENTER_Y, DEFAULT_C_IM, DEFAULT_C_RE, DEFAULT_HEIGHT,
    DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, DEFAULT_ZOOM,
};
use crate::fractal::{ComplexParameter, ViewParameters};

/// Paramètres de rendu communs aux deux binaires.
///
/// Les valeurs par défaut reproduisent l'image de référence. Rien n'est
/// corrigé ni validé ici : le rendu rejette une valeur invalide.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Largeur du canevas en pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Hauteur du canevas en pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Partie réelle de c
    #[arg(long, default_value_t = DEFAULT_C_RE, allow_negative_numbers = true)]
    pub c_re: f64,

    /// Partie imaginaire de c
    #[arg(long, default_value_t = DEFAULT_C_IM, allow_negative_numbers = true)]
    pub c_im: f64,

    /// Décalage horizontal du centre de la vue
    #[arg(long, default_value_t = DEFAULT_CENTER_X, allow_negative_numbers = true)]
    pub center_x: f64,

    /// Décalage vertical du centre de la vue
    #[arg(long, default_value_t = DEFAULT_CENTER_Y, allow_negative_numbers = true)]
    pub center_y: f64,

    /// Facteur de grossissement (> 0)
    #[arg(long, default_value_t = DEFAULT_ZOOM, allow_negative_numbers = true)]
    pub zoom: f64,

    /// Nombre maximal d'itérations par pixel
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    /// Mode de colorisation
    #[arg(long, value_enum, default_value_t = Coloring::Reference)]
    pub coloring: Coloring,
}

impl RenderArgs {
    /// Construit les paramètres de vue et le paramètre c, tels quels.
    pub fn into_params(self) -> (ViewParameters, ComplexParameter) {
        let view = ViewParameters {
            width: self.width,
            height: self.height,
            center_x: self.center_x,
            center_y: self.center_y,
            zoom: self.zoom,
            max_iterations: self.iterations,
        };
        let c = ComplexParameter::new(self.c_re, self.c_im);
        (view, c)
    }
}

/// Logs vers stderr, filtrés par `RUST_LOG` (défaut : `info`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init();
}
