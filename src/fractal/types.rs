use num_complex::Complex64;
use thiserror::Error;

/// Paramètres de vue : taille du canevas, centre, zoom et budget d'itérations.
///
/// Immuables pendant un rendu ; ils définissent la correspondance
/// pixel -> plan complexe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewParameters {
    pub width: u32,
    pub height: u32,
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
    pub max_iterations: u32,
}

impl ViewParameters {
    /// Vérifie les préconditions du rendu. Aucune valeur n'est corrigée.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ConfigError::InvalidZoom(self.zoom));
        }
        check_finite("center_x", self.center_x)?;
        check_finite("center_y", self.center_y)?;
        self.pixel_count()?;
        Ok(())
    }

    /// Nombre de pixels du canevas (width * height).
    pub fn pixel_count(&self) -> Result<usize, ConfigError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(ConfigError::CanvasTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}

/// Paramètre c de l'itération z -> z² + c, fixe pour tout le processus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplexParameter {
    pub c_re: f64,
    pub c_im: f64,
}

impl ComplexParameter {
    pub fn new(c_re: f64, c_im: f64) -> Self {
        Self { c_re, c_im }
    }

    pub fn as_complex(&self) -> Complex64 {
        Complex64::new(self.c_re, self.c_im)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("c_re", self.c_re)?;
        check_finite("c_im", self.c_im)
    }
}

/// Erreurs de configuration, détectées avant la boucle de rendu.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("dimensions invalides {width}x{height} : largeur et hauteur doivent être > 0")]
    ZeroDimension { width: u32, height: u32 },

    #[error("le nombre maximal d'itérations doit être > 0")]
    ZeroIterations,

    #[error("zoom invalide ({0}) : doit être fini et > 0")]
    InvalidZoom(f64),

    #[error("paramètre {name} non fini ({value})")]
    NonFinite { name: &'static str, value: f64 },

    #[error("canevas trop grand : {width}x{height} pixels")]
    CanvasTooLarge { width: u32, height: u32 },
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}
