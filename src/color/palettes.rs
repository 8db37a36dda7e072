use clap::ValueEnum;

use crate::color::color_models::{hsb_to_argb, hsb_to_rgb, pack_rgb, Hsb, OPAQUE};

/// Nombre de teintes distinctes avant que le cycle ne recommence.
pub const HUE_CYCLE: u32 = 256;

/// Mode de colorisation des pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Coloring {
    /// Conversion HSB brute : teinte = iter mod 256, saturation = 255,
    /// brillance = iter (image de référence).
    #[default]
    Reference,
    /// Teinte répartie sur le cercle chromatique, brillance iter / max.
    Normalized,
}

impl Coloring {
    pub fn name(self) -> &'static str {
        match self {
            Coloring::Reference => "Reference",
            Coloring::Normalized => "Normalized",
        }
    }
}

/// Couleur ARGB d'un pixel selon son nombre d'itérations.
///
/// Un point qui ne s'échappe pas (`iter == max_iterations`) est toujours noir.
pub fn color_for_pixel(iter: u32, max_iterations: u32, coloring: Coloring) -> u32 {
    let escaped = iter < max_iterations;
    match coloring {
        Coloring::Reference => {
            let brightness = if escaped { iter as f32 } else { 0.0 };
            hsb_to_argb((iter % HUE_CYCLE) as f32, 255.0, brightness)
        }
        Coloring::Normalized => {
            if !escaped {
                return OPAQUE;
            }
            let hsb = Hsb {
                h: (iter % HUE_CYCLE) as f64 / HUE_CYCLE as f64 * 360.0,
                s: 1.0,
                b: iter as f64 / max_iterations as f64,
            };
            let (r, g, b) = hsb_to_rgb(hsb);
            pack_rgb(r, g, b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_escaping_is_black() {
        for max in [1, 250, 300] {
            assert_eq!(color_for_pixel(max, max, Coloring::Reference), OPAQUE);
            assert_eq!(color_for_pixel(max, max, Coloring::Normalized), OPAQUE);
        }
    }

    #[test]
    fn test_immediate_escape_is_black() {
        // iter = 0 : brillance nulle dans les deux modes
        assert_eq!(color_for_pixel(0, 250, Coloring::Reference), OPAQUE);
        assert_eq!(color_for_pixel(0, 250, Coloring::Normalized), OPAQUE);
    }

    #[test]
    fn test_reference_matches_raw_hsb() {
        assert_eq!(color_for_pixel(1, 250, Coloring::Reference), 0xffff_ffff);
        for iter in [2, 17, 249] {
            assert_eq!(
                color_for_pixel(iter, 250, Coloring::Reference),
                hsb_to_argb(iter as f32, 255.0, iter as f32)
            );
        }
    }

    #[test]
    fn test_reference_hue_cycles() {
        // 300 mod 256 = 44, même teinte intégrale -> secteur 0 dans les deux cas
        assert_eq!(
            color_for_pixel(300, 400, Coloring::Reference),
            hsb_to_argb(44.0, 255.0, 300.0)
        );
    }

    #[test]
    fn test_normalized_escaped_has_brightness() {
        let argb = color_for_pixel(125, 250, Coloring::Normalized);
        assert_eq!(argb >> 24, 0xff);
        assert_ne!(argb, OPAQUE);
    }

    #[test]
    fn test_coloring_from_cli_name() {
        assert_eq!(Coloring::from_str("reference", true), Ok(Coloring::Reference));
        assert_eq!(Coloring::from_str("normalized", true), Ok(Coloring::Normalized));
        assert!(Coloring::from_str("plasma", true).is_err());
    }
}
