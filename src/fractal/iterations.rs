use num_complex::Complex64;

use crate::fractal::ViewParameters;

/// Rayon d'échappement au carré (rayon 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Convertit les coordonnées pixel (ligne, colonne) en point du plan complexe.
///
/// L'échelle horizontale (1.5 / 0.75) diffère volontairement de l'échelle
/// verticale, et `(2 * row - height) / 2` est une division entière tronquée
/// vers zéro : pour une hauteur impaire les lignes sont décalées d'un
/// demi-pixel. Les deux sont conservés pour reproduire l'image de référence.
pub fn pixel_to_complex(view: &ViewParameters, row: u32, col: u32) -> Complex64 {
    let w = view.width as f64;
    let h = view.height as f64;

    let num_re = 1.5 * col as f64 - 0.75 * w;
    let denom_re = (view.zoom * w) / 2.0;

    let num_im = ((2 * row as i64 - view.height as i64) / 2) as f64;
    let denom_im = (view.zoom * h) / 2.0;

    Complex64::new(
        view.center_x + num_re / denom_re,
        view.center_y + num_im / denom_im,
    )
}

/// Itération escape-time de Julia : z_{n+1} = z_n² + c.
///
/// Retourne l'indice (à partir de 0) du pas où |z|² dépasse 4, ou
/// `max_iterations` si l'orbite reste bornée.
pub fn escape_time(z_pixel: Complex64, c: Complex64, max_iterations: u32) -> u32 {
    let mut z = z_pixel;
    let mut iter = 0u32;
    while iter < max_iterations {
        // Même ordre d'évaluation que la formule de référence
        let re = z.re * z.re - z.im * z.im + c.re;
        let im = 2.0 * z.re * z.im + c.im;
        z = Complex64::new(re, im);

        if re * re + im * im > ESCAPE_RADIUS_SQUARED {
            break;
        }
        iter += 1;
    }
    iter
}
