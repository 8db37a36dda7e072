use rayon::prelude::*;
use tracing::debug;

use crate::color::{color_for_pixel, Coloring};
use crate::fractal::{escape_time, pixel_to_complex, ComplexParameter, ConfigError, ViewParameters};
use crate::render::Canvas;

/// Rend l'ensemble de Julia avec la colorisation de référence.
///
/// Les paramètres sont validés avant tout calcul ; le résultat ne dépend que
/// de `view` et `c`.
pub fn render(view: &ViewParameters, c: &ComplexParameter) -> Result<Canvas, ConfigError> {
    render_with(view, c, Coloring::Reference)
}

/// Comme [`render`], avec un mode de colorisation au choix.
pub fn render_with(
    view: &ViewParameters,
    c: &ComplexParameter,
    coloring: Coloring,
) -> Result<Canvas, ConfigError> {
    view.validate()?;
    c.validate()?;

    let iterations = render_escape_time(view, c);
    Ok(colorize(view, &iterations, coloring))
}

/// Calcule la matrice d'itérations (ligne par ligne, `width * height` entrées).
///
/// Suppose des paramètres déjà validés. Les lignes sont réparties sur les
/// cœurs CPU avec rayon ; chaque tâche n'écrit que dans sa propre ligne.
pub fn render_escape_time(view: &ViewParameters, c: &ComplexParameter) -> Vec<u32> {
    let width = view.width as usize;
    let height = view.height as usize;
    let mut iterations = vec![0u32; width * height];

    if width == 0 || height == 0 {
        return iterations;
    }

    let c = c.as_complex();
    iterations
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, iter_row)| {
            for (col, iter) in iter_row.iter_mut().enumerate() {
                let z_pixel = pixel_to_complex(view, row as u32, col as u32);
                *iter = escape_time(z_pixel, c, view.max_iterations);
            }
        });

    debug!(
        width = view.width,
        height = view.height,
        max_iterations = view.max_iterations,
        "matrice d'itérations calculée"
    );
    iterations
}

/// Colorise une matrice d'itérations en canevas ARGB.
pub fn colorize(view: &ViewParameters, iterations: &[u32], coloring: Coloring) -> Canvas {
    assert_eq!(
        iterations.len(),
        view.width as usize * view.height as usize,
        "Taille de la matrice d'itérations invalide"
    );

    let max = view.max_iterations;
    let pixels: Vec<u32> = iterations
        .par_iter()
        .map(|&iter| color_for_pixel(iter, max, coloring))
        .collect();

    Canvas::from_argb(view.width, view.height, pixels)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::color::color_models::OPAQUE;
    use crate::fractal::{default_parameter, default_view};

    fn view(width: u32, height: u32) -> ViewParameters {
        ViewParameters { width, height, ..default_view() }
    }

    #[test]
    fn test_4x4_reference_scenario() {
        let v = view(4, 4);
        let c = default_parameter();
        let canvas = render(&v, &c).unwrap();

        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 4);
        assert_eq!(canvas.pixels().len(), 16);

        let iterations = render_escape_time(&v, &c);
        // (-1.5, -1.0) s'échappe dès le premier pas -> brillance nulle
        assert_eq!(iterations[0], 0);
        assert_eq!(canvas.pixel(0, 0), OPAQUE);
        assert!(iterations.iter().all(|&i| i <= v.max_iterations));
    }

    #[test]
    fn test_origin_pixel_stays_bounded() {
        // Le pixel (2, 2) correspond à l'origine, point fixe pour c = 0
        let v = view(4, 4);
        let iterations = render_escape_time(&v, &ComplexParameter::new(0.0, 0.0));
        assert_eq!(iterations[2 * 4 + 2], v.max_iterations);
    }

    #[test]
    fn test_render_is_deterministic() {
        let v = view(64, 48);
        let c = default_parameter();
        let a = render(&v, &c).unwrap();
        let b = render(&v, &c).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_escaping_pixels_are_black() {
        // Pour c = 0 le disque unité reste borné
        let v = view(40, 40);
        let c = ComplexParameter::new(0.0, 0.0);
        let iterations = render_escape_time(&v, &c);
        let canvas = colorize(&v, &iterations, Coloring::Reference);

        let mut inside = 0;
        for (idx, &iter) in iterations.iter().enumerate() {
            if iter == v.max_iterations {
                inside += 1;
                assert_eq!(canvas.pixels()[idx], OPAQUE);
            }
        }
        assert!(inside > 0);
    }

    #[test]
    fn test_single_iteration_budget() {
        let v = ViewParameters { max_iterations: 1, ..view(16, 16) };
        let c = default_parameter();
        let iterations = render_escape_time(&v, &c);
        for (idx, &iter) in iterations.iter().enumerate() {
            let (row, col) = ((idx / 16) as u32, (idx % 16) as u32);
            let z0 = pixel_to_complex(&v, row, col);
            let z1 = z0 * z0 + c.as_complex();
            let expected = if z1.norm_sqr() > 4.0 { 0 } else { 1 };
            assert_eq!(iter, expected);
        }
        assert!(render(&v, &c).is_ok());
    }

    #[test]
    fn test_matches_sequential_loop() {
        let v = view(13, 7);
        let c = default_parameter();
        let iterations = render_escape_time(&v, &c);
        let mut expected = Vec::new();
        for row in 0..v.height {
            for col in 0..v.width {
                expected.push(escape_time(pixel_to_complex(&v, row, col), c.as_complex(), v.max_iterations));
            }
        }
        assert_eq!(iterations, expected);
    }

    #[test]
    fn test_invalid_configuration_aborts() {
        let c = default_parameter();
        assert_eq!(
            render(&view(0, 10), &c),
            Err(ConfigError::ZeroDimension { width: 0, height: 10 })
        );
        let v = ViewParameters { zoom: 0.0, ..view(10, 10) };
        assert_eq!(render(&v, &c), Err(ConfigError::InvalidZoom(0.0)));
        let v = ViewParameters { max_iterations: 0, ..view(10, 10) };
        assert_eq!(render(&v, &c), Err(ConfigError::ZeroIterations));
        let bad_c = ComplexParameter::new(0.0, f64::INFINITY);
        assert!(matches!(
            render(&view(10, 10), &bad_c),
            Err(ConfigError::NonFinite { name: "c_im", .. })
        ));
    }

    #[test]
    fn test_normalized_coloring_keeps_dimensions() {
        let v = view(9, 5);
        let canvas = render_with(&v, &default_parameter(), Coloring::Normalized).unwrap();
        assert_eq!(canvas.pixels().len(), 45);
        assert_eq!(canvas.pixel(0, 0), OPAQUE);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_dimensions_and_bounds(
            width in 1u32..24,
            height in 1u32..24,
            max_iterations in 1u32..64,
            zoom in 0.25f64..8.0,
            center_x in -1.0f64..1.0,
            center_y in -1.0f64..1.0,
        ) {
            let v = ViewParameters { width, height, center_x, center_y, zoom, max_iterations };
            let c = default_parameter();
            let canvas = render(&v, &c).unwrap();
            prop_assert_eq!(canvas.pixels().len(), (width * height) as usize);

            let iterations = render_escape_time(&v, &c);
            prop_assert!(iterations.iter().all(|&i| i <= max_iterations));
            for (idx, &iter) in iterations.iter().enumerate() {
                if iter == max_iterations {
                    prop_assert_eq!(canvas.pixels()[idx], OPAQUE);
                }
            }
        }

        #[test]
        fn prop_render_is_deterministic(
            width in 1u32..16,
            height in 1u32..16,
            c_re in -1.0f64..1.0,
            c_im in -1.0f64..1.0,
        ) {
            let v = ViewParameters { max_iterations: 50, ..view(width, height) };
            let c = ComplexParameter::new(c_re, c_im);
            prop_assert_eq!(render(&v, &c).unwrap(), render(&v, &c).unwrap());
        }
    }
}
