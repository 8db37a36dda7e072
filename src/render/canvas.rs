use image::{Rgba, RgbaImage};

/// Grille de couleurs ARGB (`0xAARRGGBB`), ligne par ligne, origine en haut à gauche.
///
/// Construite une seule fois par passe de rendu puis immuable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    pub(crate) fn from_argb(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Couleur du pixel (ligne, colonne). Panique hors des bornes.
    pub fn pixel(&self, row: u32, col: u32) -> u32 {
        assert!(row < self.height && col < self.width, "pixel ({row}, {col}) hors du canevas");
        self.pixels[row as usize * self.width as usize + col as usize]
    }

    #[allow(dead_code)]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Copie RGBA 8 bits, sans perte.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let [a, r, g, b] = self.pixel(y, x).to_be_bytes();
            Rgba([r, g, b, a])
        })
    }
}
