pub mod palettes;
pub mod color_models;

pub use palettes::{color_for_pixel, Coloring};
