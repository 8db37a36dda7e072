pub mod app;
pub mod texture;

pub use app::{native_options, JuliaApp};
