pub mod types;
pub mod definitions;
pub mod iterations;

pub use types::{ComplexParameter, ConfigError, ViewParameters};
#[allow(unused_imports)]
pub use definitions::{default_parameter, default_view};
pub use iterations::{escape_time, pixel_to_complex};
