pub mod canvas;
pub mod escape_time;

pub use canvas::Canvas;
#[allow(unused_imports)]
pub use escape_time::{colorize, render, render_escape_time, render_with};
