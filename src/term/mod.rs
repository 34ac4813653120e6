//! Crossterm front end: diff renderer and the fixed-rate frame loop.

mod driver;
mod renderer;

pub use driver::run;
pub use renderer::{glyph_for, Renderer, CELL_W};
