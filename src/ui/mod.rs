//! Terminal UI: geometry, the screen grid, the viewport renderer, status
//! text, and the ratatui paint layer.

pub mod render;
pub mod screen;
pub mod status;
pub mod viewport;

pub use render::render;
pub use screen::{Geometry, GeometryError, ScreenGrid};
pub use viewport::{CursorPos, Viewport};
