// Transitive dependency version mismatches we can't control
#![allow(clippy::multiple_crate_versions)]

//! # scrib
//!
//! A tiny text editor for the terminal, built on a fixed-capacity gap
//! buffer.
//!
//! The document lives in one byte region allocated at startup; a movable
//! gap absorbs insertions and deletions, and every screen is recomputed
//! from scratch each pass. When the region fills up, further typing is
//! silently dropped rather than reallocating.
//!
//! ## Architecture
//!
//! The app follows The Elm Architecture (TEA) pattern:
//! - **Model**: Session state (buffer, cursor, viewport, grid)
//! - **Message**: Edit commands
//! - **Update**: Pure state transitions, each ending in a render pass
//! - **View**: Paint the grid and status bar to the terminal
//!
//! ## Modules
//!
//! - [`buffer`]: Gap buffer storage and line navigation
//! - [`editor`]: The cursor and its movement rules
//! - [`ui`]: Viewport paging, the screen grid, status text, painting
//! - [`app`]: Session state, input decoding, and the event loop

pub mod app;
pub mod buffer;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::buffer::GapBuffer;
    pub use crate::editor::Editor;
    pub use crate::ui::viewport::Viewport;
}
