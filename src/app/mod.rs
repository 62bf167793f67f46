//! Session state and the main event loop.
//!
//! The shape follows The Elm Architecture:
//! - [`Model`]: the complete session state
//! - [`Message`]: every edit command
//! - [`update`]: pure state transition ending in a render pass
//! - [`App::run`]: blocking read → update → draw loop

mod event_loop;
mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Message, update};

use std::path::PathBuf;

use crate::buffer::DEFAULT_CAPACITY;

/// Owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    capacity: usize,
}

impl App {
    /// Create an application, optionally for an existing file.
    pub const fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Override the storage capacity (the document must fit in it).
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
