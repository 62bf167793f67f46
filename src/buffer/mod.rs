//! Document storage: the gap buffer and line navigation primitives.

pub mod gap;
pub mod nav;

pub use gap::{DEFAULT_CAPACITY, GapBuffer};
