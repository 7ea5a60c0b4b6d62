pub mod completion;
pub mod drag;
pub mod splitter;

pub use drag::{DragBackend, DragState};
