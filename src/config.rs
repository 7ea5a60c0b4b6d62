// Tunables for the puzzle. Everything is compile-time; nothing is read from storage.

/// Uploaded images kept per session.
pub const MAX_UPLOADS: usize = 5;

pub const MIN_PIECES: u32 = 4;
pub const MAX_PIECES: u32 = 100;
pub const DEFAULT_PIECES: u32 = 16;

/// Allowed deviation from the home slot, in percentage points of the board.
pub const TOLERANCE_PERCENT: f64 = 10.0;

pub const BOARD_MAX_PX: f64 = 600.0;
pub const BOARD_VIEWPORT_RATIO: f64 = 0.8;

pub const DRAGGING_OPACITY: f64 = 0.5;
