// Drag gesture bookkeeping, split out of the board so the drop math stays testable.

use serde::{Deserialize, Serialize};

use crate::model::Position;

/// Which DOM events drive dragging. Picked once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragBackend {
    Pointer,
    Touch,
}

impl DragBackend {
    /// Coarse primary pointer means a touch device; anything else uses pointer events.
    pub fn detect() -> Self {
        let Some(win) = web_sys::window() else {
            return DragBackend::Pointer;
        };
        let coarse = win
            .match_media("(pointer: coarse)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);
        if coarse || (win.navigator().max_touch_points() > 0 && !has_fine_pointer(&win)) {
            DragBackend::Touch
        } else {
            DragBackend::Pointer
        }
    }

    pub fn move_event(&self) -> &'static str {
        match self {
            DragBackend::Pointer => "pointermove",
            DragBackend::Touch => "touchmove",
        }
    }

    pub fn end_event(&self) -> &'static str {
        match self {
            DragBackend::Pointer => "pointerup",
            DragBackend::Touch => "touchend",
        }
    }

    pub fn cancel_event(&self) -> &'static str {
        match self {
            DragBackend::Pointer => "pointercancel",
            DragBackend::Touch => "touchcancel",
        }
    }
}

fn has_fine_pointer(win: &web_sys::Window) -> bool {
    win.match_media("(pointer: fine)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(true)
}

/// One tile being dragged. Client coordinates are in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub id: u32,
    pub origin: Position,
    pub start_x: f64,
    pub start_y: f64,
    pub last_x: f64,
    pub last_y: f64,
}

impl DragState {
    pub fn begin(id: u32, origin: Position, x: f64, y: f64) -> Self {
        Self {
            id,
            origin,
            start_x: x,
            start_y: y,
            last_x: x,
            last_y: y,
        }
    }

    pub fn moved_to(self, x: f64, y: f64) -> Self {
        Self {
            last_x: x,
            last_y: y,
            ..self
        }
    }

    pub fn delta_px(&self) -> (f64, f64) {
        (self.last_x - self.start_x, self.last_y - self.start_y)
    }

    pub fn drop_position(&self, board_px: f64) -> Position {
        let (dx, dy) = self.delta_px();
        drop_position(self.origin, dx, dy, board_px)
    }
}

/// New tile offset after a drag of `(dx, dy)` pixels on a board rendered
/// `board_px` wide, rounded to whole percent.
pub fn drop_position(origin: Position, dx: f64, dy: f64, board_px: f64) -> Position {
    let scale = if board_px > 0.0 { 100.0 / board_px } else { 0.0 };
    Position {
        left: (origin.left + dx * scale).round(),
        top: (origin.top + dy * scale).round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_delta_is_converted_to_percent() {
        let origin = Position { left: 10.0, top: 20.0 };
        assert_eq!(drop_position(origin, 60.0, -30.0, 600.0), Position { left: 20.0, top: 15.0 });
        assert_eq!(drop_position(origin, 60.0, -30.0, 300.0), Position { left: 30.0, top: 10.0 });
    }

    #[test]
    fn result_is_rounded() {
        let origin = Position { left: 33.4, top: 66.6 };
        assert_eq!(drop_position(origin, 1.0, 1.0, 600.0), Position { left: 34.0, top: 67.0 });
    }

    #[test]
    fn drops_off_board_are_kept() {
        let origin = Position { left: 90.0, top: 5.0 };
        assert_eq!(drop_position(origin, 120.0, -60.0, 400.0), Position { left: 120.0, top: -10.0 });
    }

    #[test]
    fn zero_sized_board_leaves_position() {
        let origin = Position { left: 12.0, top: 7.0 };
        assert_eq!(drop_position(origin, 50.0, 50.0, 0.0), origin);
    }

    #[test]
    fn drag_tracks_latest_pointer() {
        let drag = DragState::begin(3, Position { left: 50.0, top: 50.0 }, 100.0, 100.0)
            .moved_to(130.0, 90.0)
            .moved_to(160.0, 40.0);
        assert_eq!(drag.delta_px(), (60.0, -60.0));
        assert_eq!(drag.drop_position(600.0), Position { left: 60.0, top: 40.0 });
        assert_eq!(drag.id, 3);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn detected_backend_names_matching_events() {
        let backend = DragBackend::detect();
        let prefix = match backend {
            DragBackend::Pointer => "pointer",
            DragBackend::Touch => "touch",
        };
        for name in [backend.move_event(), backend.end_event(), backend.cancel_event()] {
            assert!(name.starts_with(prefix), "{name}");
        }
    }
}
