use web_sys::{PointerEvent, TouchEvent};
use yew::prelude::*;

use crate::config::DRAGGING_OPACITY;
use crate::model::Tile;
use crate::state::{DragBackend, DragState};

#[derive(Properties, PartialEq, Clone)]
pub struct PuzzleTileProps {
    pub tile: Tile,
    /// Edge length in percent of the board.
    pub size_percent: f64,
    pub backend: DragBackend,
    /// Pixel offset while this tile is being dragged.
    pub drag_offset: Option<(f64, f64)>,
    pub on_drag_start: Callback<DragState>,
}

#[function_component]
pub fn PuzzleTile(props: &PuzzleTileProps) -> Html {
    let id = props.tile.id;
    let origin = props.tile.position;

    let pointer_down = (props.backend == DragBackend::Pointer).then(|| {
        let cb = props.on_drag_start.clone();
        Callback::from(move |e: PointerEvent| {
            if e.button() != 0 {
                return;
            }
            e.prevent_default();
            cb.emit(DragState::begin(id, origin, e.client_x() as f64, e.client_y() as f64));
        })
    });
    let touch_start = (props.backend == DragBackend::Touch).then(|| {
        let cb = props.on_drag_start.clone();
        Callback::from(move |e: TouchEvent| {
            if e.touches().length() != 1 {
                return;
            }
            if let Some(t) = e.touches().item(0) {
                cb.emit(DragState::begin(id, origin, t.client_x() as f64, t.client_y() as f64));
            }
        })
    });

    let (transform, opacity, z) = match props.drag_offset {
        Some((dx, dy)) => (format!("translate({dx}px, {dy}px)"), DRAGGING_OPACITY, 10),
        None => ("none".to_string(), 1.0, 1),
    };
    let style = format!(
        "position:absolute; left:{}%; top:{}%; width:{}%; height:{}%; opacity:{}; transform:{}; z-index:{}; touch-action:none; user-select:none; cursor:grab; box-shadow:0 0 0 1px rgba(0,0,0,0.35);",
        origin.left, origin.top, props.size_percent, props.size_percent, opacity, transform, z
    );

    html! {
        <img
            class="puzzle-tile"
            src={AttrValue::from(props.tile.fragment.clone())}
            alt={format!("piece {}", id + 1)}
            draggable="false"
            style={style}
            onpointerdown={pointer_down}
            ontouchstart={touch_start}
        />
    }
}
