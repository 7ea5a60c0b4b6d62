use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, PointerEvent, TouchEvent};
use yew::prelude::*;

use super::tile::PuzzleTile;
use crate::model::{Grid, Position, Tile};
use crate::state::{DragBackend, DragState};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub tiles: Vec<Tile>,
    pub grid: Grid,
    pub board_px: f64,
    pub backend: DragBackend,
    pub on_move: Callback<(u32, Position)>,
}

// Client coordinates of a move/end event. Touch ends only carry `changedTouches`.
fn event_point(e: &Event, backend: DragBackend, ended: bool) -> Option<(f64, f64)> {
    match backend {
        DragBackend::Pointer => e
            .dyn_ref::<PointerEvent>()
            .map(|p| (p.client_x() as f64, p.client_y() as f64)),
        DragBackend::Touch => {
            let t = e.dyn_ref::<TouchEvent>()?;
            let list = if ended { t.changed_touches() } else { t.touches() };
            list.item(0).map(|t| (t.client_x() as f64, t.client_y() as f64))
        }
    }
}

#[function_component]
pub fn Board(props: &BoardProps) -> Html {
    let board_ref = use_node_ref();
    let drag = use_state(|| None::<DragState>);

    // While a drag is live, follow it on the window so releases outside the board still land.
    {
        let drag = drag.clone();
        let active = *drag;
        let key = active.map(|d| (d.id, d.start_x, d.start_y));
        let backend = props.backend;
        let on_move = props.on_move.clone();
        let board_ref = board_ref.clone();
        let fallback_px = props.board_px;
        use_effect_with(key, move |_| {
            let mut listeners: Vec<EventListener> = Vec::new();
            if let (Some(base), Some(window)) = (active, web_sys::window()) {
                let moving = {
                    let drag = drag.clone();
                    EventListener::new_with_options(
                        &window,
                        backend.move_event(),
                        EventListenerOptions::enable_prevent_default(),
                        move |e: &Event| {
                            if let Some((x, y)) = event_point(e, backend, false) {
                                e.prevent_default();
                                drag.set(Some(base.moved_to(x, y)));
                            }
                        },
                    )
                };
                let ending = {
                    let drag = drag.clone();
                    EventListener::new(&window, backend.end_event(), move |e: &Event| {
                        if let Some((x, y)) = event_point(e, backend, true) {
                            let done = base.moved_to(x, y);
                            let rendered_px = board_ref
                                .cast::<Element>()
                                .map(|el| el.get_bounding_client_rect().width())
                                .filter(|w| *w > 0.0)
                                .unwrap_or(fallback_px);
                            let target = done.drop_position(rendered_px);
                            clog(&format!(
                                "tile {} dropped at ({}, {})",
                                done.id, target.left, target.top
                            ));
                            on_move.emit((done.id, target));
                        }
                        drag.set(None);
                    })
                };
                let cancelling = {
                    let drag = drag.clone();
                    EventListener::new(&window, backend.cancel_event(), move |_| drag.set(None))
                };
                listeners.extend([moving, ending, cancelling]);
            }
            move || drop(listeners)
        });
    }

    let on_drag_start = {
        let drag = drag.clone();
        Callback::from(move |start: DragState| drag.set(Some(start)))
    };

    let size_percent = props.grid.cell_percent();
    let px = props.board_px;
    html! {
        <div
            ref={board_ref}
            class="puzzle-board"
            style={format!("position:relative; width:{px}px; height:{px}px; margin:12px auto; background:#161b22; border:1px solid #30363d; border-radius:6px; touch-action:none;")}
        >
            { for props.tiles.iter().map(|tile| {
                let drag_offset = (*drag)
                    .filter(|d| d.id == tile.id)
                    .map(|d| d.delta_px());
                html! {
                    <PuzzleTile
                        key={tile.id}
                        tile={tile.clone()}
                        {size_percent}
                        backend={props.backend}
                        {drag_offset}
                        on_drag_start={on_drag_start.clone()}
                    />
                }
            }) }
        </div>
    }
}
