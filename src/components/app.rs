use std::rc::Rc;

use gloo::events::EventListener;
use gloo::file::futures::read_as_bytes;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    board::Board, completion_banner::CompletionBanner, controls_panel::ControlsPanel,
    upload_panel::UploadPanel,
};
use crate::config::MAX_UPLOADS;
use crate::error::PuzzleError;
use crate::model::{AppAction, AppState, Position, UploadedImage};
use crate::state::DragBackend;
use crate::state::splitter::split_async;
use crate::util::{alert, clog, random_seed, to_data_uri, viewport_width};

#[derive(Serialize)]
struct CompletionSummary<'a> {
    image: &'a str,
    pieces: usize,
    moves: u32,
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);
    let backend = use_state(DragBackend::detect);
    let generation = use_mut_ref(|| 0u64);
    let notified = use_mut_ref(|| None::<u64>);

    // Board size tracks the viewport
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            state.dispatch(AppAction::Resize { viewport_width: viewport_width() });
            let listener = web_sys::window().map(|window| {
                let state = state.clone();
                EventListener::new(&window, "resize", move |_| {
                    state.dispatch(AppAction::Resize { viewport_width: viewport_width() });
                })
            });
            move || drop(listener)
        });
    }

    // One notification per finished puzzle
    {
        let state = state.clone();
        let notified = notified.clone();
        use_effect_with((state.complete, state.board_generation), move |&(complete, generation)| {
            if complete && *notified.borrow() != Some(generation) {
                *notified.borrow_mut() = Some(generation);
                let summary = CompletionSummary {
                    image: state.selected_image().map(|i| i.name.as_str()).unwrap_or(""),
                    pieces: state.tiles.len(),
                    moves: state.moves,
                };
                if let Ok(json) = serde_json::to_string(&summary) {
                    clog(&format!("puzzle complete {json}"));
                }
                alert("Congratulations! You completed the puzzle!");
            }
            || ()
        });
    }

    let on_file = {
        let state = state.clone();
        Callback::from(move |file: web_sys::File| {
            if let Err(err) = state
                .check_upload()
                .and_then(|()| AppState::check_image_mime(&file.type_()))
            {
                alert(&err.to_string());
                return;
            }
            let state = state.clone();
            let file = gloo::file::File::from(file);
            spawn_local(async move {
                match read_as_bytes(&file).await {
                    Ok(bytes) => {
                        let mime = file.raw_mime_type();
                        clog(&format!("uploaded {} ({} bytes, {mime})", file.name(), bytes.len()));
                        state.dispatch(AppAction::AddImage(UploadedImage {
                            name: file.name(),
                            data_uri: Rc::from(to_data_uri(&mime, &bytes)),
                            mime,
                        }));
                    }
                    Err(e) => {
                        gloo::console::warn!("file read failed", e.to_string());
                        alert(&PuzzleError::Read(e.to_string()).to_string());
                    }
                }
            });
        })
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |idx: usize| state.dispatch(AppAction::SelectImage(idx)))
    };

    let on_piece_count = {
        let state = state.clone();
        Callback::from(move |count: u32| state.dispatch(AppAction::SetPieceCount(count)))
    };

    let on_start = {
        let state = state.clone();
        let generation = generation.clone();
        Callback::from(move |_| {
            let (image, grid) = match state.puzzle_request() {
                Ok(req) => req,
                Err(err) => {
                    alert(&err.to_string());
                    return;
                }
            };
            let current = {
                let mut g = generation.borrow_mut();
                *g += 1;
                *g
            };
            clog(&format!("starting {} piece puzzle from {}", grid.len(), image.name));
            state.dispatch(AppAction::BeginPuzzle { generation: current });
            let state = state.clone();
            spawn_local(async move {
                match split_async(image.data_uri.clone(), grid, random_seed()).await {
                    Ok(tiles) => {
                        state.dispatch(AppAction::PuzzleReady { generation: current, grid, tiles });
                    }
                    Err(err) => {
                        gloo::console::warn!("split failed", err.to_string());
                        alert(&err.to_string());
                        state.dispatch(AppAction::PuzzleFailed { generation: current });
                    }
                }
            });
        })
    };

    let on_move = {
        let state = state.clone();
        Callback::from(move |(id, position): (u32, Position)| {
            state.dispatch(AppAction::MoveTile { id, position });
        })
    };

    let board = match state.grid {
        Some(grid) if state.is_active() => html! {
            <Board
                tiles={state.tiles.clone()}
                {grid}
                board_px={state.board_px}
                backend={*backend}
                on_move={on_move}
            />
        },
        _ => html! {
            <div style={format!("width:{0}px; height:{0}px; margin:12px auto; display:flex; align-items:center; justify-content:center; border:1px dashed #30363d; border-radius:6px; opacity:0.7;", state.board_px)}>
                { if state.preparing { "Cutting pieces..." } else { "Upload an image and press Start" } }
            </div>
        },
    };

    html! {
        <div id="root" style="padding:12px; font-family:sans-serif; color:#c9d1d9; background:#0e1116; min-height:100vh;">
            <h1 style="text-align:center; margin:4px 0 12px 0;">{"Image Puzzle"}</h1>
            <UploadPanel
                images={state.images.clone()}
                selected={state.selected}
                max={MAX_UPLOADS}
                on_file={on_file}
                on_select={on_select}
            />
            <ControlsPanel
                piece_count={state.piece_count}
                preparing={state.preparing}
                on_piece_count={on_piece_count}
                on_start={on_start}
            />
            <CompletionBanner show={state.complete} pieces={state.tiles.len()} moves={state.moves} />
            { board }
        </div>
    }
}
