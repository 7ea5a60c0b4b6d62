use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{MAX_PIECES, MIN_PIECES};

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub piece_count: u32,
    pub preparing: bool,
    pub on_piece_count: Callback<u32>,
    pub on_start: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let count_cb = {
        let cb = props.on_piece_count.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // Empty or garbage input means "not chosen".
            cb.emit(input.value().trim().parse().unwrap_or(0));
        })
    };
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let value = if props.piece_count == 0 { String::new() } else { props.piece_count.to_string() };
    html! {<div class="controls-panel" style="display:flex; gap:8px; align-items:center; justify-content:center; margin-top:8px;">
        <label style="display:flex; align-items:center; gap:6px;">
            <span>{"Pieces"}</span>
            <input
                type="number"
                min={MIN_PIECES.to_string()}
                max={MAX_PIECES.to_string()}
                step="1"
                value={value}
                oninput={count_cb}
                style="width:64px;"
            />
        </label>
        <button onclick={start_cb} disabled={props.preparing}>
            { if props.preparing { "Preparing..." } else { "Start Puzzle" } }
        </button>
    </div>}
}
