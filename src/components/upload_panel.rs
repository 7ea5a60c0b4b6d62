use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::model::UploadedImage;

#[derive(Properties, PartialEq, Clone)]
pub struct UploadPanelProps {
    pub images: Vec<UploadedImage>,
    pub selected: Option<usize>,
    pub max: usize,
    pub on_file: Callback<File>,
    pub on_select: Callback<usize>,
}

#[function_component]
pub fn UploadPanel(props: &UploadPanelProps) -> Html {
    let input_ref = use_node_ref();

    let open_picker = {
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };
    let on_change = {
        let cb = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.item(0)) {
                cb.emit(file);
            }
            // Allow picking the same file again.
            input.set_value("");
        })
    };

    html! {<div class="upload-panel" style="display:flex; flex-direction:column; gap:8px; align-items:center;">
        <input ref={input_ref} type="file" accept="image/*" style="display:none;" onchange={on_change} />
        <button onclick={open_picker}>{ format!("Upload Image ({}/{})", props.images.len(), props.max) }</button>
        <div style="display:flex; gap:8px; flex-wrap:wrap; justify-content:center;">
            { for props.images.iter().enumerate().map(|(i, img)| {
                let on_select = props.on_select.clone();
                let border = if props.selected == Some(i) { "#58a6ff" } else { "#30363d" };
                html! {
                    <img
                        src={AttrValue::from(img.data_uri.clone())}
                        alt={img.name.clone()}
                        title={img.name.clone()}
                        onclick={Callback::from(move |_| on_select.emit(i))}
                        style={format!("width:72px; height:72px; object-fit:cover; cursor:pointer; border:2px solid {border}; border-radius:6px;")}
                    />
                }
            }) }
        </div>
    </div>}
}
