use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CompletionBannerProps {
    pub show: bool,
    pub pieces: usize,
    pub moves: u32,
}

#[function_component]
pub fn CompletionBanner(props: &CompletionBannerProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {
        <div class="completion-banner" style="margin:12px auto; max-width:600px; background:rgba(0,0,0,0.85); border:2px solid #3fb950; padding:12px 20px; border-radius:12px; text-align:center;">
            <h2 style="margin:0 0 6px 0; color:#3fb950;">{"Puzzle Complete!"}</h2>
            <p style="margin:0;">{ format!("{} pieces placed in {} moves", props.pieces, props.moves) }</p>
        </div>
    }
}
