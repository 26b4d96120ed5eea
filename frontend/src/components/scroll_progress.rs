use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::scroll::scroll_progress;

fn page_extent() -> Option<(f64, f64, f64)> {
    let root = web_sys::window()?.document()?.document_element()?;
    Some((
        root.scroll_top() as f64,
        root.scroll_height() as f64,
        root.client_height() as f64,
    ))
}

#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    // Re-renders on every window scroll.
    let _ = use_window_scroll();

    let progress = page_extent()
        .map(|(top, height, client)| scroll_progress(top, height, client))
        .unwrap_or(0.0);

    html! {
        <div class="scroll-progress-track">
            <div class="scroll-progress-bar" style={format!("width: {}%;", progress)} />
        </div>
    }
}
