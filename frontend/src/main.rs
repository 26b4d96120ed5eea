use log::info;
use yew::prelude::*;

mod browser;
mod config;
mod error;
mod vitals;
mod animation {
    pub mod parallax;
    pub mod reveal;
    pub mod scroll;
    pub mod stagger;
    pub mod typewriter;
    pub mod visibility;
}
mod contact {
    pub mod delivery;
    pub mod form;
    pub mod validation;
}
mod hooks {
    pub mod use_scroll_animation;
    pub mod use_web_vitals;
}
mod components {
    pub mod animated;
    pub mod back_to_top;
    pub mod contact_form;
    pub mod scroll_progress;
}
mod pages {
    pub mod home;
}

use hooks::use_web_vitals::use_web_vitals;
use pages::home::Home;
use vitals::ThresholdTable;

#[function_component]
fn App() -> Html {
    use_web_vitals(ThresholdTable::default());

    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    match config::contact_endpoint() {
        Some(url) => info!("Starting application, contact messages go to {}", url),
        None => info!("Starting application, contact delivery is simulated"),
    }
    yew::Renderer::<App>::new().render();
}
