use gloo_console::log as console;
use log::info;
use yew::prelude::*;

mod config;
mod contact;
mod error;
mod components {
    pub mod contact_form;
    pub mod form_message;
    pub mod nav;
}
mod effects {
    pub mod anchor;
    pub mod highlight;
    pub mod navbar;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

const BANNER: &[(&str, &str)] = &[
    (
        "%c🚀 AIFluence Website Loaded Successfully!",
        "background: linear-gradient(135deg, #00f0ff 0%, #0ea5e9 100%); color: #0a0e27; font-size: 16px; font-weight: bold; padding: 10px 20px; border-radius: 5px;",
    ),
    (
        "%c✨ AI-Tech Blue Gradient Theme Active",
        "color: #00f0ff; font-size: 14px; font-weight: bold;",
    ),
    (
        "%cThis is a frontend-only demo for Innovation & Entrepreneurship project",
        "color: #a5b4fc; font-size: 12px;",
    ),
    (
        "%cForm submissions are logged to console (no backend connected)",
        "color: #a5b4fc; font-size: 12px;",
    ),
];

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} site", config::SITE_NAME);
    yew::Renderer::<App>::new().render();

    for (text, style) in BANNER {
        console!(*text, *style);
    }
}
