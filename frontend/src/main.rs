use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod reveal {
    pub mod declaration;
    pub mod engine;
    pub mod catalog;
    pub mod dom;
}
mod chat {
    pub mod session;
    pub mod assistant;
}
mod components {
    pub mod nav;
    pub mod faq;
    pub mod contact;
    pub mod chat_widget;
}
mod pages {
    pub mod landing;
}

use components::{chat_widget::ChatWidget, nav::Nav};
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <main>
                <Landing />
            </main>
            <ChatWidget />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize the logger
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {} site", config::CLINIC_NAME);
    yew::Renderer::<App>::new().render();
}
