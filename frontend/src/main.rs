mod api;
mod components;
mod state;
mod storage;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatWidget;
use components::contact::ContactSection;
use state::ChatState;

/// Root page component. The static portfolio sections are plain markup; the
/// live parts are the assistant widget and the contact form.
#[component]
fn App() -> impl IntoView {
    ChatState::provide();

    view! {
        <div class="page">
            <header class="hero">
                <h1>"AI Generalist & Full-Stack Developer"</h1>
                <p>"From process engineering to AI systems."</p>
            </header>
            <ChatWidget />
            <ContactSection />
            <footer class="footer">
                <p>"Built with Rust and Leptos."</p>
            </footer>
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
