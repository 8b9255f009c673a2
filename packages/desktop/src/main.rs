use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::views::UsersView;

/// Server that hosts the users API, fixed at build time.
const SERVER_URL: &str = match option_env!("USERS_SERVER_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

fn main() {
    dioxus::fullstack::set_server_url(SERVER_URL);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: ui::DX_COMPONENTS_CSS }
        ToastProvider {
            UsersView {}
        }
    }
}
