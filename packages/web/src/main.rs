use dioxus::prelude::*;

use ui::components::ToastProvider;
use views::Users;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Users {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    // Surface configuration problems at startup rather than on the first request
    if let Err(e) = api::backend::get_table().await {
        tracing::error!("Users backend is not configured: {}", e);
    }

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: ui::DX_COMPONENTS_CSS }

        ToastProvider {
            Router::<Route> {}
        }
    }
}
