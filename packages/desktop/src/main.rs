use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use views::{Home, UserDetail};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/user/:user_id")]
    UserDetail { user_id: String },
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Read once; the provider keeps its own copy for the session
    let config = use_hook(|| {
        let config = ui::load_config();
        tracing::info!("Using user source at {}", config.source.base_url);
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::DASHBOARD_CSS }

        ui::DashboardProvider {
            config,
            Router::<Route> {}
        }
    }
}
