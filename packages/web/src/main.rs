use dioxus::logger::tracing::Level;
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
    let config = use_hook(ui::load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::DASHBOARD_CSS }
        document::Title { "User Dashboard" }

        ui::DashboardProvider {
            config,
            Router::<Route> {}
        }
    }
}
