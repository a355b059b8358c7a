use dioxus::prelude::*;

use store::{ChartCategory, ChartKind};

use super::ModalOverlay;
use crate::charts::ChartsPanel;
use crate::dashboard::use_dashboard;
use crate::users_table::UsersTable;

/// Shared dashboard page: the users table plus the charts dialog.
///
/// Fetches the store's current page once on mount. Platform packages provide
/// the navigation callback for a row's profile button.
#[component]
pub fn DashboardView(
    /// Called with a user id when its "View Profile" button is pressed.
    on_view_profile: EventHandler<u32>,
) -> Element {
    let mut dashboard = use_dashboard();
    let mut show_charts = use_signal(|| false);
    let mut active_chart = use_signal(|| ChartKind::Bar);
    let category = use_signal(ChartCategory::default);

    use_effect(move || {
        let token = dashboard.state().peek().page_token.clone();
        dashboard.fetch_page(&token);
    });

    rsx! {
        div {
            class: "dashboard",
            h1 { class: "dashboard-title", "Interactive Dashboard" }

            div {
                class: "card",
                div {
                    class: "card-header",
                    h2 { "User Data" }
                    button {
                        class: "button primary",
                        onclick: move |_| show_charts.set(true),
                        "View Charts"
                    }
                }
                UsersTable { on_view_profile }
            }

            if show_charts() {
                ModalOverlay {
                    title: "User Data Visualization",
                    on_close: move |_| show_charts.set(false),
                    div {
                        class: "chart-kinds",
                        for kind in ChartKind::ALL {
                            button {
                                key: "{kind}",
                                class: if active_chart() == kind { "button primary" } else { "button outline" },
                                onclick: move |_| active_chart.set(kind),
                                {kind.label()}
                            }
                        }
                    }
                    ChartsPanel { chart_type: active_chart().to_string(), category }
                }
            }
        }
    }
}
