use dioxus::prelude::*;

use ui::views::DashboardView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        DashboardView {
            on_view_profile: move |id: u32| {
                nav.push(Route::UserDetail { user_id: id.to_string() });
            },
        }
    }
}
