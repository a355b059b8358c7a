use dioxus::prelude::*;

/// Pulsing placeholder block shown while data loads.
#[component]
pub fn Skeleton(#[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        div { class: "skeleton {class}" }
    }
}
