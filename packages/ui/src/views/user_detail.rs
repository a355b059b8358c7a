use dioxus::prelude::*;

use store::source::parse_user_id;
use store::{LoadState, SourceError, UserRecord, UserSource};

use crate::dashboard::use_source;
use crate::loader::use_loader;
use crate::skeleton::Skeleton;

/// Shared user profile view.
///
/// Loads one user by the raw `user_id` route parameter, independently of the
/// dashboard store. Platform packages provide the back navigation.
#[component]
pub fn UserDetailView(
    /// Route parameter, not yet validated.
    user_id: String,
    /// Called by the error panel's back button.
    on_back: EventHandler<()>,
) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| user_id.clone());
    if *id_signal.peek() != user_id {
        id_signal.set(user_id.clone());
    }

    let source = use_source();
    let user = use_loader(move || {
        let raw = id_signal();
        let source = source.clone();
        async move {
            let id = parse_user_id(&raw)?;
            source.fetch_user(id).await
        }
    });

    match user() {
        LoadState::Idle | LoadState::Loading => rsx! { ProfileSkeleton {} },
        LoadState::Loaded(user) => rsx! { Profile { user } },
        LoadState::Failed(error) => rsx! { NotFoundPanel { error, on_back } },
    }
}

#[component]
fn ProfileSkeleton() -> Element {
    rsx! {
        div {
            class: "profile",
            Skeleton { class: "skeleton-hero" }
            div {
                class: "profile-grid",
                Skeleton { class: "skeleton-card" }
                Skeleton { class: "skeleton-card" }
            }
        }
    }
}

#[component]
fn NotFoundPanel(error: SourceError, on_back: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "profile-error",
            h2 { "No User Found" }
            if !error.is_absence() {
                p { class: "profile-error-reason", "{error}" }
            }
            button {
                class: "button outline",
                onclick: move |_| on_back.call(()),
                "Back"
            }
        }
    }
}

#[component]
fn Profile(user: UserRecord) -> Element {
    let full_name = user.full_name();
    let initials = user.initials();
    let has_image = !user.image.is_empty();

    rsx! {
        div {
            class: "profile",
            div {
                class: "profile-hero",
                div {
                    class: "avatar",
                    if has_image {
                        img { src: "{user.image}", alt: "{full_name}" }
                    } else {
                        span { class: "avatar-fallback", "{initials}" }
                    }
                }
                div {
                    class: "profile-heading",
                    h1 { "{full_name}" }
                    p { class: "profile-title", "{user.company.title}" }
                    p { class: "profile-company", "{user.company.name}" }
                }
            }

            div {
                class: "profile-grid",
                div {
                    class: "card",
                    h2 { "Contact Information" }
                    p { span { class: "muted", "Email " } "{user.email}" }
                    p { span { class: "muted", "Phone " } "{user.phone}" }
                }
                div {
                    class: "card",
                    h2 { "Address" }
                    if let Some(street) = user.address.address.as_ref() {
                        p { "{street}" }
                    }
                    p { {user.address.locality()} }
                }
            }

            div {
                class: "card",
                h2 { "Professional Information" }
                p { span { class: "muted", "Title " } "{user.company.title}" }
                p { span { class: "muted", "Company " } "{user.company.name}" }
                if !user.company.department.is_empty() {
                    p { span { class: "muted", "Department " } "{user.company.department}" }
                }
            }
        }
    }
}
