//! Paginated users table backed by the dashboard store.

use dioxus::prelude::*;

use crate::dashboard::use_dashboard;
use crate::skeleton::Skeleton;

const SKELETON_CELLS: usize = 5;

/// Table of the store's current page with pagination controls.
///
/// Changing page sets the page token and fetches it. `on_view_profile` gets
/// the id of the row whose "View Profile" button was pressed.
#[component]
pub fn UsersTable(on_view_profile: EventHandler<u32>) -> Element {
    let mut dashboard = use_dashboard();
    let pager = dashboard.pager();
    let state = dashboard.state();

    let (records, loading, current) = {
        let state = state.read();
        (state.records.clone(), state.loading, state.current_page())
    };
    let total_pages = pager.total_pages();
    let (from, to) = pager.range(current);
    let prev_disabled = pager.previous_disabled(current, loading);
    let next_disabled = pager.next_disabled(current, loading);
    let numbers_disabled = pager.page_button_disabled(loading);

    let mut change_page = move |page: u32| {
        let token = page.to_string();
        dashboard.set_page_token(token.clone());
        dashboard.fetch_page(&token);
    };

    rsx! {
        div {
            class: "users-table",
            table {
                thead {
                    tr {
                        th { "First Name" }
                        th { "Last Name" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Company" }
                        th {}
                    }
                }
                tbody {
                    if loading {
                        for row in 0..pager.page_size {
                            tr { key: "skeleton-{row}", class: "skeleton-row",
                                for cell in 0..SKELETON_CELLS {
                                    td { key: "{cell}", Skeleton { class: "skeleton-line" } }
                                }
                            }
                        }
                    } else {
                        for (index, user) in records.into_iter().enumerate() {
                            tr {
                                key: "{user.id}",
                                class: if index % 2 == 1 { "row-striped" } else { "" },
                                td { "{user.first_name}" }
                                td { "{user.last_name}" }
                                td { "{user.email}" }
                                td { "{user.phone}" }
                                td { "{user.company.name}" }
                                td {
                                    button {
                                        class: "button outline small",
                                        onclick: {
                                            let id = user.id;
                                            move |_| on_view_profile.call(id)
                                        },
                                        "View Profile"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "pagination",
                div {
                    class: "pagination-compact",
                    button {
                        class: "button outline",
                        disabled: prev_disabled,
                        onclick: move |_| change_page(current.saturating_sub(1)),
                        "Previous"
                    }
                    button {
                        class: "button outline",
                        disabled: next_disabled,
                        onclick: move |_| change_page(current + 1),
                        "Next"
                    }
                }
                div {
                    class: "pagination-full",
                    div {
                        class: "pagination-summary",
                        if loading {
                            Skeleton { class: "skeleton-summary" }
                        } else {
                            "Showing "
                            span { class: "strong", "{from}" }
                            " to "
                            span { class: "strong", "{to}" }
                            " of "
                            span { class: "strong", "{pager.total_users}" }
                            " results"
                        }
                    }
                    nav {
                        class: "pagination-pages",
                        "aria-label": "Pagination",
                        button {
                            class: "page-button",
                            disabled: prev_disabled,
                            onclick: move |_| change_page(current.saturating_sub(1)),
                            "Previous"
                        }
                        for page in 1..=total_pages {
                            button {
                                key: "page-{page}",
                                class: if page == current { "page-button active" } else { "page-button" },
                                disabled: numbers_disabled,
                                onclick: move |_| change_page(page),
                                "{page}"
                            }
                        }
                        button {
                            class: "page-button",
                            disabled: next_disabled,
                            onclick: move |_| change_page(current + 1),
                            "Next"
                        }
                    }
                }
            }
        }
    }
}
