//! Dashboard context: the shared user store and the HTTP source.
//!
//! [`DashboardProvider`] owns a [`PageState`] and hands a [`Dashboard`] handle to
//! every view below it. The handle is `Copy`; it only carries signals.
//!
//! Page fetches are spawned at the root of the app rather than in the calling
//! component, so a table unmounting mid-fetch still settles the store.

use dioxus::core::{spawn_forever, Task};
use dioxus::prelude::*;
use store::{DashboardConfig, PageState, PageWindow, Pager, Settled, UserSource};

use crate::source::{make_source, SharedSource};

/// Handle to the dashboard's user store.
#[derive(Clone, Copy)]
pub struct Dashboard {
    state: Signal<PageState>,
    source: Signal<SharedSource>,
    in_flight: Signal<Option<Task>>,
    pager: Pager,
}

impl Dashboard {
    pub fn state(&self) -> Signal<PageState> {
        self.state
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    /// Whether a page fetch is still running.
    pub fn is_fetching(&self) -> bool {
        self.in_flight.peek().is_some()
    }

    /// Replace the page token without fetching.
    pub fn set_page_token(&mut self, token: impl Into<String>) {
        self.state.write().set_page_token(token);
    }

    /// Fetch the page for `token` and replace the records on success.
    ///
    /// Cancels the page fetch still in flight, if any. Failures keep the
    /// previous records and are logged.
    pub fn fetch_page(&mut self, token: &str) {
        let window = match PageWindow::from_token(token, self.pager.page_size) {
            Ok(window) => window,
            Err(e) => {
                tracing::warn!("Not fetching: {}", e);
                return;
            }
        };

        if let Some(task) = self.in_flight.write().take() {
            task.cancel();
        }

        let ticket = self.state.write().begin_fetch(window);
        let source = self.source.peek().clone();
        let mut state = self.state;
        let mut in_flight = self.in_flight;

        let task = spawn_forever(async move {
            let outcome = source.fetch_page(ticket.window).await.map(|page| page.users);
            let settled = state.write().settle(ticket, outcome);
            match settled {
                Settled::Replaced(count) => {
                    tracing::info!("Loaded {} users at skip {}", count, ticket.window.skip);
                }
                Settled::Kept(e) => {
                    tracing::error!("Error fetching user data: {}", e);
                }
                Settled::Stale => {
                    tracing::debug!("Dropped stale page at skip {}", ticket.window.skip);
                    return;
                }
            }
            in_flight.set(None);
        });
        self.in_flight.set(task.into());
    }
}

/// Get the dashboard store handle.
pub fn use_dashboard() -> Dashboard {
    use_context::<Dashboard>()
}

/// Get the shared user source.
pub fn use_source() -> SharedSource {
    use_context::<SharedSource>()
}

/// Provider component that owns the user store.
/// Wrap the router with this so the store outlives navigation.
///
/// Without an explicit `source` the views talk to the HTTP API at
/// `config.source.base_url`.
#[component]
pub fn DashboardProvider(
    config: DashboardConfig,
    source: Option<SharedSource>,
    children: Element,
) -> Element {
    let source = use_context_provider(|| {
        source.unwrap_or_else(|| SharedSource::new(make_source(&config.source)))
    });
    let state = use_signal(|| PageState::new(config.table.initial_page.clone()));
    let source = use_signal(|| source);
    let in_flight = use_signal(|| Option::<Task>::None);
    let pager = Pager::from(&config.table);

    use_context_provider(|| Dashboard {
        state,
        source,
        in_flight,
        pager,
    });

    rsx! {
        {children}
    }
}
