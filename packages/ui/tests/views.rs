//! Components driven in a headless `VirtualDom` against an in-memory source.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use store::chart::CategoricalField;
use store::{
    ChartCategory, DashboardConfig, MemorySource, PageWindow, SourceError, UserRecord, UserSource,
    UsersPage,
};
use tokio::sync::Notify;
use ui::views::UserDetailView;
use ui::{use_dashboard, ChartsPanel, Dashboard, DashboardProvider, SharedSource};

fn users(n: u32) -> Vec<UserRecord> {
    (1..=n)
        .map(|id| UserRecord {
            id,
            first_name: format!("First{id}"),
            gender: if id % 2 == 1 { "male" } else { "female" }.to_string(),
            ..Default::default()
        })
        .collect()
}

/// MemorySource that records every request it completes.
#[derive(Clone, Default)]
struct Recording {
    inner: MemorySource,
    pages: Rc<RefCell<Vec<u32>>>,
    everything: Rc<Cell<usize>>,
    lookups: Rc<RefCell<Vec<u32>>>,
    /// When set, page requests wait for a permit before answering.
    gate: Option<Rc<Notify>>,
}

impl Recording {
    fn new(users: Vec<UserRecord>) -> Self {
        Self {
            inner: MemorySource::new(users),
            ..Default::default()
        }
    }
}

impl UserSource for Recording {
    async fn fetch_page(&self, window: PageWindow) -> Result<UsersPage, SourceError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let page = self.inner.fetch_page(window).await;
        self.pages.borrow_mut().push(window.skip);
        page
    }

    async fn fetch_all(&self) -> Result<Vec<UserRecord>, SourceError> {
        let all = self.inner.fetch_all().await;
        self.everything.set(self.everything.get() + 1);
        all
    }

    async fn fetch_user(&self, id: u32) -> Result<UserRecord, SourceError> {
        let user = self.inner.fetch_user(id).await;
        self.lookups.borrow_mut().push(id);
        user
    }
}

/// Hands a value from inside the component tree back to the test.
struct Slot<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Rc::default())
    }
}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Slot<T> {
    fn put(&self, value: T) {
        *self.0.borrow_mut() = Some(value);
    }

    fn get(&self) -> T {
        self.0.borrow().clone().expect("component not mounted")
    }
}

/// Poll tasks and re-render until nothing is left to do.
async fn run_until_idle(dom: &mut VirtualDom) {
    while tokio::time::timeout(Duration::from_millis(100), dom.wait_for_work())
        .await
        .is_ok()
    {
        dom.render_immediate_to_vec();
    }
}

// Dashboard store

#[derive(Clone)]
struct DashboardHarness {
    source: SharedSource,
    dashboard: Slot<Dashboard>,
}

fn dashboard_app(props: DashboardHarness) -> Element {
    rsx! {
        DashboardProvider {
            config: DashboardConfig::default(),
            source: props.source.clone(),
            ExposeDashboard { slot: props.dashboard.clone() }
        }
    }
}

#[component]
fn ExposeDashboard(slot: Slot<Dashboard>) -> Element {
    let dashboard = use_dashboard();
    use_hook(|| slot.put(dashboard));
    rsx! {}
}

fn mount_dashboard(source: &Recording) -> (VirtualDom, Dashboard) {
    let slot = Slot::default();
    let mut dom = VirtualDom::new_with_props(
        dashboard_app,
        DashboardHarness {
            source: SharedSource::new(source.clone()),
            dashboard: slot.clone(),
        },
    );
    dom.rebuild_in_place();
    (dom, slot.get())
}

#[tokio::test]
async fn test_fetch_page_settles_and_clears_in_flight() {
    let source = Recording::new(users(208));
    let (mut dom, mut dashboard) = mount_dashboard(&source);

    dom.in_runtime(|| {
        dashboard.fetch_page("1");
        assert!(dashboard.is_fetching());
        assert!(dashboard.state().peek().loading);
    });
    run_until_idle(&mut dom).await;

    assert_eq!(*source.pages.borrow(), vec![1]);
    dom.in_runtime(|| {
        assert!(!dashboard.is_fetching());
        let state = dashboard.state();
        let state = state.peek();
        assert!(!state.loading);
        assert_eq!(state.records.len(), 20);
        assert_eq!(state.records[0].id, 2);
    });
}

#[tokio::test]
async fn test_newer_fetch_cancels_the_one_in_flight() {
    let source = Recording::new(users(208));
    let (mut dom, mut dashboard) = mount_dashboard(&source);

    dom.in_runtime(|| {
        dashboard.fetch_page("1");
        dashboard.fetch_page("40");
    });
    run_until_idle(&mut dom).await;

    // The first request never ran
    assert_eq!(*source.pages.borrow(), vec![40]);
    dom.in_runtime(|| {
        assert!(!dashboard.is_fetching());
        let state = dashboard.state();
        let state = state.peek();
        assert!(!state.loading);
        assert_eq!(state.records[0].id, 41);
    });
}

#[tokio::test]
async fn test_failed_fetch_keeps_records_and_clears_in_flight() {
    let source = Recording::new(users(208));
    let (mut dom, mut dashboard) = mount_dashboard(&source);

    dom.in_runtime(|| dashboard.fetch_page("1"));
    run_until_idle(&mut dom).await;

    source.inner.fail_with(Some(SourceError::Status(500)));
    dom.in_runtime(|| dashboard.fetch_page("20"));
    run_until_idle(&mut dom).await;

    dom.in_runtime(|| {
        assert!(!dashboard.is_fetching());
        let state = dashboard.state();
        let state = state.peek();
        assert!(!state.loading);
        assert_eq!(state.records[0].id, 2);
        assert_eq!(state.last_error, Some(SourceError::Status(500)));
    });
}

#[derive(Clone)]
struct UnmountHarness {
    source: SharedSource,
    dashboard: Slot<Dashboard>,
    shown: Slot<Signal<bool>>,
}

fn unmount_app(props: UnmountHarness) -> Element {
    rsx! {
        DashboardProvider {
            config: DashboardConfig::default(),
            source: props.source.clone(),
            ExposeDashboard { slot: props.dashboard.clone() }
            Toggle { slot: props.shown.clone() }
        }
    }
}

#[component]
fn Toggle(slot: Slot<Signal<bool>>) -> Element {
    let shown = use_signal(|| true);
    use_hook(|| slot.put(shown));
    rsx! {
        if shown() {
            FetchOnMount {}
        }
    }
}

#[component]
fn FetchOnMount() -> Element {
    let mut dashboard = use_dashboard();
    use_hook(move || dashboard.fetch_page("1"));
    rsx! {}
}

#[tokio::test]
async fn test_fetch_settles_after_caller_unmounts() {
    let gate = Rc::new(Notify::new());
    let source = Recording {
        gate: Some(gate.clone()),
        ..Recording::new(users(208))
    };
    let dashboard = Slot::default();
    let shown = Slot::default();
    let mut dom = VirtualDom::new_with_props(
        unmount_app,
        UnmountHarness {
            source: SharedSource::new(source.clone()),
            dashboard: dashboard.clone(),
            shown: shown.clone(),
        },
    );
    dom.rebuild_in_place();
    run_until_idle(&mut dom).await;

    let dashboard = dashboard.get();
    dom.in_runtime(|| assert!(dashboard.state().peek().loading));

    let mut shown = shown.get();
    dom.in_runtime(|| shown.set(false));
    run_until_idle(&mut dom).await;

    gate.notify_one();
    run_until_idle(&mut dom).await;

    assert_eq!(*source.pages.borrow(), vec![1]);
    dom.in_runtime(|| {
        assert!(!dashboard.is_fetching());
        let state = dashboard.state();
        let state = state.peek();
        assert!(!state.loading);
        assert_eq!(state.records.len(), 20);
    });
}

// Detail view

#[derive(Clone)]
struct DetailHarness {
    source: SharedSource,
    user_id: Slot<Signal<String>>,
}

fn detail_app(props: DetailHarness) -> Element {
    rsx! {
        DashboardProvider {
            config: DashboardConfig::default(),
            source: props.source.clone(),
            DetailRoute { slot: props.user_id.clone() }
        }
    }
}

#[component]
fn DetailRoute(slot: Slot<Signal<String>>) -> Element {
    let user_id = use_signal(|| "1".to_string());
    use_hook(|| slot.put(user_id));
    rsx! {
        UserDetailView { user_id: user_id(), on_back: move |_| {} }
    }
}

#[tokio::test]
async fn test_detail_reloads_when_route_id_changes() {
    let source = Recording::new(users(10));
    let slot = Slot::default();
    let mut dom = VirtualDom::new_with_props(
        detail_app,
        DetailHarness {
            source: SharedSource::new(source.clone()),
            user_id: slot.clone(),
        },
    );
    dom.rebuild_in_place();
    run_until_idle(&mut dom).await;
    assert_eq!(*source.lookups.borrow(), vec![1]);

    let mut user_id = slot.get();
    dom.in_runtime(|| user_id.set("7".to_string()));
    run_until_idle(&mut dom).await;
    assert_eq!(*source.lookups.borrow(), vec![1, 7]);

    // Ids that cannot name a user never reach the source
    dom.in_runtime(|| user_id.set("abc".to_string()));
    run_until_idle(&mut dom).await;
    assert_eq!(*source.lookups.borrow(), vec![1, 7]);
}

// Charts

#[derive(Clone)]
struct ChartsHarness {
    source: SharedSource,
    category: Slot<Signal<ChartCategory>>,
    chart_type: Slot<Signal<String>>,
}

fn charts_app(props: ChartsHarness) -> Element {
    rsx! {
        DashboardProvider {
            config: DashboardConfig::default(),
            source: props.source.clone(),
            ChartsRoute {
                category: props.category.clone(),
                chart_type: props.chart_type.clone(),
            }
        }
    }
}

#[component]
fn ChartsRoute(
    category: Slot<Signal<ChartCategory>>,
    chart_type: Slot<Signal<String>>,
) -> Element {
    let selected = use_signal(ChartCategory::default);
    let kind = use_signal(|| "bar".to_string());
    use_hook(|| {
        category.put(selected);
        chart_type.put(kind);
    });
    rsx! {
        ChartsPanel { chart_type: kind(), category: selected }
    }
}

#[tokio::test]
async fn test_charts_fetch_once_across_category_and_kind_changes() {
    let source = Recording::new(users(208));
    let category = Slot::default();
    let chart_type = Slot::default();
    let mut dom = VirtualDom::new_with_props(
        charts_app,
        ChartsHarness {
            source: SharedSource::new(source.clone()),
            category: category.clone(),
            chart_type: chart_type.clone(),
        },
    );
    dom.rebuild_in_place();
    run_until_idle(&mut dom).await;
    assert_eq!(source.everything.get(), 1);

    let mut category = category.get();
    let mut chart_type = chart_type.get();
    dom.in_runtime(|| category.set(ChartCategory::Categorical(CategoricalField::Gender)));
    run_until_idle(&mut dom).await;
    dom.in_runtime(|| chart_type.set("radar".to_string()));
    run_until_idle(&mut dom).await;
    dom.in_runtime(|| category.set(ChartCategory::default()));
    run_until_idle(&mut dom).await;

    assert_eq!(source.everything.get(), 1);
    assert!(source.pages.borrow().is_empty());
}
