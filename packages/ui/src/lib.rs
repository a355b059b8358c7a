//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

mod source;
pub use source::{load_config, make_source, SharedSource};
#[cfg(not(target_arch = "wasm32"))]
pub use source::load_config_from;

pub mod views;

pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

mod dashboard;
pub use dashboard::{use_dashboard, use_source, Dashboard, DashboardProvider};

mod loader;
pub use loader::use_loader;

mod skeleton;
pub use skeleton::Skeleton;

mod users_table;
pub use users_table::UsersTable;

pub mod charts;
pub use charts::ChartsPanel;
