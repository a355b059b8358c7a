pub mod chart;
pub mod config;
pub mod load;
pub mod models;
pub mod page;
pub mod pagination;
pub mod source;

mod memory;
pub use memory::MemorySource;

#[cfg(test)]
mod fixtures;

pub use chart::{derive_series, ChartCategory, ChartKind, ChartPoint, CategoryKind};
pub use config::{ConfigError, DashboardConfig};
pub use load::LoadState;
pub use models::{UserRecord, UsersPage};
pub use page::{FetchTicket, PageState, Settled};
pub use pagination::Pager;
pub use source::{PageWindow, SourceError, UserSource};
