//! # API crate — HTTP access to the demo users service
//!
//! The dashboard has no backend of its own. Everything it shows comes from the
//! public demo users API, and this crate is the only place that speaks HTTP.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HttpUserSource`], the `reqwest`-backed [`store::UserSource`] |
//!
//! Views never name this crate's types directly except through
//! `ui::make_source`; they program against the [`store::UserSource`] trait.

pub mod client;

pub use client::HttpUserSource;
pub use store::{PageWindow, SourceError, UserRecord, UserSource, UsersPage};
