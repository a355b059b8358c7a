//! # Remote user source
//!
//! [`UserSource`] is the async seam between the views and wherever user records
//! come from. The HTTP implementation lives in the `api` crate; [`crate::MemorySource`]
//! serves a fixed collection for tests and offline development.
//!
//! ## Paging
//!
//! A [`PageWindow`] is a `(skip, limit)` pair. It is built from the dashboard's
//! page token with [`PageWindow::from_token`], which hands the token to the
//! source **as the row-skip offset**: token `"2"` skips two rows, not one page.
//! A `limit` of zero asks for the whole collection ([`PageWindow::everything`]).
//!
//! ## Errors
//!
//! [`SourceError`] separates the two failure kinds the views care about: the
//! request or its body failed (`Network`, `Status`, `Decode`), or the request
//! succeeded and there was simply no record (`NotFound`). See
//! [`SourceError::is_absence`].

use std::future::Future;

use thiserror::Error;

use crate::models::{UserRecord, UsersPage};

/// Failure of a [`UserSource`] call.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("no user found: {0}")]
    NotFound(String),
    #[error("invalid page token {0:?}")]
    InvalidPageToken(String),
}

impl SourceError {
    /// The request went through but there was no usable record.
    pub fn is_absence(&self) -> bool {
        matches!(self, SourceError::NotFound(_))
    }
}

/// One page request: rows to skip and rows to return (0 = no limit).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u32,
    pub limit: u32,
}

impl PageWindow {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// Build the window for a page token. The token is the skip offset itself.
    pub fn from_token(token: &str, limit: u32) -> Result<Self, SourceError> {
        let skip = token
            .trim()
            .parse::<u32>()
            .map_err(|_| SourceError::InvalidPageToken(token.to_string()))?;
        Ok(Self { skip, limit })
    }

    /// The whole collection in one response.
    pub fn everything() -> Self {
        Self { skip: 0, limit: 0 }
    }
}

/// Async access to user records.
pub trait UserSource {
    /// One window of the collection.
    fn fetch_page(
        &self,
        window: PageWindow,
    ) -> impl Future<Output = Result<UsersPage, SourceError>>;

    /// The whole collection, unpaginated.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<UserRecord>, SourceError>>;

    /// A single record. Missing ids fail with [`SourceError::NotFound`].
    fn fetch_user(&self, id: u32) -> impl Future<Output = Result<UserRecord, SourceError>>;
}

/// Parse a route parameter into a user id. Anything that is not a positive
/// integer cannot name a record, so it is reported as absence.
pub fn parse_user_id(raw: &str) -> Result<u32, SourceError> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(SourceError::NotFound(raw.to_string())),
    }
}
