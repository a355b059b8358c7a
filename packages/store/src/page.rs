//! # Page state — the dashboard's user store
//!
//! [`PageState`] holds the page of users the table shows, the loading flag and
//! the current page token. It does no I/O: a fetch is split into
//! [`begin_fetch`](PageState::begin_fetch), which hands out a [`FetchTicket`],
//! and [`settle`](PageState::settle), which applies the outcome. Whoever owns
//! the state awaits the source in between.
//!
//! Tickets carry a generation number. Settling a ticket older than the most
//! recent `begin_fetch` is a no-op, so a slow response for an earlier page can
//! never overwrite the page that was requested last.

use crate::models::UserRecord;
use crate::source::{PageWindow, SourceError};

/// Page token the dashboard starts on.
pub const INITIAL_PAGE_TOKEN: &str = "1";

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    /// Users of the last successful fetch.
    pub records: Vec<UserRecord>,
    pub loading: bool,
    pub page_token: String,
    /// Error of the last settled fetch, cleared on success.
    pub last_error: Option<SourceError>,
    generation: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(INITIAL_PAGE_TOKEN)
    }
}

/// Receipt for an in-flight fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub window: PageWindow,
}

/// What [`PageState::settle`] did with an outcome.
#[derive(Clone, Debug, PartialEq)]
pub enum Settled {
    /// Records replaced with this many users.
    Replaced(usize),
    /// Fetch failed; previous records kept.
    Kept(SourceError),
    /// A newer fetch began after this one; outcome dropped.
    Stale,
}

impl PageState {
    pub fn new(page_token: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            page_token: page_token.into(),
            last_error: None,
            generation: 0,
        }
    }

    /// Replace the page token. Does not fetch.
    pub fn set_page_token(&mut self, token: impl Into<String>) {
        self.page_token = token.into();
    }

    /// Mark a fetch as started and supersede any earlier one.
    pub fn begin_fetch(&mut self, window: PageWindow) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            window,
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the outcome of the fetch `ticket` was issued for.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<UserRecord>, SourceError>,
    ) -> Settled {
        if !self.is_current(&ticket) {
            return Settled::Stale;
        }
        self.loading = false;
        match outcome {
            Ok(users) => {
                let count = users.len();
                self.records = users;
                self.last_error = None;
                Settled::Replaced(count)
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                Settled::Kept(err)
            }
        }
    }

    /// Current page number derived from the token, 1 when it doesn't parse.
    pub fn current_page(&self) -> u32 {
        self.page_token.trim().parse().unwrap_or(1)
    }
}
