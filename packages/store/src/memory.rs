use std::sync::{Arc, Mutex};

use crate::models::{UserRecord, UsersPage};
use crate::source::{PageWindow, SourceError, UserSource};

/// In-memory UserSource for testing and offline development.
///
/// Pages are sliced the way the remote API slices them: skip `window.skip`
/// rows, then return up to `window.limit` rows (all remaining rows when the
/// limit is zero).
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    users: Arc<Mutex<Vec<UserRecord>>>,
    failure: Arc<Mutex<Option<SourceError>>>,
}

impl MemorySource {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            failure: Arc::default(),
        }
    }

    /// Make every subsequent call fail with `error` (`None` to recover).
    pub fn fail_with(&self, error: Option<SourceError>) {
        *self.failure.lock().unwrap() = error;
    }

    /// Replace the served collection.
    pub fn replace(&self, users: Vec<UserRecord>) {
        *self.users.lock().unwrap() = users;
    }

    fn check(&self) -> Result<(), SourceError> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl UserSource for MemorySource {
    async fn fetch_page(&self, window: PageWindow) -> Result<UsersPage, SourceError> {
        self.check()?;
        let users = self.users.lock().unwrap();
        let rest = users.iter().skip(window.skip as usize);
        let page: Vec<UserRecord> = if window.limit == 0 {
            rest.cloned().collect()
        } else {
            rest.take(window.limit as usize).cloned().collect()
        };
        Ok(UsersPage {
            total: users.len() as u32,
            skip: window.skip,
            limit: page.len() as u32,
            users: page,
        })
    }

    async fn fetch_all(&self) -> Result<Vec<UserRecord>, SourceError> {
        self.check()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn fetch_user(&self, id: u32) -> Result<UserRecord, SourceError> {
        self.check()?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }
}
