//! Shared source and config constructors for all platforms.
//!
//! - **Web** (WASM): the default [`DashboardConfig`]
//! - **Desktop** (native): `<config_dir>/user-dashboard/dashboard.toml` when present
//!
//! Views reach the data through [`SharedSource`], so any [`UserSource`] can
//! back them: the HTTP client in the apps, a `MemorySource` in tests.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use api::HttpUserSource;
use store::config::SourceConfig;
use store::{DashboardConfig, PageWindow, SourceError, UserRecord, UserSource, UsersPage};

type LocalFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + 'a>>;

/// Object-safe mirror of [`UserSource`].
trait ErasedSource {
    fn page(&self, window: PageWindow) -> LocalFuture<'_, UsersPage>;
    fn all(&self) -> LocalFuture<'_, Vec<UserRecord>>;
    fn user(&self, id: u32) -> LocalFuture<'_, UserRecord>;
}

impl<S: UserSource + 'static> ErasedSource for S {
    fn page(&self, window: PageWindow) -> LocalFuture<'_, UsersPage> {
        Box::pin(self.fetch_page(window))
    }

    fn all(&self) -> LocalFuture<'_, Vec<UserRecord>> {
        Box::pin(self.fetch_all())
    }

    fn user(&self, id: u32) -> LocalFuture<'_, UserRecord> {
        Box::pin(self.fetch_user(id))
    }
}

/// Cloneable handle to the app's user source, provided through context.
#[derive(Clone)]
pub struct SharedSource(Rc<dyn ErasedSource>);

impl SharedSource {
    pub fn new(source: impl UserSource + 'static) -> Self {
        Self(Rc::new(source))
    }
}

impl std::fmt::Debug for SharedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedSource").finish_non_exhaustive()
    }
}

impl PartialEq for SharedSource {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl UserSource for SharedSource {
    fn fetch_page(
        &self,
        window: PageWindow,
    ) -> impl Future<Output = Result<UsersPage, SourceError>> {
        self.0.page(window)
    }

    fn fetch_all(&self) -> impl Future<Output = Result<Vec<UserRecord>, SourceError>> {
        self.0.all()
    }

    fn fetch_user(&self, id: u32) -> impl Future<Output = Result<UserRecord, SourceError>> {
        self.0.user(id)
    }
}

/// Create the HTTP source for `config`, falling back to a default client if
/// the configured one cannot be built.
pub fn make_source(config: &SourceConfig) -> HttpUserSource {
    match HttpUserSource::new(config) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("Failed to build HTTP client, using defaults: {}", e);
            HttpUserSource::with_default_client(&config.base_url)
        }
    }
}

/// Load the platform-appropriate dashboard configuration.
pub fn load_config() -> DashboardConfig {
    #[cfg(target_arch = "wasm32")]
    {
        DashboardConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match dirs::config_dir() {
            Some(dir) => load_config_from(
                &dir.join("user-dashboard").join(DashboardConfig::filename()),
            ),
            None => DashboardConfig::default(),
        }
    }
}

/// Read `path` as a dashboard config. A missing file means defaults; an
/// unreadable or invalid one is logged and also means defaults.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config_from(path: &std::path::Path) -> DashboardConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return DashboardConfig::default();
        }
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            return DashboardConfig::default();
        }
    };
    match DashboardConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded dashboard config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("{} in {}, using defaults", e, path.display());
            DashboardConfig::default()
        }
    }
}
