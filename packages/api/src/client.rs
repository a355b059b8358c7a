//! # HTTP user source
//!
//! [`HttpUserSource`] implements [`store::UserSource`] against the demo users
//! API over HTTPS. It issues three kinds of request:
//!
//! | Method | Request |
//! |--------|---------|
//! | [`fetch_page`](HttpUserSource::fetch_page) | `GET {base}/users?limit={limit}&skip={skip}` |
//! | [`fetch_all`](HttpUserSource::fetch_all) | `GET {base}/users?limit=0` |
//! | [`fetch_user`](HttpUserSource::fetch_user) | `GET {base}/users/{id}` |
//!
//! Bodies are read as text and decoded with `serde_json`, so a transport
//! failure ([`SourceError::Network`]), a non-2xx status ([`SourceError::Status`])
//! and an unparseable body ([`SourceError::Decode`]) stay distinguishable.
//! A 404 on the single-user endpoint, or a 2xx body that carries only a
//! `message`, is reported as [`SourceError::NotFound`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::config::SourceConfig;
use store::{PageWindow, SourceError, UserRecord, UserSource, UsersPage};

/// Single-user responses are either the record or `{"message": "..."}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserResponse {
    Found(UserRecord),
    Missing { message: String },
}

#[derive(Clone, Debug)]
pub struct HttpUserSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserSource {
    /// Build a source from config. The timeout only applies on native targets;
    /// in the browser the fetch API governs.
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        if config.timeout_secs > 0 {
            builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build().map_err(|e| SourceError::Network(e.to_string()))?;
        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Source over a client with reqwest's default settings.
    pub fn with_default_client(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    async fn get_text(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), SourceError> {
        let response = request
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        Ok((status, body))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, SourceError> {
        let (status, body) = self.get_text(request).await?;
        if !(200..300).contains(&status) {
            return Err(SourceError::Status(status));
        }
        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Decode(e.to_string()))
}

impl UserSource for HttpUserSource {
    async fn fetch_page(&self, window: PageWindow) -> Result<UsersPage, SourceError> {
        tracing::debug!("GET users limit={} skip={}", window.limit, window.skip);
        let request = self
            .client
            .get(self.users_url())
            .query(&[("limit", window.limit), ("skip", window.skip)]);
        self.get_json(request).await
    }

    async fn fetch_all(&self) -> Result<Vec<UserRecord>, SourceError> {
        tracing::debug!("GET users limit=0");
        let request = self.client.get(self.users_url()).query(&[("limit", 0u32)]);
        let page: UsersPage = self.get_json(request).await?;
        Ok(page.users)
    }

    async fn fetch_user(&self, id: u32) -> Result<UserRecord, SourceError> {
        tracing::debug!("GET user {id}");
        let request = self.client.get(format!("{}/{id}", self.users_url()));
        let (status, body) = self.get_text(request).await?;
        match status {
            404 => Err(SourceError::NotFound(id.to_string())),
            200..=299 => match decode::<UserResponse>(&body)? {
                UserResponse::Found(user) => Ok(user),
                UserResponse::Missing { message } => Err(SourceError::NotFound(message)),
            },
            other => Err(SourceError::Status(other)),
        }
    }
}
