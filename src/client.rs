use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client as ReqwestClient;
use reqwest::Method;
use url::Url;

use crate::auth::Credentials;
use crate::catalog::HeroCatalog;
use crate::config::CatalogConfig;
use crate::error::Error;
use crate::types::{CharacterRecord, CharactersResponse, Hero};
use crate::Result;

/// Catalog backed by the remote comics gateway.
///
/// One signed GET per call, no caching and no retries. Cloning is cheap:
/// the underlying HTTP client is reference-counted, and concurrent calls
/// are independently signed and idempotent.
#[derive(Clone, Debug)]
pub struct RemoteCatalog {
    base_url: Url,
    credentials: Credentials,
    client: ReqwestClient,
}

impl RemoteCatalog {
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_client(config, ReqwestClient::new())
    }

    /// Creates a remote catalog with a caller-supplied HTTP client.
    #[must_use]
    pub fn with_client(config: CatalogConfig, client: ReqwestClient) -> Self {
        Self {
            base_url: config.base_url,
            credentials: config.credentials,
            client,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_characters(&self, path: &str) -> Result<Vec<Hero>> {
        // Fresh timestamp per call: the gateway checks signature freshness.
        let params = self.credentials.sign_at(Utc::now().timestamp());
        let request = self
            .client
            .request(Method::GET, self.endpoint(path)?)
            .query(&params)
            .build()?;

        tracing::debug!(path, "fetching hero catalog");
        let response: CharactersResponse = crate::request(&self.client, request).await?;
        tracing::debug!(path, results = response.data.results.len(), "catalog response");

        Ok(response
            .data
            .results
            .into_iter()
            .map(CharacterRecord::into_hero)
            .collect())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl HeroCatalog for RemoteCatalog {
    async fn fetch_all(&self) -> Result<Vec<Hero>> {
        self.get_characters("characters").await
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Hero> {
        let mut heroes = self.get_characters(&format!("characters/{id}")).await?;
        if heroes.is_empty() {
            return Err(Error::not_found(id));
        }
        // The gateway is expected to return exactly one record; if it ever
        // echoes more, the first wins.
        Ok(heroes.swap_remove(0))
    }
}
