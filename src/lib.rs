//! Client SDK for a comics hero catalog gateway.
//!
//! This crate implements the catalog-access core of a hero browser:
//! - sign requests with the gateway's `ts`/`apikey`/`hash` scheme
//! - fetch the full catalog or a single hero by id
//! - map the gateway's nested wire records into flat [`Hero`] summaries
//!
//! Catalog access is polymorphic over its source: [`RemoteCatalog`] issues
//! one signed GET per call, [`StaticCatalog`] serves a fixed in-memory
//! roster. Both are selected at construction via [`CatalogSource`] and
//! implement [`HeroCatalog`].

use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;

pub mod auth;
mod catalog;
mod client;
mod config;
pub mod error;
mod types;

pub use auth::{Credentials, sign};
pub use catalog::{CatalogSource, HeroCatalog, StaticCatalog};
pub use client::RemoteCatalog;
pub use config::{CatalogConfig, DEFAULT_GATEWAY};
pub use error::{Error, Kind};
pub use types::Hero;

pub type Result<T> = std::result::Result<T, Error>;

/// Unix timestamp in whole seconds.
pub type Timestamp = i64;

/// Executes a built request and deserializes the JSON body.
///
/// Failures are translated into the crate taxonomy: transport problems
/// become [`Kind::Network`], non-2xx statuses become [`Kind::Status`] with
/// the body captured for context, and undecodable bodies become
/// [`Kind::Parse`]. No raw `reqwest` or `serde_json` error escapes.
pub(crate) async fn request<T>(client: &ReqwestClient, request: reqwest::Request) -> Result<T>
where
    T: DeserializeOwned,
{
    let response = client.execute(request).await.map_err(Error::from)?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, "gateway returned error status");
        return Err(Error::status(status, body));
    }

    let bytes = response.bytes().await.map_err(Error::from)?;
    serde_json::from_slice(&bytes).map_err(Error::from)
}
