use secrecy::SecretString;
use url::Url;

use crate::Result;
use crate::auth::Credentials;
use crate::error::Error;

/// Base URL of the public comics gateway.
///
/// Exposed for convenience only; credentials are always supplied by the
/// caller, never compiled in.
pub const DEFAULT_GATEWAY: &str = "https://gateway.marvel.com/v1/public/";

/// Remote catalog configuration, validated at construction.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub credentials: Credentials,
}

impl CatalogConfig {
    /// Builds a configuration from raw string inputs, typically read from
    /// app-level deployment config.
    pub fn from_raw(base_url: &str, public_key: &str, private_key: SecretString) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Self::new(base_url, Credentials::new(public_key, private_key))
    }

    pub fn new(mut base_url: Url, credentials: Credentials) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::validation(format!(
                "base URL `{base_url}` cannot carry endpoint paths"
            )));
        }
        if credentials.is_empty() {
            return Err(Error::validation(
                "gateway credentials require a non-empty public and private key",
            ));
        }

        // Url::join replaces the last segment unless the base ends in `/`.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            credentials,
        })
    }
}
