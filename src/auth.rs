//! Request signing for the comics gateway.
//!
//! The gateway authenticates each GET with three query parameters:
//! `apikey` (public key), `ts` (unix seconds), and `hash`, the MD5 digest
//! of `ts + privateKey + publicKey` as 32 lowercase hex characters. The
//! gateway validates the signature against a freshness window, so `ts`
//! must be taken immediately before each call, never cached.

use md5::{Digest as _, Md5};
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;

use crate::Timestamp;

/// Per-deployment API key pair.
///
/// The private key is wrapped in [`SecretString`] and never appears in
/// `Debug` output or logs.
#[derive(Clone, Debug)]
pub struct Credentials {
    public_key: String,
    private_key: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(public_key: impl Into<String>, private_key: SecretString) -> Self {
        Self {
            public_key: public_key.into(),
            private_key,
        }
    }

    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.public_key.is_empty() || self.private_key.expose_secret().is_empty()
    }

    /// Produces the transient query parameters for one signed request.
    pub(crate) fn sign_at(&self, timestamp: Timestamp) -> SignedParams {
        SignedParams {
            apikey: self.public_key.clone(),
            ts: timestamp,
            hash: sign(
                timestamp,
                &self.public_key,
                self.private_key.expose_secret(),
            ),
        }
    }
}

/// Query parameters for one signed request. Recomputed per call, never
/// persisted.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct SignedParams {
    apikey: String,
    ts: Timestamp,
    hash: String,
}

/// Computes the gateway authentication hash.
///
/// Pure: identical inputs always yield identical output. The digest is
/// rendered as exactly 32 lowercase hex characters.
#[must_use]
pub fn sign(timestamp: Timestamp, public_key: &str, private_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(timestamp.to_string().as_bytes());
    hasher.update(private_key.as_bytes());
    hasher.update(public_key.as_bytes());
    hex::encode(hasher.finalize())
}
