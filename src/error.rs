//! Error taxonomy for catalog access.
//!
//! Every failure surfaced by this crate is recoverable at the caller
//! boundary. Callers branch on [`Error::kind`] to decide presentation
//! (empty state, error message, retry affordance).

use std::fmt;

use reqwest::StatusCode;

/// Broad classification of a catalog failure.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Connectivity or timeout failure before a response arrived.
    Network,
    /// The gateway answered with a non-success status.
    Status,
    /// The response body was not the expected JSON shape.
    Parse,
    /// A valid response contained no record for the requested id.
    NotFound,
    /// Invalid construction-time input (configuration, URLs).
    Validation,
}

/// Catalog access error.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    message: String,
    status: Option<StatusCode>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Validation,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    pub(crate) fn not_found(id: u64) -> Self {
        Self {
            kind: Kind::NotFound,
            message: format!("no hero with id {id}"),
            status: None,
            source: None,
        }
    }

    pub(crate) fn status(status: StatusCode, body: String) -> Self {
        let message = if body.is_empty() {
            format!("gateway returned {status}")
        } else {
            format!("gateway returned {status}: {body}")
        };
        Self {
            kind: Kind::Status,
            message,
            status: Some(status),
            source: None,
        }
    }

    /// Classification of this error.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// HTTP status, present only for [`Kind::Status`].
    #[must_use]
    pub const fn status_code(&self) -> Option<StatusCode> {
        self.status
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_decode() {
            Kind::Parse
        } else if err.is_builder() {
            Kind::Validation
        } else {
            Kind::Network
        };
        Self {
            kind,
            message: err.to_string(),
            status: err.status(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self {
            kind: Kind::Validation,
            message: format!("invalid URL: {err}"),
            status: None,
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self {
            kind: Kind::Parse,
            message: format!("unexpected response shape: {err}"),
            status: None,
            source: Some(Box::new(err)),
        }
    }
}
