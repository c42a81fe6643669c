//! # Errors
//!
//! Every failure that can stop the viewer from starting. None of them are
//! recoverable within a run: the binary prints the message and exits.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is not set.
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    /// The token is not of the form `clientId@clientSecret`.
    #[error("the qernal token is invalid: expected exactly one '@' separating client id and secret")]
    InvalidToken,

    /// The token endpoint rejected the client credentials.
    #[error("authentication failed ({status}): {body}")]
    Auth { status: StatusCode, body: String },

    /// The function list request was answered with a non-success status.
    #[error("failed to list functions ({status}): {body}")]
    Fetch { status: StatusCode, body: String },

    /// Transport or decoding failure talking to either endpoint.
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed; no request was sent.
    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("invalid access token header")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    pub(crate) fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }
}
