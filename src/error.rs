use reqwest::{Method, StatusCode};
use thiserror::Error;
use url::Url;

/// Failure of a single fetch layer request.
///
/// `Transport` and `Status` are the network failures proper; `NotFound` is split
/// out because the remote answers unknown ids with a 404, and `Decode` covers a
/// response whose JSON does not match the expected record shape.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{method} {url}: {source}")]
    Transport {
        method: Method,
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} failed with status {status}")]
    Status {
        method: Method,
        url: Url,
        status: StatusCode,
    },

    #[error("{method} {url}: not found")]
    NotFound { method: Method, url: Url },

    #[error("decode response from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("encode request body for {url}: {source}")]
    Encode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request path {path}: {source}")]
    Path {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }

    /// Transport failures and non-2xx answers other than 404.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FetchError::Transport { .. } | FetchError::Status { .. }
        )
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
