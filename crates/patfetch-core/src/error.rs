//! Typed failures for the sampling and download pipeline.
//!
//! Every variant is fatal to the run; presentation is left to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Non-200 status from the search or document service.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u32 },

    /// Response parsed, but a required field was missing or ill-shaped.
    #[error("unexpected search response shape: {0}")]
    UnexpectedResponse(&'static str),

    /// The category reported a total count below 1; nothing to sample.
    #[error("category has no patents (reported count {total})")]
    EmptyCategory { total: u64 },

    /// Both the blind and the informed draw came back empty.
    #[error("no patent found after informed retry")]
    SamplingExhausted,

    /// Patent number unfit for the grouped document path scheme.
    #[error(
        "patent number {number:?} does not fit the document path scheme \
         (need at least {min} ASCII characters)",
        min = crate::doc_url::MIN_NUMBER_LEN
    )]
    MalformedNumber { number: String },

    /// Transport-layer failure below the HTTP status line.
    #[error(transparent)]
    Curl(#[from] curl::Error),

    /// Search response body was not valid JSON.
    #[error("invalid JSON in search response: {0}")]
    Json(#[from] serde_json::Error),

    /// Search URL could not be assembled.
    #[error("invalid search URL: {0}")]
    Url(#[from] url::ParseError),

    /// Writing a fetched page to disk failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
