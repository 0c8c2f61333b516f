//! Client for the patent search query API.
//!
//! The upstream API caps `per_page`, so random selection works by asking
//! for exactly one result at a random page; on a miss the reply still
//! carries the total match count, which the sampler uses to bound its
//! second draw.

use crate::config::PatfetchConfig;
use crate::error::{Error, Result};
use crate::http;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Outcome of one single-result query page.
#[derive(Debug, Clone)]
pub struct SearchReply {
    /// The matched patent number, when the page landed inside the result set.
    pub patent_number: Option<String>,
    /// Total matches for the category, when the service reported it.
    pub total_count: Option<u64>,
}

/// Seam between the sampler and the search service.
pub trait SearchBackend {
    /// Queries one page (one result per page) of the given category.
    fn query(&self, category: &str, page: u64) -> Result<SearchReply>;
}

/// Wire shape of the search response. `patents` is null on a miss.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    patents: Option<Vec<PatentRecord>>,
    total_patent_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct PatentRecord {
    patent_number: Option<String>,
}

/// Curl-backed search client.
pub struct HttpSearchClient {
    base_url: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpSearchClient {
    pub fn new(cfg: &PatfetchConfig) -> Self {
        Self {
            base_url: cfg.search_base_url.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }

    /// Assembles the full query URL for one page of one category.
    fn query_url(&self, category: &str, page: u64) -> Result<Url> {
        let q = serde_json::json!({ "cpc_subsection_id": category }).to_string();
        let f = serde_json::json!(["patent_number"]).to_string();
        let o = serde_json::json!({ "page": page, "per_page": 1 }).to_string();
        Ok(Url::parse_with_params(
            &self.base_url,
            &[("q", q), ("f", f), ("o", o)],
        )?)
    }
}

impl SearchBackend for HttpSearchClient {
    fn query(&self, category: &str, page: u64) -> Result<SearchReply> {
        let url = self.query_url(category, page)?;
        tracing::debug!(%url, "querying search service");
        let resp = http::get(url.as_str(), self.connect_timeout, self.timeout)?;
        if resp.status != 200 {
            tracing::debug!(
                body = %String::from_utf8_lossy(&resp.body),
                "non-200 search response"
            );
            return Err(Error::Status {
                url: url.to_string(),
                status: resp.status,
            });
        }
        let parsed: SearchResponse = serde_json::from_slice(&resp.body)?;
        reply_from_response(parsed)
    }
}

/// Flattens the wire shape into a `SearchReply`, rejecting replies that
/// claim a hit but carry no usable record.
fn reply_from_response(resp: SearchResponse) -> Result<SearchReply> {
    let patent_number = match resp.patents {
        None => None,
        Some(records) => {
            let first = records
                .into_iter()
                .next()
                .ok_or(Error::UnexpectedResponse("patents list is empty"))?;
            Some(
                first
                    .patent_number
                    .ok_or(Error::UnexpectedResponse("patent_number field missing"))?,
            )
        }
    };
    Ok(SearchReply {
        patent_number,
        total_count: resp.total_patent_count,
    })
}
