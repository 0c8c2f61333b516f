//! Fetching and persisting document pages.

use crate::config::PatfetchConfig;
use crate::doc_url;
use crate::error::{Error, Result};
use crate::http;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Fetches the raw bytes of one document page for `number`.
pub fn fetch_document_page(cfg: &PatfetchConfig, number: &str, page: u32) -> Result<Vec<u8>> {
    let url = doc_url::document_url(&cfg.document_base_url, number, page)?;
    tracing::info!(%url, "fetching document page");
    let resp = http::get(
        &url,
        Duration::from_secs(cfg.connect_timeout_secs),
        Duration::from_secs(cfg.request_timeout_secs),
    )?;
    if resp.status != 200 {
        tracing::debug!(
            body = %String::from_utf8_lossy(&resp.body),
            "non-200 document response"
        );
        return Err(Error::Status {
            url,
            status: resp.status,
        });
    }
    Ok(resp.body)
}

/// Writes a fetched page verbatim, replacing any existing file.
pub fn save_document(bytes: &[u8], dest: &Path) -> Result<()> {
    fs::write(dest, bytes).map_err(|source| Error::Write {
        path: dest.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %dest.display(), bytes = bytes.len(), "wrote document page");
    Ok(())
}
