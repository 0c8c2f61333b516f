use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/patfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatfetchConfig {
    /// Base URL of the patent search query endpoint.
    pub search_base_url: String,
    /// Base URL of the document image service.
    pub document_base_url: String,
    /// CPC subsection scoping every search query.
    pub category: String,
    /// Upper bound for the blind page draw. The true category size is
    /// usually far smaller, so most blind draws overshoot and fall back to
    /// the informed draw.
    pub blind_page_bound: u64,
    /// Document page the first output name maps to. Page 1 is usually a
    /// text cover sheet, so the default starts at 2.
    pub first_document_page: u32,
    /// Connect timeout for both services, in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout for both services, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for PatfetchConfig {
    fn default() -> Self {
        Self {
            search_base_url: "http://www.patentsview.org/api/patents/query".to_string(),
            document_base_url: "http://pdfpiw.uspto.gov".to_string(),
            category: "B62".to_string(),
            blind_page_bound: 1_000_000,
            first_document_page: 2,
            connect_timeout_secs: 15,
            request_timeout_secs: 300,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("patfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PatfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PatfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PatfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
