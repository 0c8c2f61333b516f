//! `patfetch <FILE>...` – sample one patent, download its document pages.

use anyhow::Result;
use patfetch_core::config::PatfetchConfig;
use patfetch_core::search::HttpSearchClient;
use patfetch_core::{checksum, document, sampler};
use std::path::PathBuf;

pub fn run_fetch(cfg: &PatfetchConfig, outputs: &[PathBuf]) -> Result<()> {
    let client = HttpSearchClient::new(cfg);
    let mut rng = rand::thread_rng();
    let number = sampler::sample_patent(&client, &mut rng, &cfg.category, cfg.blind_page_bound)?;
    println!("sampled patent {number} from category {}", cfg.category);

    let mut page = cfg.first_document_page;
    for output in outputs {
        let bytes = document::fetch_document_page(cfg, &number, page)?;
        tracing::debug!(
            page,
            sha256 = %checksum::sha256_hex(&bytes),
            "fetched document page"
        );
        document::save_document(&bytes, output)?;
        println!("wrote page {page} to {}", output.display());
        page += 1;
    }

    Ok(())
}
