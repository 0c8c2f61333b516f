//! Random patent selection against the paginated search service.
//!
//! The service returns one result per page, so a patent is picked by
//! guessing a page number. The first draw is blind, bounded only by
//! `blind_page_bound`; when it lands past the end of the result set the
//! reply's total count bounds a second, guaranteed-in-range draw. At most
//! one informed retry: a second miss is fatal, as are transport and shape
//! failures on either attempt.

use crate::error::{Error, Result};
use crate::search::SearchBackend;
use rand::Rng;

/// Samples one patent number from `category`.
pub fn sample_patent<B, R>(
    backend: &B,
    rng: &mut R,
    category: &str,
    blind_page_bound: u64,
) -> Result<String>
where
    B: SearchBackend + ?Sized,
    R: Rng + ?Sized,
{
    let blind_page = rng.gen_range(1..=blind_page_bound.max(1));
    tracing::debug!(category, page = blind_page, "blind draw");
    let first = backend.query(category, blind_page)?;
    if let Some(number) = first.patent_number {
        tracing::info!(%number, "blind draw landed");
        return Ok(number);
    }

    // A miss must carry the category's total count; that bounds the retry.
    let total = first
        .total_count
        .ok_or(Error::UnexpectedResponse("total_patent_count field missing"))?;
    if total < 1 {
        return Err(Error::EmptyCategory { total });
    }

    let informed_page = rng.gen_range(1..=total);
    tracing::debug!(category, page = informed_page, total, "informed draw");
    let second = backend.query(category, informed_page)?;
    match second.patent_number {
        Some(number) => {
            tracing::info!(%number, "informed draw landed");
            Ok(number)
        }
        None => Err(Error::SamplingExhausted),
    }
}
