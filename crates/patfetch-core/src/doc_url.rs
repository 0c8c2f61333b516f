//! Document URL construction from a patent number.
//!
//! The USPTO image servers shard documents by a fixed digit grouping of the
//! patent number: the last two characters, the three before those, and the
//! remaining leading characters padded out to a fixed width. Reproducing
//! that grouping exactly is all this module does.

use crate::error::{Error, Result};

/// Shortest patent number the grouping scheme can address.
pub const MIN_NUMBER_LEN: usize = 6;

/// Width the number is padded out to when building the leading group.
const PADDED_LEN: usize = 8;

/// Builds the grouped relative path for one page of a patent document,
/// e.g. `"1234567"` page 2 -> `67/345/012/2.pdf`.
pub fn grouped_path(number: &str, page: u32) -> Result<String> {
    let n = number.len();
    if n < MIN_NUMBER_LEN || !number.is_ascii() {
        return Err(Error::MalformedNumber {
            number: number.to_string(),
        });
    }

    let tail = &number[n - 2..];
    let mid = &number[n - 5..n - 2];
    let lead = &number[..n - 5];
    let padding = "0".repeat(PADDED_LEN.saturating_sub(n));

    Ok(format!("{tail}/{mid}/{padding}{lead}/{page}.pdf"))
}

/// Joins the document base URL with the grouped path for one page.
pub fn document_url(base_url: &str, number: &str, page: u32) -> Result<String> {
    let path = grouped_path(number, page)?;
    Ok(format!("{}/{}", base_url.trim_end_matches('/'), path))
}
