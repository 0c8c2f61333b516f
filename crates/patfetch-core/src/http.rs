//! Blocking HTTP GET helper shared by the search and document clients.

use crate::error::Result;
use std::time::Duration;

/// Status code and raw body of a completed GET.
pub(crate) struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Issues a GET and collects the full body in memory. Follows redirects.
/// Status checking is left to the caller.
pub(crate) fn get(url: &str, connect_timeout: Duration, timeout: Duration) -> Result<HttpResponse> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(connect_timeout)?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(HttpResponse { status, body })
}
