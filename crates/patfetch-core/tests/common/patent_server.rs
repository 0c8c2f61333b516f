//! Minimal HTTP/1.1 fixture standing in for both external services.
//!
//! Search requests (paths under `/api/`) get JSON replies driven by a
//! configured total count: pages inside the count hit, pages past it miss
//! but still report the count. Any other path is matched against the
//! configured document routes.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct PatentServerOptions {
    /// Patent number returned for search hits.
    pub patent_number: String,
    /// Total matches reported; query pages above this count miss.
    pub total_count: u64,
    /// If set, every search request gets this status with a plain body.
    pub search_status: Option<u32>,
    /// Exact request paths that serve a document body; others get 404.
    pub doc_routes: HashMap<String, Vec<u8>>,
}

impl Default for PatentServerOptions {
    fn default() -> Self {
        Self {
            patent_number: "1234567".to_string(),
            total_count: 5,
            search_status: None,
            doc_routes: HashMap::new(),
        }
    }
}

pub struct PatentServer {
    /// Base URL, e.g. "http://127.0.0.1:12345".
    pub base_url: String,
    /// Number of search queries received so far.
    pub search_requests: Arc<AtomicUsize>,
}

/// Starts the fixture in a background thread serving `opts`. The server
/// runs until the process exits.
pub fn start(opts: PatentServerOptions) -> PatentServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let search_requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&search_requests);
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            let counter = Arc::clone(&counter);
            thread::spawn(move || handle(stream, &opts, &counter));
        }
    });
    PatentServer {
        base_url: format!("http://127.0.0.1:{}", port),
        search_requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    opts: &PatentServerOptions,
    search_requests: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let target = match request_target(request) {
        Some(t) => t,
        None => return,
    };

    if target.starts_with("/api/") {
        search_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = opts.search_status {
            respond(&mut stream, status, "text/plain", b"search unavailable");
            return;
        }
        let page = page_from_target(&target).unwrap_or(0);
        let body = if page >= 1 && page <= opts.total_count {
            format!(
                r#"{{"patents":[{{"patent_number":"{}"}}],"count":1,"total_patent_count":{}}}"#,
                opts.patent_number, opts.total_count
            )
        } else {
            format!(
                r#"{{"patents":null,"count":0,"total_patent_count":{}}}"#,
                opts.total_count
            )
        };
        respond(&mut stream, 200, "application/json", body.as_bytes());
        return;
    }

    match opts.doc_routes.get(target.as_str()) {
        Some(body) => respond(&mut stream, 200, "application/pdf", body),
        None => respond(&mut stream, 404, "text/plain", b"no such document"),
    }
}

fn respond(stream: &mut std::net::TcpStream, status: u32, content_type: &str, body: &[u8]) {
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Error",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        content_type,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}

/// Percent-decoded request target from the request line; GET only.
fn request_target(request: &str) -> Option<String> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    if !method.eq_ignore_ascii_case("GET") {
        return None;
    }
    Some(percent_decode(parts.next()?))
}

/// Digits following `"page":` in the decoded target's options parameter.
fn page_from_target(target: &str) -> Option<u64> {
    let idx = target.find("\"page\":")?;
    let rest = &target[idx + "\"page\":".len()..];
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(v) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(v);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
