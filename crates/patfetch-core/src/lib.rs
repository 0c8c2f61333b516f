pub mod config;
pub mod logging;

pub mod checksum;
pub mod doc_url;
pub mod document;
pub mod error;
pub mod sampler;
pub mod search;

mod http;
