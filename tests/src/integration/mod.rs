//! End-to-end tests over the public codec surface.

pub mod concurrency;
pub mod metadata_json;
pub mod request_flows;
pub mod result_decoding;
