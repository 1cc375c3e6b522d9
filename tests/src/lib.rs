//! # Engine Codec Test Suite
//!
//! Unified test crate for the codec library.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/          # End-to-end wire protocol tests
//!     ├── request_flows.rs  # Argument structures over the full codec path
//!     ├── result_decoding.rs# Versioned result disambiguation matrix
//!     ├── concurrency.rs    # Shared registry under parallel encoding
//!     └── metadata_json.rs  # JSON side of the token metadata
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p codec-tests
//!
//! # By category
//! cargo test -p codec-tests integration::result_decoding
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

use std::sync::Once;

pub mod integration;

/// Installs a test-friendly tracing subscriber once per process.
///
/// Honors `RUST_LOG`; decode fallback decisions inside the codec log at
/// debug level and show up under `RUST_LOG=engine_codec=debug`.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
