//! Common test utilities for pipeline integration tests

pub mod corpus;

pub use corpus::{fixture_root, CorpusError, FixtureDocument, TestCorpus};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Route pipeline logs through the test harness, honoring RUST_LOG
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
