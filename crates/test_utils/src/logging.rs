//! Opt-in tracing output for tests
//!
//! Call [`init_tracing`] at the top of a test to see domain trace
//! events (filtered by `RUST_LOG`). Initialization is idempotent across
//! the whole test binary.

use once_cell::sync::OnceCell;

static INIT: OnceCell<()> = OnceCell::new();

/// Installs a test-writer tracing subscriber once per process
pub fn init_tracing() {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
