//! Shared helpers for cookplan's integration tests.
//!
//! - [`builders`]: tasks, plans and configs with test-friendly defaults.
//! - [`session`]: a core session on a manual clock, plus step inspection.
//! - [`recording_frontend`]: a frontend that records instead of printing.

pub mod builders;
pub mod recording_frontend;
pub mod session;

use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// Output is captured per test and only shown for failures (or with
/// `--nocapture`). The filter comes from `COOKPLAN_LOG`, the same variable
/// the binary reads, defaulting to `cookplan=debug` so session transitions
/// are visible when a test fails.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = std::env::var(cookplan::logging::LOG_ENV)
            .ok()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new("warn,cookplan=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Time limit for a single async test body.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Run a future, failing the test if it outlives [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(TEST_TIMEOUT, f)
        .await
        .unwrap_or_else(|_| panic!("test timed out after {TEST_TIMEOUT:?}"))
}
