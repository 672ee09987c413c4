//! Courtesy delays between PDOK requests.
//!
//! PDOK throttles or blocks clients that hammer the Locatieserver. Every page
//! request after the first, and every query term after the first, waits for
//! the configured delay. The wait is awaited inline, so requests never overlap.

use std::time::Duration;

/// Sleeps for `delay_ms` milliseconds. A zero delay returns immediately.
pub(crate) async fn courtesy_pause(delay_ms: u64) {
    if delay_ms == 0 {
        return;
    }
    tracing::trace!(delay_ms, "courtesy pause before next PDOK request");
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
}
