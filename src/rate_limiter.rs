//! Fixed-interval rate limiting between domains.
//!
//! WHOIS servers throttle clients that ask too quickly, so the driver pauses
//! for a fixed delay after every domain except the last.

use std::time::Duration;

/// Sleeps a fixed delay between consecutive domains.
#[derive(Debug, Clone, Copy)]
pub struct RateLimiter {
    delay: Duration,
}

impl RateLimiter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Waits for the configured delay unless `is_last` is set.
    ///
    /// Returns whether it slept. A zero delay never sleeps.
    pub async fn wait(&self, is_last: bool) -> bool {
        if is_last || self.delay.is_zero() {
            return false;
        }
        println!("Waiting {} seconds...", self.delay.as_secs());
        tokio::time::sleep(self.delay).await;
        true
    }
}
