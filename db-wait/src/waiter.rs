//! The bounded polling loop.

use std::time::Duration;

use common::errors::ProbeError;
use common::models::Outcome;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::probe::Connector;

/// Polls a connector at a fixed interval until it succeeds or a deadline
/// passes.
pub struct ReadinessWaiter {
    timeout: Duration,
    interval: Duration,
    fail_fast: bool,
}

impl ReadinessWaiter {
    /// Creates a waiter with the given deadline and polling interval.
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self {
            timeout,
            interval,
            fail_fast: false,
        }
    }

    /// Aborts on non-transient errors instead of retrying them.
    pub fn fail_fast(mut self, enabled: bool) -> Self {
        self.fail_fast = enabled;
        self
    }

    /// Attempts a connection once per interval until one succeeds or the
    /// deadline passes.
    ///
    /// The deadline is measured from the first attempt and checked before
    /// each one, so a zero timeout makes no attempts at all. Every attempt
    /// is followed by one interval of sleep, success included; on success
    /// the loop exits right after that sleep. Nothing propagates out of the
    /// loop: every error converts into continued polling (or, with
    /// fail-fast enabled, an `Aborted` outcome).
    pub async fn wait_until_ready(&self, connector: &dyn Connector) -> Outcome {
        let start = Instant::now();
        while start.elapsed() < self.timeout {
            match connector.try_connect().await {
                Ok(()) => {
                    info!("DB is ready!");
                    sleep(self.interval).await;
                    return Outcome::Ready;
                }
                Err(ProbeError::Unavailable(reason)) => {
                    info!("waiting for DB...");
                    debug!(reason = %reason, "database not yet available");
                }
                Err(err) => {
                    warn!(kind = err.kind(), error = %err, "connection attempt failed");
                    if self.fail_fast {
                        return Outcome::Aborted;
                    }
                }
            }
            sleep(self.interval).await;
        }
        Outcome::TimedOut
    }
}
