//! Wait outcome and end-of-run report.

use std::time::Duration;

use chrono::Utc;
use serde::Serialize;

/// Terminal state of the polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A probe connection was opened and released successfully.
    Ready,
    /// The deadline passed without a successful probe.
    TimedOut,
    /// A non-transient error stopped the loop (fail-fast mode only).
    Aborted,
}

impl Outcome {
    /// Maps the outcome to a process exit code.
    ///
    /// The default mapping is 0 for every outcome, matching the historical
    /// contract: callers distinguish success from timeout by log output
    /// alone. Strict mode opts into the corrected mapping (0 ready,
    /// 1 timed out, 2 aborted).
    pub fn exit_code(self, strict: bool) -> u8 {
        if !strict {
            return 0;
        }
        match self {
            Outcome::Ready => 0,
            Outcome::TimedOut => 1,
            Outcome::Aborted => 2,
        }
    }
}

/// Machine-readable summary emitted once the loop finishes.
#[derive(Debug, Serialize)]
pub struct WaitReport {
    /// How the wait ended.
    pub outcome: Outcome,
    /// Wall-clock time spent waiting, in milliseconds.
    pub elapsed_ms: u64,
    /// Completion timestamp.
    pub timestamp: String,
}

impl WaitReport {
    /// Creates a report stamped with the current time.
    pub fn new(outcome: Outcome, elapsed: Duration) -> Self {
        Self {
            outcome,
            elapsed_ms: elapsed.as_millis() as u64,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
