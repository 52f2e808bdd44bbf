//! Timing helpers for the retry loops.
//!
//! The secure element NACKs its address while it is busy processing a
//! block, so every bus operation is retried after a short pause.

use std::time::Duration;

/// Pause between two attempts of the same bus operation, in milliseconds.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 5;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default retry delay as Duration.
pub fn default_retry_delay() -> Duration {
    ms(DEFAULT_RETRY_DELAY_MS)
}
