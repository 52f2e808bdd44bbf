// se05x/src/session/retry.rs
//! Bounded retry of single bus operations.

use crate::config::TransactionConfig;
use crate::{Error, Result};

/// Run `op` until it succeeds or the attempt budget is spent, sleeping
/// `retry_delay` between attempts. The last failure is wrapped in
/// `Error::Transport`.
pub fn with_retry<T>(
    config: &TransactionConfig,
    what: &str,
    mut op: impl FnMut() -> Result<T>,
) -> Result<T> {
    let budget = config.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op() {
            Ok(v) => {
                if attempt > 1 {
                    log::trace!("{} succeeded on attempt {}/{}", what, attempt, budget);
                }
                return Ok(v);
            }
            Err(e) if attempt >= budget => {
                log::warn!("{} failed after {} attempts: {}", what, attempt, e);
                return Err(Error::Transport {
                    attempts: attempt,
                    source: Box::new(e),
                });
            }
            Err(e) => {
                log::trace!("{} attempt {}/{} failed: {}", what, attempt, budget, e);
                attempt += 1;
                if !config.retry_delay.is_zero() {
                    std::thread::sleep(config.retry_delay);
                }
            }
        }
    }
}
