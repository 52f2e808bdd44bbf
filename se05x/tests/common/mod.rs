// Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use se05x::test_support::{fast_config, mock_device, queue_block, response_block};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}
