//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build correctly checksummed secure element replies and
//! queue them on a `MockTransport` the way the session reads them: header
//! first, then payload plus checksum.
#![allow(dead_code)]

use std::time::Duration;

use crate::config::TransactionConfig;
use crate::constants::{HEADER_LEN, NAD_DEVICE};
use crate::device::{Se05x, Se05xBuilder};
use crate::protocol::checksum::block_crc;
use crate::transport::mock::MockTransport;
use crate::Result;

/// A reply block as the secure element would put it on the bus.
#[doc(hidden)]
pub fn response_block(pcb: u8, payload: &[u8]) -> Vec<u8> {
    let mut block = vec![NAD_DEVICE, pcb, payload.len() as u8];
    block.extend_from_slice(payload);
    let crc = block_crc(&block);
    block.extend_from_slice(&crc);
    block
}

/// Queue one reply block as the two reads a session performs.
#[doc(hidden)]
pub fn queue_block(mock: &MockTransport, pcb: u8, payload: &[u8]) {
    let block = response_block(pcb, payload);
    mock.push_read(block[..HEADER_LEN].to_vec());
    mock.push_read(block[HEADER_LEN..].to_vec());
}

/// Configuration that retries a few times without sleeping.
#[doc(hidden)]
pub fn fast_config() -> TransactionConfig {
    TransactionConfig::default()
        .with_max_attempts(3)
        .with_retry_delay(Duration::ZERO)
}

/// Build an `Se05x` handle over a clone of `mock`.
#[doc(hidden)]
pub fn mock_device(mock: &MockTransport) -> Result<Se05x> {
    Se05xBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_config(fast_config())
        .build()
}
