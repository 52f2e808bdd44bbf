// se05x/src/config.rs
//! Per-session configuration

use std::time::Duration;

use crate::constants::{DEFAULT_ADDRESS, DEFAULT_BUS, DEFAULT_MAX_ATTEMPTS};
use crate::utils::default_retry_delay;

/// Where the secure element lives and how hard to try reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TransactionConfig {
    /// I2C bus number handed to the transport
    pub bus: u8,
    /// 7-bit device address
    pub address: u8,
    /// Attempts per bus read or write, at least 1.
    pub max_attempts: u32,
    /// Pause between two attempts of the same operation.
    pub retry_delay: Duration,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            bus: DEFAULT_BUS,
            address: DEFAULT_ADDRESS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: default_retry_delay(),
        }
    }
}

impl TransactionConfig {
    /// Defaults for everything but the bus location.
    pub fn new(bus: u8, address: u8) -> Self {
        Self {
            bus,
            address,
            ..Self::default()
        }
    }

    /// Set the bus number.
    pub fn with_bus(mut self, bus: u8) -> Self {
        self.bus = bus;
        self
    }

    /// Set the device address.
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Zero is bumped to one: every operation is tried at least once.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the pause between attempts.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}
