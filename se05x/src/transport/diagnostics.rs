// se05x/src/transport/diagnostics.rs

use std::fmt;

use crate::utils::bytes_to_hex;

/// A raw bus operation as seen by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cRecord {
    /// Bytes read from the device
    Read {
        /// 7-bit device address
        address: u8,
        /// Register select byte, if one was sent
        register: Option<u8>,
        /// Bytes received
        data: Vec<u8>,
    },
    /// Bytes written to the device
    Write {
        /// 7-bit device address
        address: u8,
        /// Register select byte, if one was sent
        register: Option<u8>,
        /// Bytes sent
        data: Vec<u8>,
    },
}

impl fmt::Display for I2cRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dir, address, register, data) = match self {
            Self::Read {
                address,
                register,
                data,
            } => ("read", address, register, data),
            Self::Write {
                address,
                register,
                data,
            } => ("write", address, register, data),
        };
        write!(f, "I2C {} addr:{:#04x} reg:", dir, address)?;
        match register {
            Some(r) => write!(f, "{:#04x}", r)?,
            None => f.write_str("-")?,
        }
        write!(f, " val:{}", bytes_to_hex(data))
    }
}

/// Receiver for raw bus traffic. Sessions without a sink emit nothing.
pub trait DiagnosticSink {
    /// Called once per successful read or write.
    fn record(&self, record: &I2cRecord);
}

/// Forwards records to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, record: &I2cRecord) {
        log::debug!(target: "se05x::i2c", "{}", record);
    }
}

/// Collects records in memory; used by tests and by tools that dump a trace.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: std::rc::Rc<std::cell::RefCell<Vec<I2cRecord>>>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<I2cRecord> {
        self.records.borrow().clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, record: &I2cRecord) {
        self.records.borrow_mut().push(record.clone());
    }
}
