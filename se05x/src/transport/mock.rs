// se05x/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::transport::traits::I2cTransport;
use crate::{Error, Result};

/// One recorded bus operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOp {
    /// A successful write
    Write {
        /// Bus number
        bus: u8,
        /// Device address
        address: u8,
        /// Register select byte
        register: Option<u8>,
        /// Bytes written
        data: Vec<u8>,
    },
    /// A successful read
    Read {
        /// Bus number
        bus: u8,
        /// Device address
        address: u8,
        /// Register select byte
        register: Option<u8>,
        /// Bytes requested
        len: usize,
    },
}

#[derive(Debug, Default)]
struct MockState {
    reads: VecDeque<Vec<u8>>,
    ops: Vec<MockOp>,
    write_failures: usize,
    read_failures: usize,
    always_fail: bool,
    write_attempts: usize,
    read_attempts: usize,
}

/// Mock transport for unit tests. It records every operation and returns
/// queued read data.
///
/// Clones share state, so a test can hand one clone to a session and keep
/// another to inspect what was sent.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    /// Mock with an empty read queue and no failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the bytes returned by the next successful read.
    pub fn push_read(&self, data: Vec<u8>) {
        self.state.borrow_mut().reads.push_back(data);
    }

    /// Make the next `n` write attempts fail.
    pub fn set_write_failures(&self, n: usize) {
        self.state.borrow_mut().write_failures = n;
    }

    /// Make the next `n` read attempts fail.
    pub fn set_read_failures(&self, n: usize) {
        self.state.borrow_mut().read_failures = n;
    }

    /// Fail every operation, as if nothing acknowledged the address.
    pub fn set_always_fail(&self, fail: bool) {
        self.state.borrow_mut().always_fail = fail;
    }

    /// Every successful operation, in order.
    pub fn ops(&self) -> Vec<MockOp> {
        self.state.borrow().ops.clone()
    }

    /// Payloads of the successful writes, in order.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.state
            .borrow()
            .ops
            .iter()
            .filter_map(|op| match op {
                MockOp::Write { data, .. } => Some(data.clone()),
                MockOp::Read { .. } => None,
            })
            .collect()
    }

    /// Write calls, failed ones included.
    pub fn write_attempts(&self) -> usize {
        self.state.borrow().write_attempts
    }

    /// Read calls, failed ones included.
    pub fn read_attempts(&self) -> usize {
        self.state.borrow().read_attempts
    }

    /// Queued reads not consumed yet.
    pub fn pending_reads(&self) -> usize {
        self.state.borrow().reads.len()
    }
}

impl I2cTransport for MockTransport {
    fn read(&mut self, bus: u8, address: u8, register: Option<u8>, len: usize) -> Result<Vec<u8>> {
        let mut s = self.state.borrow_mut();
        s.read_attempts += 1;
        if s.always_fail {
            return Err(Error::Bus(format!("mock: read {:#04x} nack", address)));
        }
        if s.read_failures > 0 {
            s.read_failures -= 1;
            return Err(Error::Bus(format!("mock: read {:#04x} busy", address)));
        }
        let data = s
            .reads
            .pop_front()
            .ok_or_else(|| Error::Bus("mock: no queued read".into()))?;
        s.ops.push(MockOp::Read {
            bus,
            address,
            register,
            len,
        });
        Ok(data)
    }

    fn write(&mut self, bus: u8, address: u8, register: Option<u8>, data: &[u8]) -> Result<()> {
        let mut s = self.state.borrow_mut();
        s.write_attempts += 1;
        if s.always_fail {
            return Err(Error::Bus(format!("mock: write {:#04x} nack", address)));
        }
        if s.write_failures > 0 {
            s.write_failures -= 1;
            return Err(Error::Bus(format!("mock: write {:#04x} busy", address)));
        }
        s.ops.push(MockOp::Write {
            bus,
            address,
            register,
            data: data.to_vec(),
        });
        Ok(())
    }
}
