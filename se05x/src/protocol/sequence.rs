// se05x/src/protocol/sequence.rs

use super::pcb::Pcb;

/// Alternating I-block sequence number for one secure element session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceState {
    bit: u8,
}

impl SequenceState {
    /// Fresh state, sequence 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number the next I-block carries.
    pub fn bit(&self) -> u8 {
        self.bit
    }

    /// Advance after a successful I-block exchange.
    pub fn toggle(&mut self) {
        self.bit ^= 1;
    }

    /// Back to 0, regardless of the current state. Done whenever an ATR
    /// request is sent.
    pub fn reset(&mut self) {
        self.bit = 0;
    }

    /// PCB for the next I-block. Chaining is never requested by this driver.
    pub fn next_information_pcb(&self) -> Pcb {
        Pcb::information(self.bit, false)
    }
}
