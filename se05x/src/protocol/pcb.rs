// se05x/src/protocol/pcb.rs

use derive_more::Display;

use crate::constants::PCB_S_ATR;

/// Block type encoded in the two most significant PCB bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BlockKind {
    /// Information block: `0b0N_M_xxxxx`
    #[display(fmt = "I-block")]
    Information,
    /// Receive-ready block: `0b10_xxxxxx`
    #[display(fmt = "R-block")]
    ReceiveReady,
    /// Supervisory block: `0b11_xxxxxx`
    #[display(fmt = "S-block")]
    Supervisory,
}

/// Protocol control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:#04x}", _0)]
pub struct Pcb(u8);

impl Pcb {
    const SEQUENCE_BIT: u8 = 1 << 6;
    const CHAIN_BIT: u8 = 1 << 5;

    /// Wrap a raw PCB byte.
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// I-block PCB for the given sequence number and chaining flag.
    pub const fn information(sequence: u8, chain: bool) -> Self {
        let mut raw = (sequence & 1) << 6;
        if chain {
            raw |= Self::CHAIN_BIT;
        }
        Self(raw)
    }

    /// The raw byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Classify by the two most significant bits.
    pub fn kind(&self) -> BlockKind {
        if self.0 & 0x80 == 0 {
            BlockKind::Information
        } else if self.0 & 0xC0 == 0x80 {
            BlockKind::ReceiveReady
        } else {
            BlockKind::Supervisory
        }
    }

    /// Whether this is an I-block.
    pub fn is_information(&self) -> bool {
        self.kind() == BlockKind::Information
    }

    /// Sequence number of an I-block. Meaningless for R/S-blocks.
    pub fn sequence(&self) -> u8 {
        (self.0 & Self::SEQUENCE_BIT) >> 6
    }

    /// More-data bit of an I-block.
    pub fn is_chained(&self) -> bool {
        self.is_information() && self.0 & Self::CHAIN_BIT != 0
    }

    /// Whether this is the ATR request, which restarts sequencing.
    pub fn is_atr_request(&self) -> bool {
        self.0 == PCB_S_ATR
    }
}

impl From<u8> for Pcb {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}
