// se05x/src/protocol/frame.rs

use crate::constants::{CRC_LEN, HEADER_LEN, IFSC, NAD_HOST};
use crate::protocol::checksum::block_crc;
use crate::protocol::pcb::Pcb;
use crate::{Error, Result};

/// T=1 block as sent to the secure element.
/// Format: [NAD(1)] [PCB(1)] [LEN(1)] [INF(LEN)] [CRC(2), little endian]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Always `NAD_HOST` for encoded frames
    pub nad: u8,
    /// Block type, sequence and chaining bits
    pub pcb: Pcb,
    /// Information field, shorter than IFSC
    pub payload: Vec<u8>,
    /// Complemented CRC, already in wire order when written little endian
    pub crc: u16,
}

impl Frame {
    /// Build a host block around `payload`. Fails before touching the bus if
    /// the payload does not fit into one information field.
    pub fn encode(pcb: Pcb, payload: &[u8]) -> Result<Self> {
        if payload.len() >= IFSC {
            return Err(Error::FrameTooLong {
                len: payload.len(),
                max: IFSC,
            });
        }

        let mut head = Vec::with_capacity(HEADER_LEN + payload.len());
        head.extend_from_slice(&[NAD_HOST, pcb.as_u8(), payload.len() as u8]);
        head.extend_from_slice(payload);

        Ok(Self {
            nad: NAD_HOST,
            pcb,
            payload: payload.to_vec(),
            crc: u16::from_le_bytes(block_crc(&head)),
        })
    }

    /// Value of the LEN byte.
    pub fn len(&self) -> u8 {
        self.payload.len() as u8
    }

    /// Whether the information field is empty (S-block requests).
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Wire bytes, checksum included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.payload.len() + CRC_LEN);
        out.push(self.nad);
        out.push(self.pcb.as_u8());
        out.push(self.len());
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.crc.to_le_bytes());
        out
    }
}

/// First three bytes of a block read back from the secure element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Expected to be `NAD_DEVICE`
    pub nad: u8,
    /// Block type of the reply
    pub pcb: Pcb,
    /// Declared payload length
    pub len: u8,
}

impl Header {
    /// Parse a block header. The checksum covers bytes that are read
    /// afterwards, so it is not checked here.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::MalformedResponse(format!(
                "short block header: {} bytes",
                bytes.len()
            )));
        }
        Ok(Self {
            nad: bytes[0],
            pcb: Pcb::new(bytes[1]),
            len: bytes[2],
        })
    }

    /// Bytes still to read after the header: payload plus checksum.
    pub fn remaining(&self) -> usize {
        self.len as usize + CRC_LEN
    }
}
