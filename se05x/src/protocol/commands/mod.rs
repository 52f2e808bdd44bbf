// se05x/src/protocol/commands/mod.rs

/// GET DATA (CLA 80, INS CA).
pub mod get_data;
/// IoT applet management commands.
pub mod management;
/// ISO SELECT.
pub mod select;

pub use get_data::encode_get_data;
pub use management::{MemoryKind, encode_free_memory, encode_management, encode_random};
pub use select::encode_select;

use crate::{Error, Result};

/// Assemble a short (one-byte Lc) command APDU. An empty body still carries
/// the length byte, which the SE05x reads as Le = 0 for GET DATA.
pub(crate) fn short_apdu(cla: u8, ins: u8, p1: u8, p2: u8, data: &[u8]) -> Result<Vec<u8>> {
    if data.len() > u8::MAX as usize {
        return Err(Error::InvalidLength {
            expected: u8::MAX as usize,
            actual: data.len(),
        });
    }
    let mut buf = Vec::with_capacity(5 + data.len());
    buf.extend_from_slice(&[cla, ins, p1, p2, data.len() as u8]);
    buf.extend_from_slice(data);
    Ok(buf)
}

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// SELECT by AID; empty selects the default applet
    Select {
        /// Applet identifier
        aid: Vec<u8>,
    },
    /// GET DATA 9F7F
    GetCplc,
    /// GET DATA 00FE filtered to DF28
    GetPlatformId,
    /// Applet version
    GetVersion,
    /// Applet version with build details
    GetVersionExt,
    /// Applet timestamp
    GetTimestamp,
    /// Free bytes of one memory pool
    GetFreeMemory {
        /// Pool to query
        kind: MemoryKind,
    },
    /// Random bytes
    GetRandom {
        /// Number of bytes requested
        len: u16,
    },
}

impl Command {
    /// Encode the command into the APDU carried by an I-block.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::Select { aid } => encode_select(aid),
            Self::GetCplc => encode_get_data(get_data::TAG_CPLC, &[]),
            Self::GetPlatformId => {
                encode_get_data(get_data::TAG_PROPRIETARY, &get_data::TAG_PLATFORM_ID)
            }
            Self::GetVersion => encode_management(management::P2_VERSION, &[]),
            Self::GetVersionExt => encode_management(management::P2_VERSION_EXT, &[]),
            Self::GetTimestamp => encode_management(management::P2_TIME, &[]),
            Self::GetFreeMemory { kind } => encode_free_memory(*kind),
            Self::GetRandom { len } => encode_random(*len),
        }
    }
}
