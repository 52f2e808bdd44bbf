// se05x/src/protocol/commands/management.rs

use super::short_apdu;
use crate::Result;

/// Class byte of IoT applet commands
pub const CLA_SE05X: u8 = 0x80;
/// Management instruction
pub const INS_MGMT: u8 = 0x04;
/// P1 of every management command used here
pub const P1_DEFAULT: u8 = 0x00;

/// Version
pub const P2_VERSION: u8 = 0x20;
/// Extended version
pub const P2_VERSION_EXT: u8 = 0x21;
/// Free memory
pub const P2_MEMORY: u8 = 0x22;
/// Timestamp
pub const P2_TIME: u8 = 0x3D;
/// Random bytes
pub const P2_RANDOM: u8 = 0x49;

/// First TLV tag of an applet command body
pub const TAG_1: u8 = 0x41;

/// Memory pool queried by `GetFreeMemory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryKind {
    /// Non-volatile object storage
    Persistent = 0x01,
    /// Transient memory cleared on reset
    TransientReset = 0x02,
    /// Transient memory cleared on deselect
    TransientDeselect = 0x03,
}

/// Encode an applet management command with an already-built TLV body.
pub fn encode_management(p2: u8, body: &[u8]) -> Result<Vec<u8>> {
    short_apdu(CLA_SE05X, INS_MGMT, P1_DEFAULT, p2, body)
}

/// Encode `GetFreeMemory` for one memory pool.
pub fn encode_free_memory(kind: MemoryKind) -> Result<Vec<u8>> {
    encode_management(P2_MEMORY, &[TAG_1, 0x01, kind as u8])
}

/// Encode `GetRandom` for `len` bytes.
pub fn encode_random(len: u16) -> Result<Vec<u8>> {
    let [hi, lo] = len.to_be_bytes();
    encode_management(P2_RANDOM, &[TAG_1, 0x02, hi, lo])
}
