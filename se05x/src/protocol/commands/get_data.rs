// se05x/src/protocol/commands/get_data.rs

use super::short_apdu;
use crate::Result;

/// Proprietary class byte
pub const CLA_PROPRIETARY: u8 = 0x80;
/// GET DATA instruction
pub const INS_GET_DATA: u8 = 0xCA;

/// Card Production Life Cycle data
pub const TAG_CPLC: u16 = 0x9F7F;
/// Proprietary identification data, filtered by the tag list in the body
pub const TAG_PROPRIETARY: u16 = 0x00FE;
/// Platform identification record inside `TAG_PROPRIETARY`
pub const TAG_PLATFORM_ID: [u8; 2] = [0xDF, 0x28];

/// Encode GET DATA for a two-byte tag carried in P1/P2.
pub fn encode_get_data(tag: u16, data: &[u8]) -> Result<Vec<u8>> {
    let [p1, p2] = tag.to_be_bytes();
    short_apdu(CLA_PROPRIETARY, INS_GET_DATA, p1, p2, data)
}
