// se05x/src/protocol/commands/select.rs

use super::short_apdu;
use crate::Result;

/// Interindustry class byte
pub const CLA_ISO: u8 = 0x00;
/// SELECT instruction
pub const INS_SELECT: u8 = 0xA4;
/// Select by DF name (AID)
pub const P1_BY_NAME: u8 = 0x04;
/// First or only occurrence
pub const P2_FIRST: u8 = 0x00;

/// Encode SELECT by AID. An empty AID selects the default applet.
pub fn encode_select(aid: &[u8]) -> Result<Vec<u8>> {
    short_apdu(CLA_ISO, INS_SELECT, P1_BY_NAME, P2_FIRST, aid)
}
