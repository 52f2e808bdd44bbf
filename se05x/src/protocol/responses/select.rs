// se05x/src/protocol/responses/select.rs
//! Default applet SELECT response.

use crate::protocol::parser;
use crate::Result;

/// Response to SELECT of the default applet: an FCI template whose AID
/// length sits at byte 3 and the AID right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectResponse {
    /// AID of the default applet, empty if none is reported
    pub aid: Vec<u8>,
}

/// Extract the AID from a default applet SELECT response.
pub fn decode_select(data: &[u8]) -> Result<SelectResponse> {
    let len = parser::byte_at(data, 3)? as usize;
    let aid = parser::slice_at(data, 4, len)?;
    Ok(SelectResponse { aid: aid.to_vec() })
}
