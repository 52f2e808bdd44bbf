// se05x/src/protocol/responses/management.rs

use crate::protocol::commands::management::TAG_1;
use crate::protocol::parser;
use crate::{Error, Result};

/// IoT applet version from `GetVersion`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AppletVersion {
    /// Major version
    pub major: u8,
    /// Minor version
    pub minor: u8,
    /// Patch level
    pub patch: u8,
    /// Remaining bytes: applet configuration and secure box version
    pub extra: Vec<u8>,
}

/// Decode the `TAG_1` value of `GetVersion`: major, minor, patch, then the rest.
pub fn decode_version(data: &[u8]) -> Result<AppletVersion> {
    let v = parser::tlv_value(data, TAG_1)?;
    parser::ensure_len(v, 3)?;
    Ok(AppletVersion {
        major: v[0],
        minor: v[1],
        patch: v[2],
        extra: v[3..].to_vec(),
    })
}

/// Free bytes reported by `GetFreeMemory`.
pub fn decode_free_memory(data: &[u8]) -> Result<u16> {
    let v = parser::tlv_value(data, TAG_1)?;
    if v.len() != 2 {
        return Err(Error::InvalidLength {
            expected: 2,
            actual: v.len(),
        });
    }
    parser::be_u16_at(v, 0)
}

/// Random bytes returned by `GetRandom`.
pub fn decode_random(data: &[u8]) -> Result<Vec<u8>> {
    parser::tlv_value(data, TAG_1).map(<[u8]>::to_vec)
}
