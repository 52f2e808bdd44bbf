// se05x/src/protocol/responses/cplc.rs
//! GlobalPlatform CPLC record.

use crate::protocol::parser;
use crate::Result;

/// Card Production Life Cycle record (GET DATA 9F7F).
///
/// The response starts with the `9F 7F` tag and a one-byte length, so the
/// GlobalPlatform CPLC fields begin at offset 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cplc {
    /// Bytes 3..5
    pub ic_fabricator: [u8; 2],
    /// Bytes 5..7
    pub ic_type: [u8; 2],
    /// Bytes 7..9
    pub os_id: [u8; 2],
    /// Bytes 9..11, BCD encoded `YDDD`
    pub os_release_date: [u8; 2],
    /// Bytes 11..13
    pub os_release_level: [u8; 2],
    /// Bytes 13..15, BCD encoded `YDDD`
    pub ic_fabrication_date: [u8; 2],
    /// Bytes 15..19
    pub ic_serial_number: [u8; 4],
    /// Bytes 19..21
    pub ic_batch_id: [u8; 2],
}

impl Cplc {
    /// Tag, length and every field up to the batch id.
    pub const MIN_LEN: usize = 21;
}

/// Decode a CPLC GET DATA response.
pub fn decode_cplc(data: &[u8]) -> Result<Cplc> {
    parser::ensure_len(data, Cplc::MIN_LEN)?;

    Ok(Cplc {
        ic_fabricator: parser::array_at(data, 3)?,
        ic_type: parser::array_at(data, 5)?,
        os_id: parser::array_at(data, 7)?,
        os_release_date: parser::array_at(data, 9)?,
        os_release_level: parser::array_at(data, 11)?,
        ic_fabrication_date: parser::array_at(data, 13)?,
        ic_serial_number: parser::array_at(data, 15)?,
        ic_batch_id: parser::array_at(data, 19)?,
    })
}
