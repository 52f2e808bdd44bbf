// se05x/src/protocol/responses/atr.rs
//! Answer To Reset.

use crate::protocol::parser;
use crate::utils::bytes_to_hex_upper;
use crate::Result;

/// Answer To Reset as returned by the SE05x for an ATR S-block.
///
/// Layout (UM11225 section 3.1):
/// pver(1) + vid(5) + dllp_len(1) + bwt(2) + ifsc(2) + plid(1) +
/// plp_len(1) + mcf(2) + config(1) + ... + historical bytes at 25..35
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Atr {
    /// Byte 0
    pub protocol_version: u8,
    /// Bytes 1..6, `A000000396` for NXP
    pub vendor_id: [u8; 5],
    /// Block waiting time in ms
    pub block_wait_time: u16,
    /// Largest information field the device accepts
    pub ifsc: u16,
    /// Physical layer id, 2 = I2C
    pub physical_layer: u8,
    /// Maximum I2C clock in kHz
    pub i2c_max_clock: u16,
    /// I2C configuration flags
    pub i2c_config: u8,
    /// Bytes 25..35, usually printable
    pub historical_bytes: [u8; 10],
    raw: Vec<u8>,
}

impl Atr {
    const HISTORICAL_OFFSET: usize = 25;
    /// Shortest record that holds every decoded field.
    pub const MIN_LEN: usize = Self::HISTORICAL_OFFSET + 10;

    /// The undecoded record, trailing bytes included.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Historical bytes as text; the SE05x puts an ASCII product tag here.
    pub fn historical_text(&self) -> String {
        String::from_utf8_lossy(&self.historical_bytes).into_owned()
    }

    /// Vendor id in datasheet notation.
    pub fn vendor_id_hex(&self) -> String {
        bytes_to_hex_upper(&self.vendor_id)
    }
}

/// Decode the payload of the ATR S-block response.
pub fn decode_atr(data: &[u8]) -> Result<Atr> {
    parser::ensure_len(data, Atr::MIN_LEN)?;

    Ok(Atr {
        protocol_version: parser::byte_at(data, 0)?,
        vendor_id: parser::array_at(data, 1)?,
        block_wait_time: parser::be_u16_at(data, 7)?,
        ifsc: parser::be_u16_at(data, 9)?,
        physical_layer: parser::byte_at(data, 11)?,
        i2c_max_clock: parser::be_u16_at(data, 13)?,
        i2c_config: parser::byte_at(data, 15)?,
        historical_bytes: parser::array_at(data, Atr::HISTORICAL_OFFSET)?,
        raw: data.to_vec(),
    })
}
