// se05x/src/protocol/checksum.rs

use crate::constants::{CRC_POLY, CRC_RESIDUE, CRC_SEED};

/// Bit-serial CRC16 with the reversed CCITT polynomial.
///
/// `seed` is the running value, so a CRC over `a ++ b` equals
/// `crc16(b, crc16(a, seed))`.
pub fn crc16(data: &[u8], seed: u16) -> u16 {
    data.iter().fold(seed, |mut crc, &b| {
        crc ^= u16::from(b);
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ CRC_POLY;
            } else {
                crc >>= 1;
            }
        }
        crc
    })
}

/// Checksum bytes to append to an outbound block: complemented, low byte first.
pub fn block_crc(block: &[u8]) -> [u8; 2] {
    (!crc16(block, CRC_SEED)).to_le_bytes()
}

/// Validate an inbound block split across two reads. `header` is the first
/// read, `rest` is the payload followed by its two checksum bytes.
pub fn verify_block(header: &[u8], rest: &[u8]) -> bool {
    crc16(rest, crc16(header, CRC_SEED)) == CRC_RESIDUE
}
