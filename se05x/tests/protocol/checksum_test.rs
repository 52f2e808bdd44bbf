use proptest::prelude::*;
use se05x::constants::{CRC_RESIDUE, CRC_SEED};
use se05x::protocol::{block_crc, crc16, verify_block};

use crate::common;

#[test]
fn residue_over_captured_reply() {
    let block = common::response_block(0x00, &[0x90, 0x00]);
    assert_eq!(crc16(&block, CRC_SEED), CRC_RESIDUE);
    assert!(verify_block(&block[..3], &block[3..]));
}

#[test]
fn checksum_is_little_endian_complement() {
    let data = [0x5A, 0xC0, 0x00];
    let crc = !crc16(&data, CRC_SEED);
    assert_eq!(block_crc(&data), [crc as u8, (crc >> 8) as u8]);
}

proptest! {
    #[test]
    fn crc16_is_deterministic(
        data in prop::collection::vec(any::<u8>(), 0..300),
        seed in any::<u16>(),
    ) {
        prop_assert_eq!(crc16(&data, seed), crc16(&data, seed));
    }

    #[test]
    fn crc16_chains_over_splits(
        data in prop::collection::vec(any::<u8>(), 0..128),
        split in any::<prop::sample::Index>(),
    ) {
        let at = if data.is_empty() { 0 } else { split.index(data.len()) };
        let (a, b) = data.split_at(at);
        prop_assert_eq!(crc16(&data, CRC_SEED), crc16(b, crc16(a, CRC_SEED)));
    }

    #[test]
    fn corrupted_reply_fails_check(
        payload in prop::collection::vec(any::<u8>(), 0..=253),
        idx in any::<prop::sample::Index>(),
        xor in 1u8..=255,
    ) {
        let mut block = common::response_block(0x00, &payload);
        let i = idx.index(block.len());
        block[i] ^= xor;
        prop_assert!(!verify_block(&block[..3], &block[3..]));
    }
}
