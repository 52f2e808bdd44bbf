// se05x/src/constants.rs
//! Common protocol constants used across the crate

/// Node address byte for host -> secure element blocks
pub const NAD_HOST: u8 = 0x5A;

/// Node address byte the secure element uses for its replies
pub const NAD_DEVICE: u8 = 0xA5;

/// Information field size (card). Payloads must be strictly shorter.
pub const IFSC: usize = 254;

/// Block header length: NAD + PCB + LEN
pub const HEADER_LEN: usize = 3;

/// Trailing checksum length
pub const CRC_LEN: usize = 2;

/// Seed for every CRC run over a block
pub const CRC_SEED: u16 = 0xFFFF;

/// Reversed CCITT polynomial (x^16 + x^12 + x^5 + 1)
pub const CRC_POLY: u16 = 0x8408;

/// Residue left by running the CRC over a block including its own
/// complemented, little-endian checksum.
pub const CRC_RESIDUE: u16 = 0xF0B8;

/// RESYNCH request (see NXP UM11225 for the S-block set)
pub const PCB_S_RESYNCH: u8 = 0xC0;
/// IFS request; the one-byte payload is the host's receive size
pub const PCB_S_IFS: u8 = 0xC1;
/// WTX request, sent by the secure element only
pub const PCB_S_WTX: u8 = 0xC3;
/// Soft reset request
pub const PCB_S_SOFT_RESET: u8 = 0xC6;
/// ATR request
pub const PCB_S_ATR: u8 = 0xCF;

/// Default I2C bus number
pub const DEFAULT_BUS: u8 = 0;
/// Default 7-bit address of the SE050
pub const DEFAULT_ADDRESS: u8 = 0x48;

/// Default number of attempts for each bus read/write
pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

/// Status word returned on success
pub const SW_SUCCESS: u16 = 0x9000;

/// GlobalPlatform IoT supplementary security domain
pub const AID_IOT_SSD: [u8; 11] = [
    0xD2, 0x76, 0x00, 0x00, 0x85, 0x30, 0x4A, 0x43, 0x4F, 0x90, 0x03,
];

/// SE05x IoT applet
pub const AID_IOT_APPLET: [u8; 16] = [
    0xA0, 0x00, 0x00, 0x03, 0x96, 0x54, 0x53, 0x00, 0x00, 0x00, 0x01, 0x03, 0x00, 0x00, 0x00,
    0x00,
];
