// se05x/src/protocol/mod.rs
//! T=1 block layer and the APDUs carried inside it.

/// CRC16 over T=1 blocks.
pub mod checksum;
/// Command APDU encoders.
pub mod commands;
/// Block encoding and reply header decoding.
pub mod frame;
/// Bounds-checked byte readers.
pub mod parser;
/// Protocol control byte.
pub mod pcb;
/// Response APDU decoders.
pub mod responses;
/// I-block sequence number.
pub mod sequence;

pub use checksum::{block_crc, crc16, verify_block};
pub use commands::{Command, MemoryKind};
pub use frame::{Frame, Header};
pub use pcb::{BlockKind, Pcb};
pub use responses::{
    AppletVersion, Atr, Cplc, DeviceInfo, SelectResponse, StatusWord, split_status,
};
pub use sequence::SequenceState;
