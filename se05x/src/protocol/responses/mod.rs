// se05x/src/protocol/responses/mod.rs

pub mod atr;
pub mod cplc;
/// IoT applet management replies.
pub mod management;
/// Platform identification record.
pub mod platform;
pub mod select;

pub use atr::{Atr, decode_atr};
pub use cplc::{Cplc, decode_cplc};
pub use management::{AppletVersion, decode_free_memory, decode_random, decode_version};
pub use platform::{DeviceInfo, decode_device_info};
pub use select::{SelectResponse, decode_select};

use derive_more::Display;

use crate::constants::SW_SUCCESS;
use crate::{Error, Result};

/// Trailing SW1SW2 of a response APDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[display(fmt = "{:04X}", _0)]
pub struct StatusWord(u16);

impl StatusWord {
    /// 9000
    pub const SUCCESS: Self = Self(SW_SUCCESS);

    /// Wrap a raw SW1SW2 value.
    pub const fn new(sw: u16) -> Self {
        Self(sw)
    }

    /// SW1 in the high byte, SW2 in the low byte.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Whether this is 9000.
    pub fn is_success(&self) -> bool {
        self.0 == SW_SUCCESS
    }
}

/// Split a response APDU into its data field and status word.
pub fn split_status(data: &[u8]) -> Result<(&[u8], StatusWord)> {
    if data.len() < 2 {
        return Err(Error::InvalidLength {
            expected: 2,
            actual: data.len(),
        });
    }
    let (body, sw) = data.split_at(data.len() - 2);
    Ok((body, StatusWord(u16::from_be_bytes([sw[0], sw[1]]))))
}
