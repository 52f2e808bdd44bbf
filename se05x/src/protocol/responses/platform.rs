// se05x/src/protocol/responses/platform.rs

use crate::catalog::{DeviceCatalog, DeviceName};
use crate::protocol::parser;
use crate::Result;

/// Platform identification (GET DATA 00FE / DF28), see NXP AN13013.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceInfo {
    /// OEF identifier naming the SE05x variant and its configuration
    pub oef_id: u16,
    /// Bytes 31..47, ASCII
    pub platform_build_id: String,
    /// Variant name resolved from `oef_id`
    pub name: DeviceName,
}

impl DeviceInfo {
    const OEF_OFFSET: usize = 9;
    const BUILD_ID_OFFSET: usize = 31;
    const BUILD_ID_LEN: usize = 16;
    /// Shortest record that holds the build id.
    pub const MIN_LEN: usize = Self::BUILD_ID_OFFSET + Self::BUILD_ID_LEN;
}

/// Decode the platform identification record and resolve the device name.
pub fn decode_device_info(data: &[u8], catalog: &DeviceCatalog) -> Result<DeviceInfo> {
    parser::ensure_len(data, DeviceInfo::MIN_LEN)?;

    let oef_id = parser::be_u16_at(data, DeviceInfo::OEF_OFFSET)?;
    let build = parser::slice_at(data, DeviceInfo::BUILD_ID_OFFSET, DeviceInfo::BUILD_ID_LEN)?;

    Ok(DeviceInfo {
        oef_id,
        platform_build_id: String::from_utf8_lossy(build).into_owned(),
        name: catalog.lookup(oef_id),
    })
}
