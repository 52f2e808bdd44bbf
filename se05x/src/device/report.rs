// se05x/src/device/report.rs
//! Full identification sweep of a secure element.

use log::{info, warn};

use crate::device::handle::Se05x;
use crate::protocol::responses::{
    AppletVersion, Atr, Cplc, DeviceInfo, SelectResponse, split_status,
};
use crate::protocol::MemoryKind;
use crate::utils::bytes_to_hex_upper as hex;
use crate::Result;

/// Number of random bytes requested by [`Se05x::info`].
pub const REPORT_RANDOM_LEN: u16 = 64;

/// Everything [`Se05x::info`] learned about the device. The ATR and the
/// trailing IoT applet queries are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InfoReport {
    /// Decoded ATR, `None` if the request failed
    pub atr: Option<Atr>,
    /// AID of the default applet
    pub default_applet: SelectResponse,
    /// Production life cycle data
    pub cplc: Cplc,
    /// Platform identification and variant name
    pub device: DeviceInfo,
    /// Raw SELECT response of the IoT security domain
    pub iot_ssd: Option<Vec<u8>>,
    /// Raw SELECT response of the IoT applet
    pub iot_applet: Option<Vec<u8>>,
    /// IoT applet version
    pub version: Option<AppletVersion>,
    /// Raw extended version response
    pub extended_version: Option<Vec<u8>>,
    /// Raw timestamp response
    pub timestamp: Option<Vec<u8>>,
    /// Free persistent memory in bytes
    pub free_memory: Option<u16>,
    /// `REPORT_RANDOM_LEN` random bytes
    pub random: Option<Vec<u8>>,
}

fn optional<T>(what: &str, r: Result<T>) -> Option<T> {
    match r {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("se05x: {} failed: {}", what, e);
            None
        }
    }
}

fn log_raw(label: &str, raw: &[u8]) {
    info!("se05x: {}: {}", label, hex(raw));
    if let Ok((_, sw)) = split_status(raw) {
        if !sw.is_success() {
            warn!("se05x: {} status {}", label, sw);
        }
    }
}

fn log_atr(atr: &Atr) {
    info!("se05x: ATR ......: {}", hex(atr.raw()));
    info!(
        "se05x:   protocol version {:02X}, vendor {}, BWT {}, IFSC {}",
        atr.protocol_version,
        atr.vendor_id_hex(),
        atr.block_wait_time,
        atr.ifsc
    );
    info!(
        "se05x:   PLID {:02X}, I2C clock max {}, I2C config {:02X}, historical {} ({})",
        atr.physical_layer,
        atr.i2c_max_clock,
        atr.i2c_config,
        hex(&atr.historical_bytes),
        atr.historical_text()
    );
}

impl Se05x {
    /// Run the identification sequence and log every decoded field.
    ///
    /// RESYNCH, soft reset and the ATR are best effort. Default applet
    /// selection, CPLC and platform identification must succeed; the
    /// IoT applet queries after them are recorded as `None` on failure.
    pub fn info(&mut self) -> Result<InfoReport> {
        info!("se05x info");

        match self.resynchronize() {
            Ok(r) => info!("se05x: SYNC .....: {}", hex(&r)),
            Err(e) => warn!("se05x: SYNC .....: {}", e),
        }
        match self.soft_reset() {
            Ok(r) => info!("se05x: RESET ....: {}", hex(&r)),
            Err(e) => warn!("se05x: RESET ....: {}", e),
        }

        let atr = match self.answer_to_reset() {
            Ok(atr) => {
                log_atr(&atr);
                Some(atr)
            }
            Err(e) => {
                warn!("se05x: ATR ......: {}", e);
                None
            }
        };

        let default_applet = self.select_default()?;
        info!("se05x: DEFAULT ..: AID {}", hex(&default_applet.aid));

        let cplc = self.cplc()?;
        info!(
            "se05x: CPLC .....: fabricator {}, IC type {}, OS id {}",
            hex(&cplc.ic_fabricator),
            hex(&cplc.ic_type),
            hex(&cplc.os_id)
        );
        info!(
            "se05x:   OS release date {}, OS release level {}, IC fab date {}",
            hex(&cplc.os_release_date),
            hex(&cplc.os_release_level),
            hex(&cplc.ic_fabrication_date)
        );
        info!(
            "se05x:   IC serial {}, IC batch {}",
            hex(&cplc.ic_serial_number),
            hex(&cplc.ic_batch_id)
        );

        let device = self.device_info()?;
        info!(
            "se05x: INFO .....: OEF id {:04X}, platform build {}, type {}",
            device.oef_id, device.platform_build_id, device.name
        );

        let iot_ssd = optional("IOTSSD", self.select_iot_ssd());
        if let Some(r) = &iot_ssd {
            log_raw("IOTSSD ...", r);
        }
        let iot_applet = optional("IOTAID", self.select_iot_applet());
        if let Some(r) = &iot_applet {
            log_raw("IOTAID ...", r);
        }

        let version = optional("VERSION", self.version());
        if let Some(v) = &version {
            info!(
                "se05x: VERSION ..: {}.{}.{} {}",
                v.major,
                v.minor,
                v.patch,
                hex(&v.extra)
            );
        }
        let extended_version = optional("VERSION-X", self.extended_version());
        if let Some(r) = &extended_version {
            log_raw("VERSION-X", r);
        }
        let timestamp = optional("TIMESTAMP", self.timestamp());
        if let Some(r) = &timestamp {
            log_raw("TIMESTAMP", r);
        }
        let free_memory = optional("FREE MEM", self.free_memory(MemoryKind::Persistent));
        if let Some(m) = free_memory {
            info!("se05x: FREE MEM .: {} bytes", m);
        }
        let random = optional("RANDOM", self.random(REPORT_RANDOM_LEN));
        if let Some(r) = &random {
            info!("se05x: RANDOM ...: {}", hex(r));
        }

        Ok(InfoReport {
            atr,
            default_applet,
            cplc,
            device,
            iot_ssd,
            iot_applet,
            version,
            extended_version,
            timestamp,
            free_memory,
            random,
        })
    }
}
