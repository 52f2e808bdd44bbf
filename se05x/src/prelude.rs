// se05x/src/prelude.rs

pub use crate::catalog::{DeviceCatalog, DeviceName};
pub use crate::config::TransactionConfig;
pub use crate::device::{InfoReport, Se05x, Se05xBuilder};
pub use crate::protocol::{
    AppletVersion, Atr, Command, Cplc, DeviceInfo, MemoryKind, Pcb, SelectResponse, StatusWord,
};
pub use crate::session::Session;
pub use crate::transport::{DiagnosticSink, I2cRecord, I2cTransport, LogSink};
pub use crate::{Error, Result};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_upper, default_retry_delay, ms};
