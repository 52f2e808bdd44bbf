// se05x/src/device/handle.rs
//! The `Se05x` handle and its queries.

use crate::catalog::DeviceCatalog;
use crate::constants::{
    AID_IOT_APPLET, AID_IOT_SSD, PCB_S_ATR, PCB_S_IFS, PCB_S_RESYNCH, PCB_S_SOFT_RESET,
};
use crate::protocol::responses::{self, AppletVersion, Atr, Cplc, DeviceInfo, SelectResponse};
use crate::protocol::{Command, MemoryKind, Pcb};
use crate::session::Session;
use crate::Result;

/// Handle to an SE05x secure element: the APDU query layer on top of a
/// T=1 session.
#[derive(Debug)]
pub struct Se05x {
    session: Session,
    catalog: &'static DeviceCatalog,
}

impl Se05x {
    /// Wrap a session, resolving device names with the built-in catalog.
    pub fn new(session: Session) -> Self {
        Self::with_catalog(session, DeviceCatalog::global())
    }

    /// Wrap a session with a custom catalog.
    pub fn with_catalog(session: Session, catalog: &'static DeviceCatalog) -> Self {
        Self { session, catalog }
    }

    /// The underlying T=1 session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access for sending raw blocks or APDUs.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Give the session back.
    pub fn into_session(self) -> Session {
        self.session
    }

    /// RESYNCH S-block.
    pub fn resynchronize(&mut self) -> Result<Vec<u8>> {
        self.session.exchange(Pcb::new(PCB_S_RESYNCH), &[])
    }

    /// Soft reset S-block.
    pub fn soft_reset(&mut self) -> Result<Vec<u8>> {
        self.session.exchange(Pcb::new(PCB_S_SOFT_RESET), &[])
    }

    /// IFS S-block announcing the largest block the host accepts.
    /// Returns the echoed size byte.
    pub fn set_ifs(&mut self, size: u8) -> Result<Vec<u8>> {
        self.session.exchange(Pcb::new(PCB_S_IFS), &[size])
    }

    /// Request and decode the ATR. Also restarts I-block sequencing.
    pub fn answer_to_reset(&mut self) -> Result<Atr> {
        let raw = self.session.exchange(Pcb::new(PCB_S_ATR), &[])?;
        responses::decode_atr(&raw)
    }

    /// Send a command APDU and return the raw response APDU.
    pub fn execute(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        let apdu = cmd.encode()?;
        self.session.transmit(&apdu)
    }

    /// SELECT by AID; returns the raw response APDU.
    pub fn select(&mut self, aid: &[u8]) -> Result<Vec<u8>> {
        self.execute(&Command::Select { aid: aid.to_vec() })
    }

    /// SELECT with an empty AID, decoding the default applet's AID.
    pub fn select_default(&mut self) -> Result<SelectResponse> {
        let raw = self.select(&[])?;
        responses::decode_select(&raw)
    }

    /// SELECT the IoT supplementary security domain.
    pub fn select_iot_ssd(&mut self) -> Result<Vec<u8>> {
        self.select(&AID_IOT_SSD)
    }

    /// SELECT the IoT applet.
    pub fn select_iot_applet(&mut self) -> Result<Vec<u8>> {
        self.select(&AID_IOT_APPLET)
    }

    /// GET DATA for the Card Production Life Cycle record.
    pub fn cplc(&mut self) -> Result<Cplc> {
        let raw = self.execute(&Command::GetCplc)?;
        responses::decode_cplc(&raw)
    }

    /// Platform identification, with the variant name resolved through the
    /// catalog. An unlisted OEF id yields `DeviceName::Unknown`.
    pub fn device_info(&mut self) -> Result<DeviceInfo> {
        let raw = self.execute(&Command::GetPlatformId)?;
        responses::decode_device_info(&raw, self.catalog)
    }

    /// IoT applet version. The applet must be selected.
    pub fn version(&mut self) -> Result<AppletVersion> {
        let raw = self.execute(&Command::GetVersion)?;
        responses::decode_version(&raw)
    }

    /// Raw extended version response of the IoT applet.
    pub fn extended_version(&mut self) -> Result<Vec<u8>> {
        self.execute(&Command::GetVersionExt)
    }

    /// Raw timestamp response of the IoT applet.
    pub fn timestamp(&mut self) -> Result<Vec<u8>> {
        self.execute(&Command::GetTimestamp)
    }

    /// Free bytes in one memory pool.
    pub fn free_memory(&mut self, kind: MemoryKind) -> Result<u16> {
        let raw = self.execute(&Command::GetFreeMemory { kind })?;
        responses::decode_free_memory(&raw)
    }

    /// `len` random bytes from the applet's generator.
    pub fn random(&mut self, len: u16) -> Result<Vec<u8>> {
        let raw = self.execute(&Command::GetRandom { len })?;
        responses::decode_random(&raw)
    }
}
