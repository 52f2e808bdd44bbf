// se05x/src/session/engine.rs
//! The T=1 exchange itself.

use std::fmt;

use log::{debug, warn};

use crate::config::TransactionConfig;
use crate::constants::{HEADER_LEN, NAD_DEVICE, PCB_S_WTX};
use crate::protocol::{BlockKind, Frame, Header, Pcb, SequenceState, verify_block};
use crate::session::retry::with_retry;
use crate::transport::{DiagnosticSink, I2cRecord, I2cTransport};
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// One T=1 conversation with a secure element.
///
/// Owns the transport and the I-block sequence number. Every call blocks
/// until the write/read round trip, retries included, is finished.
///
/// Multi-block chaining, WTX replies and R-block retransmission are not
/// implemented: such responses are logged and then handled as a single
/// ordinary block.
pub struct Session {
    transport: Box<dyn I2cTransport>,
    config: TransactionConfig,
    sequence: SequenceState,
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("sequence", &self.sequence)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl Session {
    /// Session over `transport`, starting at sequence 0 with no sink.
    pub fn new(transport: Box<dyn I2cTransport>, config: TransactionConfig) -> Self {
        Self {
            transport,
            config,
            sequence: SequenceState::new(),
            sink: None,
        }
    }

    /// Attach a sink that receives every successful raw read and write.
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Bus location and retry budget.
    pub fn config(&self) -> &TransactionConfig {
        &self.config
    }

    /// Current I-block sequence state.
    pub fn sequence(&self) -> SequenceState {
        self.sequence
    }

    /// Send one block and return the payload of the reply.
    ///
    /// Sending the ATR request resets the sequence number first; a
    /// successful I-block exchange advances it. Only the individual bus
    /// operations are retried; a bad checksum is returned to the caller.
    pub fn exchange(&mut self, pcb: Pcb, payload: &[u8]) -> Result<Vec<u8>> {
        if pcb.is_atr_request() {
            self.sequence.reset();
        }

        let frame = Frame::encode(pcb, payload)?;
        let bytes = frame.to_bytes();
        debug!("T=1 -> {}", bytes_to_hex(&bytes));
        self.write(&bytes)?;

        let head = self.read_exact(HEADER_LEN)?;
        let header = Header::decode(&head)?;
        self.check_header(&header);

        let rest = self.read_exact(header.remaining())?;
        debug!("T=1 <- {}{}", bytes_to_hex(&head), bytes_to_hex(&rest));

        if !verify_block(&head, &rest) {
            return Err(Error::Crc {
                received: rest[header.len as usize..].to_vec(),
            });
        }

        if pcb.is_information() {
            self.sequence.toggle();
        }

        let mut out = rest;
        out.truncate(header.len as usize);
        Ok(out)
    }

    /// Send an APDU in a single, unchained I-block.
    pub fn transmit(&mut self, apdu: &[u8]) -> Result<Vec<u8>> {
        let pcb = self.sequence.next_information_pcb();
        self.exchange(pcb, apdu)
    }

    fn check_header(&self, header: &Header) {
        if header.nad != NAD_DEVICE {
            warn!("unexpected response NAD {:#04x}", header.nad);
        }
        match header.pcb.kind() {
            BlockKind::ReceiveReady => {
                warn!("R-block {} received, retransmission not supported", header.pcb);
            }
            BlockKind::Information if header.pcb.is_chained() => {
                warn!("chained I-block {} received, reassembly not supported", header.pcb);
            }
            BlockKind::Supervisory if header.pcb.as_u8() == PCB_S_WTX => {
                warn!("WTX request received, not answered");
            }
            _ => {}
        }
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        let TransactionConfig { bus, address, .. } = self.config;
        let transport = &mut self.transport;
        with_retry(&self.config, "i2c write", || {
            transport.write(bus, address, None, data)
        })?;
        self.trace(I2cRecord::Write {
            address,
            register: None,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn read_exact(&mut self, len: usize) -> Result<Vec<u8>> {
        let TransactionConfig { bus, address, .. } = self.config;
        let transport = &mut self.transport;
        let data = with_retry(&self.config, "i2c read", || {
            transport.read(bus, address, None, len)
        })?;
        self.trace(I2cRecord::Read {
            address,
            register: None,
            data: data.clone(),
        });
        if data.len() != len {
            return Err(Error::MalformedResponse(format!(
                "expected {} bytes from bus, got {}",
                len,
                data.len()
            )));
        }
        Ok(data)
    }

    fn trace(&self, record: I2cRecord) {
        if let Some(sink) = &self.sink {
            sink.record(&record);
        }
    }
}
