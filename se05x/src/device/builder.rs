// se05x/src/device/builder.rs
//! Builder for `Se05x`.

use crate::catalog::DeviceCatalog;
use crate::config::TransactionConfig;
use crate::device::handle::Se05x;
use crate::session::Session;
use crate::transport::{DiagnosticSink, I2cTransport};
use crate::{Error, Result};

/// Helper to construct an `Se05x` handle with optional configuration.
#[derive(Default)]
pub struct Se05xBuilder {
    transport: Option<Box<dyn I2cTransport>>,
    config: TransactionConfig,
    sink: Option<Box<dyn DiagnosticSink>>,
    catalog: Option<&'static DeviceCatalog>,
}

impl Se05xBuilder {
    /// Builder with the default configuration and no transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the bus backend (e.g. a Linux i2c-dev adapter or MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn I2cTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Bus location and retry budget.
    pub fn with_config(mut self, config: TransactionConfig) -> Self {
        self.config = config;
        self
    }

    /// Receive every raw bus operation.
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Resolve device names with a custom catalog.
    pub fn with_catalog(mut self, catalog: &'static DeviceCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Consume the builder and return a device handle.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build(self) -> Result<Se05x> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        let mut session = Session::new(transport, self.config);

        #[cfg(feature = "diagnostics")]
        let sink = self
            .sink
            .or_else(|| Some(Box::new(crate::transport::LogSink) as Box<dyn DiagnosticSink>));
        #[cfg(not(feature = "diagnostics"))]
        let sink = self.sink;

        if let Some(sink) = sink {
            session = session.with_sink(sink);
        }

        Ok(Se05x::with_catalog(
            session,
            self.catalog.unwrap_or_else(DeviceCatalog::global),
        ))
    }
}
