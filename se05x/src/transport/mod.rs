// se05x/src/transport/mod.rs

/// Raw bus traffic records and sinks.
pub mod diagnostics;
/// Scripted in-memory bus.
pub mod mock;
pub mod traits;

pub use diagnostics::{DiagnosticSink, I2cRecord, LogSink, MemorySink};
pub use mock::MockTransport;
pub use traits::I2cTransport;
