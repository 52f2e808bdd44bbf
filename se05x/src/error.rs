// se05x/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// The builder was asked for a handle without a bus to talk over.
    #[error("device not found")]
    DeviceNotFound,

    /// A single failed bus operation as reported by an `I2cTransport`.
    #[error("i2c bus error: {0}")]
    Bus(String),

    /// Every attempt within the retry budget failed.
    #[error("transport error after {attempts} attempts: {source}")]
    Transport {
        /// Attempts made before giving up
        attempts: u32,
        /// Error of the last attempt
        source: Box<Error>,
    },

    /// The APDU does not fit into one information field.
    #[error("data field exceeds IFSC {len}/{max}")]
    FrameTooLong {
        /// Payload length that was requested
        len: usize,
        /// Information field size; payloads must stay below it
        max: usize,
    },

    /// Reply checksum did not match.
    #[error("CRC error: {}", crate::utils::bytes_to_hex_upper(.received))]
    Crc {
        /// The two checksum bytes as read from the bus
        received: Vec<u8>,
    },

    /// A reply that could not be parsed at all.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A decoder ran past the end of the data.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Minimum length needed
        expected: usize,
        /// Length actually available
        actual: usize,
    },
}

impl Error {
    /// The innermost bus error when this error came out of the retry loop.
    pub fn last_attempt(&self) -> &Error {
        match self {
            Self::Transport { source, .. } => source.last_attempt(),
            other => other,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
