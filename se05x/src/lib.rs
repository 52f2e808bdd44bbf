// se05x/src/lib.rs

//! se05x
//!
//! Pure Rust T=1-over-I2C driver for NXP SE05x secure elements.
//!
//! The crate is layered bottom-up: `protocol` holds the block codec,
//! checksum and APDU encoders/decoders, `session` drives one block exchange
//! over an `I2cTransport`, and `device` exposes the queries a host runs
//! against the secure element. Bus backends live outside the crate; anything
//! implementing `transport::I2cTransport` can be plugged in.
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod constants;
/// High-level handle and identification queries.
pub mod device;
/// Crate error type.
pub mod error;
/// Common imports.
pub mod prelude;
pub mod protocol;
/// Block exchange with bounded retry.
pub mod session;
pub mod test_support;
/// Bus abstraction, test double and diagnostics.
pub mod transport;
pub mod utils;

pub use crate::error::*;

pub use prelude::*;
