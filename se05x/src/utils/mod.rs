//! Utilities for se05x: small helpers shared by the protocol, session and
//! report code.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
