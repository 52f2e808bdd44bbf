// se05x/src/session/mod.rs

pub mod engine;
pub mod retry;

pub use engine::Session;
pub use retry::with_retry;
