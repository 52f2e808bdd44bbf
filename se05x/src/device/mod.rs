// se05x/src/device/mod.rs

pub mod builder;
pub mod handle;
pub mod report;

pub use builder::Se05xBuilder;
pub use handle::Se05x;
pub use report::InfoReport;
