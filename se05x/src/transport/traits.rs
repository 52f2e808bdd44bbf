// se05x/src/transport/traits.rs
//! The bus capability the driver needs.

use crate::Result;

/// Raw I2C access. Implementations wrap a concrete bus (Linux i2c-dev,
/// a bare-metal controller, a test double); the protocol code never knows
/// which one it talks to.
///
/// `register = None` means no register-select byte is sent before the data.
/// The SE05x has no register map, so the T=1 layer always passes `None`.
pub trait I2cTransport {
    /// Read exactly `len` bytes from the device at `address`.
    fn read(&mut self, bus: u8, address: u8, register: Option<u8>, len: usize) -> Result<Vec<u8>>;

    /// Write `data` to the device at `address`.
    fn write(&mut self, bus: u8, address: u8, register: Option<u8>, data: &[u8]) -> Result<()>;
}

impl<T: I2cTransport + ?Sized> I2cTransport for Box<T> {
    fn read(&mut self, bus: u8, address: u8, register: Option<u8>, len: usize) -> Result<Vec<u8>> {
        (**self).read(bus, address, register, len)
    }

    fn write(&mut self, bus: u8, address: u8, register: Option<u8>, data: &[u8]) -> Result<()> {
        (**self).write(bus, address, register, data)
    }
}
