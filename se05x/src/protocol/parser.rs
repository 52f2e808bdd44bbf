// se05x/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_be_bytes([data[idx], data[idx + 1]]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Copy `N` bytes at `idx` into a fixed array.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let s = slice_at(data, idx, N)?;
    let mut arr = [0u8; N];
    arr.copy_from_slice(s);
    Ok(arr)
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Value of a single-byte-tag TLV at the start of `data`. SE05x applet
/// responses wrap every field this way; lengths use the BER short form or
/// the `81 xx` / `82 xx xx` long forms.
pub fn tlv_value(data: &[u8], tag: u8) -> Result<&[u8]> {
    let actual = byte_at(data, 0)?;
    if actual != tag {
        return Err(Error::MalformedResponse(format!(
            "expected TLV tag {:#04x}, got {:#04x}",
            tag, actual
        )));
    }
    let (len, start) = match byte_at(data, 1)? {
        b if b < 0x80 => (b as usize, 2),
        0x81 => (byte_at(data, 2)? as usize, 3),
        0x82 => (be_u16_at(data, 2)? as usize, 4),
        b => {
            return Err(Error::MalformedResponse(format!(
                "unsupported TLV length byte {:#04x}",
                b
            )));
        }
    };
    slice_at(data, start, len)
}
