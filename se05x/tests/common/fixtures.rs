// Captured SE050 responses shared by the integration tests

use hex::FromHex;

/// ATR payload of an SE050 C1 (without the T=1 header and checksum)
pub fn atr_payload() -> Vec<u8> {
    Vec::from_hex(concat!(
        "00a0000003960403e800fe020b03e80801000000006400000a",
        "4a434f5034204154504f"
    ))
    .unwrap()
}

/// ATR as some firmware revisions send it: the same fields followed by
/// eight extra bytes.
pub fn atr_payload_extended() -> Vec<u8> {
    let mut atr = atr_payload();
    atr.extend_from_slice(&Vec::from_hex("0102030405060708").unwrap());
    atr
}

/// Default applet SELECT response (FCI with an 8-byte AID)
pub fn select_default_payload() -> Vec<u8> {
    Vec::from_hex("6f108408a000000151000000a5049f6501ff9000").unwrap()
}

pub fn cplc_payload() -> Vec<u8> {
    Vec::from_hex(concat!(
        "9f7f2a",
        "4790d321470001234567890a0b0c0d0e0f1011",
        "00000000000000000000000000000000000000000000000000",
        "9000"
    ))
    .unwrap()
}

/// Platform identification record for the given OEF id
pub fn platform_id_payload(oef: u16) -> Vec<u8> {
    let mut data = Vec::from_hex("fe2ddf282a00000000").unwrap();
    data.extend_from_slice(&oef.to_be_bytes());
    data.resize(31, 0x00);
    data.extend_from_slice(b"JCOP4 SE050 0300");
    data.extend_from_slice(&[0x90, 0x00]);
    data
}

pub fn ok_payload() -> Vec<u8> {
    vec![0x90, 0x00]
}
