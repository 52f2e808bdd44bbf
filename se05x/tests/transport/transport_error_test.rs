use se05x::transport::{I2cTransport, MockTransport};
use se05x::Error;

use crate::common;

#[test]
fn read_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.push_read(vec![0xAA]);
    m.set_read_failures(1);

    assert!(matches!(m.read(0, 0x48, None, 1), Err(Error::Bus(_))));
    assert_eq!(m.read(0, 0x48, None, 1).unwrap(), vec![0xAA]);
    assert_eq!(m.read_attempts(), 2);
}

#[test]
fn short_read_is_malformed() {
    let mock = MockTransport::new();
    mock.push_read(vec![0xA5, 0x00]);
    let mut se = common::mock_device(&mock).unwrap();
    assert!(matches!(
        se.session_mut().transmit(&[0x00]),
        Err(Error::MalformedResponse(_))
    ));
}

#[test]
fn corrupted_checksum_reports_received_bytes() {
    let mock = MockTransport::new();
    let mut block = common::response_block(0x00, &[0x90, 0x00]);
    let n = block.len();
    block[n - 1] ^= 0xFF;
    mock.push_read(block[..3].to_vec());
    mock.push_read(block[3..].to_vec());
    let mut se = common::mock_device(&mock).unwrap();

    match se.session_mut().transmit(&[0x00]) {
        Err(Error::Crc { received }) => assert_eq!(received, block[n - 2..].to_vec()),
        other => panic!("expected CRC error, got: {:?}", other),
    }
    // no retransmission request follows
    assert_eq!(mock.writes().len(), 1);
    assert_eq!(se.session().sequence().bit(), 0);
}

#[test]
fn corrupted_payload_is_detected() {
    let mock = MockTransport::new();
    let mut block = common::response_block(0x00, &[0x41, 0x02, 0x12, 0x34, 0x90, 0x00]);
    block[5] ^= 0x01;
    mock.push_read(block[..3].to_vec());
    mock.push_read(block[3..].to_vec());
    let mut se = common::mock_device(&mock).unwrap();
    assert!(matches!(
        se.session_mut().transmit(&[0x00]),
        Err(Error::Crc { .. })
    ));
}

#[test]
fn dead_bus_exhausts_budget() {
    let mock = MockTransport::new();
    mock.set_always_fail(true);
    let mut se = common::mock_device(&mock).unwrap();
    let err = se.answer_to_reset().unwrap_err();
    assert!(matches!(err, Error::Transport { attempts: 3, .. }));
    assert!(err.to_string().contains("3 attempts"));
}
