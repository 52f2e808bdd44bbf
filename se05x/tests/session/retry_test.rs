use std::time::{Duration, Instant};

use se05x::config::TransactionConfig;
use se05x::session::Session;
use se05x::transport::MockTransport;
use se05x::Error;

use crate::common;

const MAX: u32 = 6;

fn session(mock: &MockTransport) -> Session {
    let config = TransactionConfig::default()
        .with_max_attempts(MAX)
        .with_retry_delay(Duration::ZERO);
    Session::new(Box::new(mock.clone()), config)
}

#[test]
fn write_recovers_after_k_failures() {
    for k in 0..MAX as usize {
        let mock = MockTransport::new();
        mock.set_write_failures(k);
        common::queue_block(&mock, 0x00, &common::fixtures::ok_payload());
        let mut s = session(&mock);
        assert_eq!(s.transmit(&[0x00]).unwrap(), vec![0x90, 0x00]);
        assert_eq!(mock.write_attempts(), k + 1);
    }
}

#[test]
fn read_recovers_after_k_failures() {
    let mock = MockTransport::new();
    mock.set_read_failures(MAX as usize - 1);
    common::queue_block(&mock, 0x00, &common::fixtures::ok_payload());
    let mut s = session(&mock);
    s.transmit(&[0x00]).unwrap();
    // MAX - 1 failures and one success for the header, one read for the rest
    assert_eq!(mock.read_attempts(), MAX as usize + 1);
}

#[test]
fn always_failing_bus_returns_last_error() {
    let mock = MockTransport::new();
    mock.set_always_fail(true);
    let mut s = session(&mock);
    let err = s.transmit(&[0x00]).unwrap_err();
    match &err {
        Error::Transport { attempts, .. } => assert_eq!(*attempts, MAX),
        other => panic!("expected Transport, got: {:?}", other),
    }
    assert!(matches!(err.last_attempt(), Error::Bus(m) if m.contains("write")));
    assert_eq!(mock.write_attempts(), MAX as usize);
}

#[test]
fn retry_delay_is_applied() {
    let mock = MockTransport::new();
    mock.set_always_fail(true);
    let config = TransactionConfig::default()
        .with_max_attempts(4)
        .with_retry_delay(Duration::from_millis(3));
    let mut s = Session::new(Box::new(mock.clone()), config);

    let start = Instant::now();
    assert!(s.transmit(&[0x00]).is_err());
    // three pauses between four attempts
    assert!(start.elapsed() >= Duration::from_millis(9));
}
