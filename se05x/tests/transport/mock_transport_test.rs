use se05x::transport::mock::MockOp;
use se05x::transport::{I2cTransport, MockTransport};

use crate::common;

#[test]
fn mock_transport_write_and_read() {
    let mut m = MockTransport::new();
    m.push_read(vec![0xA5, 0xEF, 0x00]);
    m.write(0, 0x48, None, &[0x5A, 0xCF, 0x00]).unwrap();
    assert_eq!(m.read(0, 0x48, None, 3).unwrap(), vec![0xA5, 0xEF, 0x00]);
    assert_eq!(
        m.ops()[0],
        MockOp::Write {
            bus: 0,
            address: 0x48,
            register: None,
            data: vec![0x5A, 0xCF, 0x00],
        }
    );
}

#[test]
fn boxed_transport_forwards() {
    let m = MockTransport::new();
    let mut boxed: Box<dyn I2cTransport> = Box::new(m.clone());
    boxed.write(2, 0x49, Some(0x01), &[0xFF]).unwrap();
    assert_eq!(
        m.ops(),
        vec![MockOp::Write {
            bus: 2,
            address: 0x49,
            register: Some(0x01),
            data: vec![0xFF],
        }]
    );
}

#[test]
fn session_reads_header_then_rest() {
    let mock = MockTransport::new();
    common::queue_block(&mock, 0x00, &[0x01, 0x02, 0x90, 0x00]);
    let mut se = common::mock_device(&mock).unwrap();
    se.session_mut().transmit(&[0x00, 0xA4, 0x04, 0x00, 0x00]).unwrap();

    let lens: Vec<usize> = mock
        .ops()
        .iter()
        .filter_map(|op| match op {
            MockOp::Read { len, register, .. } => {
                assert_eq!(*register, None);
                Some(*len)
            }
            MockOp::Write { .. } => None,
        })
        .collect();
    assert_eq!(lens, vec![3, 6]);
}

#[test]
fn session_uses_configured_bus_and_address() {
    let mock = MockTransport::new();
    common::queue_block(&mock, 0xE0, &[]);
    let config = common::fast_config().with_bus(3).with_address(0x4A);
    let mut se = se05x::Se05xBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_config(config)
        .build()
        .unwrap();
    se.resynchronize().unwrap();

    for op in mock.ops() {
        match op {
            MockOp::Write { bus, address, .. } | MockOp::Read { bus, address, .. } => {
                assert_eq!((bus, address), (3, 0x4A));
            }
        }
    }
}
