use se05x::prelude::*;
use se05x::transport::MockTransport;

use crate::common::{self, fixtures};

#[test]
fn atr_from_fresh_session() {
    common::init_logging();
    let mock = MockTransport::new();
    common::queue_block(&mock, 0xEF, &fixtures::atr_payload());
    let mut se = common::mock_device(&mock).unwrap();

    let atr = se.answer_to_reset().unwrap();
    assert_eq!(atr.protocol_version, 0x00);
    assert_eq!(atr.vendor_id, [0xA0, 0x00, 0x00, 0x03, 0x96]);
    assert_eq!(atr.vendor_id_hex(), "A000000396");
    assert_eq!(atr.block_wait_time, 1000);
    assert_eq!(atr.ifsc, 254);
    assert_eq!(atr.physical_layer, 0x02);
    assert_eq!(atr.i2c_max_clock, 1000);
    assert_eq!(atr.i2c_config, 0x08);
    assert_eq!(atr.historical_text(), "JCOP4 ATPO");
    assert_eq!(atr.raw(), fixtures::atr_payload().as_slice());

    assert_eq!(mock.writes(), vec![vec![0x5A, 0xCF, 0x00, 0x37, 0x7F]]);
}

#[test]
fn atr_longer_than_fixed_fields() {
    let mock = MockTransport::new();
    let payload = fixtures::atr_payload_extended();
    assert_eq!(payload.len(), 43);
    common::queue_block(&mock, 0xEF, &payload);
    let mut se = common::mock_device(&mock).unwrap();

    let atr = se.answer_to_reset().unwrap();
    assert_eq!(atr.vendor_id_hex(), "A000000396");
    assert_eq!(atr.block_wait_time, 1000);
    assert_eq!(atr.ifsc, 254);
    assert_eq!(atr.physical_layer, 0x02);
    assert_eq!(atr.i2c_max_clock, 1000);
    assert_eq!(atr.i2c_config, 0x08);
    assert_eq!(atr.historical_text(), "JCOP4 ATPO");
    assert_eq!(atr.raw().len(), 43);
    assert_eq!(&atr.raw()[35..], &[1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn select_default_extracts_aid() {
    let mock = MockTransport::new();
    common::queue_block(&mock, 0x00, &fixtures::select_default_payload());
    let mut se = common::mock_device(&mock).unwrap();

    let sel = se.select_default().unwrap();
    assert_eq!(sel.aid, vec![0xA0, 0x00, 0x00, 0x01, 0x51, 0x00, 0x00, 0x00]);

    let sent = &mock.writes()[0];
    assert_eq!(&sent[..3], &[0x5A, 0x00, 0x05]);
    assert_eq!(&sent[3..8], &[0x00, 0xA4, 0x04, 0x00, 0x00]);
}

#[test]
fn cplc_fields() {
    let mock = MockTransport::new();
    common::queue_block(&mock, 0x00, &fixtures::cplc_payload());
    let mut se = common::mock_device(&mock).unwrap();

    let cplc = se.cplc().unwrap();
    assert_eq!(cplc.ic_fabricator, [0x47, 0x90]);
    assert_eq!(cplc.ic_type, [0xD3, 0x21]);
    assert_eq!(cplc.os_id, [0x47, 0x00]);
    assert_eq!(cplc.ic_serial_number, [0x0B, 0x0C, 0x0D, 0x0E]);
    assert_eq!(cplc.ic_batch_id, [0x0F, 0x10]);
}

#[test]
fn known_and_unknown_devices() {
    let cases = [
        (0xA200u16, "SE050_C1 (03_XX)"),
        (0xA92A, "SE050_F2 (03_XX, 2022 / OM-SE050ARD-F)"),
        (0x0000, "unknown"),
        (0xFFFF, "unknown"),
    ];
    for (oef, expected) in cases {
        let mock = MockTransport::new();
        common::queue_block(&mock, 0x00, &fixtures::platform_id_payload(oef));
        let mut se = common::mock_device(&mock).unwrap();

        let info = se.device_info().unwrap();
        assert_eq!(info.oef_id, oef);
        assert_eq!(info.name.to_string(), expected, "oef {:04X}", oef);
        assert_eq!(info.platform_build_id, "JCOP4 SE050 0300");
    }
}

#[test]
fn catalog_lookup() {
    let catalog = DeviceCatalog::global();
    assert_eq!(catalog.len(), 15);
    assert_eq!(catalog.lookup(0xA200), DeviceName::Known("SE050_C1 (03_XX)"));
    assert_eq!(catalog.lookup(0x0000), DeviceName::Unknown(0x0000));
}

#[test]
fn truncated_atr_is_invalid_length() {
    let mock = MockTransport::new();
    common::queue_block(&mock, 0xEF, &fixtures::atr_payload()[..20]);
    let mut se = common::mock_device(&mock).unwrap();
    assert!(matches!(
        se.answer_to_reset(),
        Err(Error::InvalidLength { actual: 20, .. })
    ));
}

#[test]
fn oversized_select_fails_before_io() {
    let mock = MockTransport::new();
    let mut se = common::mock_device(&mock).unwrap();
    let aid = vec![0xAA; 250];
    assert!(matches!(se.select(&aid), Err(Error::FrameTooLong { .. })));
    assert_eq!(mock.write_attempts(), 0);
}
