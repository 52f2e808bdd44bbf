use hex::FromHex;
use se05x::constants::{AID_IOT_APPLET, AID_IOT_SSD};
use se05x::protocol::{Command, MemoryKind};

#[test]
fn identification_commands_encode_as_captured() {
    let cases: Vec<(Command, &str)> = vec![
        (Command::Select { aid: vec![] }, "00a4040000"),
        (Command::GetCplc, "80ca9f7f00"),
        (Command::GetPlatformId, "80ca00fe02df28"),
        (Command::GetVersion, "8004002000"),
        (Command::GetVersionExt, "8004002100"),
        (Command::GetTimestamp, "8004003d00"),
        (
            Command::GetFreeMemory {
                kind: MemoryKind::Persistent,
            },
            "8004002203410101",
        ),
        (Command::GetRandom { len: 64 }, "800400490441020040"),
    ];

    for (cmd, expected) in cases {
        let expected = Vec::<u8>::from_hex(expected).unwrap();
        assert_eq!(cmd.encode().unwrap(), expected, "{:?}", cmd);
    }
}

#[test]
fn select_carries_aid_length() {
    let ssd = Command::Select {
        aid: AID_IOT_SSD.to_vec(),
    }
    .encode()
    .unwrap();
    assert_eq!(ssd[4] as usize, AID_IOT_SSD.len());

    let applet = Command::Select {
        aid: AID_IOT_APPLET.to_vec(),
    }
    .encode()
    .unwrap();
    assert_eq!(applet[4], 16);
    assert_eq!(&applet[5..], &AID_IOT_APPLET);
}
