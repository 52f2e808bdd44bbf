// Identification sweep against a scripted bus.
//
// Replays the replies of an SE050 C1 through MockTransport so the query
// layer can be exercised without hardware. A real host would pass its own
// I2cTransport implementation (for example over Linux i2c-dev) to the
// builder instead.

use anyhow::Context;
use se05x::prelude::*;
use se05x::test_support::queue_block;
use se05x::transport::{MemorySink, MockTransport};
use hex::FromHex;

fn hex(s: &str) -> anyhow::Result<Vec<u8>> {
    Ok(Vec::from_hex(s)?)
}

fn script(mock: &MockTransport) -> anyhow::Result<()> {
    queue_block(mock, 0xE0, &[]);
    queue_block(mock, 0xE6, &[]);
    queue_block(
        mock,
        0xEF,
        &hex("00a0000003960403e800fe020b03e80801000000006400000a4a434f5034204154504f")?,
    );
    queue_block(mock, 0x00, &hex("6f108408a000000151000000a5049f6501ff9000")?);
    let mut cplc = hex("9f7f2a4790d321470001234567890a0b0c0d0e0f1011")?;
    cplc.resize(45, 0x00);
    cplc.extend_from_slice(&[0x90, 0x00]);
    queue_block(mock, 0x40, &cplc);
    let mut id = hex("fe2ddf282a00000000a200")?;
    id.resize(31, 0x00);
    id.extend_from_slice(b"JCOP4 SE050 0300");
    id.extend_from_slice(&[0x90, 0x00]);
    queue_block(mock, 0x00, &id);
    queue_block(mock, 0x40, &[0x90, 0x00]);
    queue_block(mock, 0x00, &[0x90, 0x00]);
    queue_block(mock, 0x40, &hex("41070301006fff010b9000")?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mock = MockTransport::new();
    script(&mock)?;

    let sink = MemorySink::new();
    let mut se = Se05xBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_config(TransactionConfig::default().with_retry_delay(ms(0)).with_max_attempts(2))
        .with_sink(Box::new(sink.clone()))
        .build()
        .context("building device handle")?;

    let report = se.info().context("identification sweep")?;
    println!("device ......: {}", report.device.name);
    println!("platform ....: {}", report.device.platform_build_id);
    if let Some(atr) = &report.atr {
        println!("historical ..: {}", atr.historical_text());
    }
    if let Some(v) = &report.version {
        println!("applet ......: {}.{}.{}", v.major, v.minor, v.patch);
    }

    println!("\nbus trace:");
    for record in sink.records() {
        println!("  {}", record);
    }
    Ok(())
}
