// Walk through one APDU exchange against a scripted tag.
//
// The tag asks for two waiting-time extensions before answering SELECT
// PPSE. Run with `RUST_LOG=debug` to see every frame on the link.

use libisodep::prelude::*;
use libisodep::protocol::checksum::append_crc16a;
use libisodep::protocol::frame::encode_i_block;
use libisodep::transport::mock::MockTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut tag = MockTransport::new();
    for wtxm in [0x02u8, 0x05] {
        let mut wtx = vec![0xF2, wtxm];
        append_crc16a(&mut wtx);
        tag.push_response(wtx);
    }
    let mut fci = parse_hex("6F 10 84 0E")?;
    fci.extend_from_slice(b"2PAY.SYS.DDF01");
    fci.extend_from_slice(&[0x90, 0x00]);
    let max_payload = SessionConfig::default().max_payload();
    tag.push_response(encode_i_block(BlockNumber::ZERO, &fci, max_payload));

    let mut session = SessionBuilder::new()
        .with_transport(Box::new(tag))
        .frame_wait_ms(100)
        .build()?
        .activate();

    let mut select = parse_hex("00 A4 04 00 0E")?;
    select.extend_from_slice(b"2PAY.SYS.DDF01");
    select.push(0x00);

    println!("SELECT PPSE: {}", bytes_to_hex_spaced(&select));
    let resp = session.transceive_apdu(&select)?;
    println!("  data: {}", bytes_to_hex_spaced(resp.data()));
    println!("  SW:   {}", resp.status());
    println!("  next block number: {}", session.block_number());

    // The scripted tag has no answer left, so DESELECT times out; the
    // block number is reset regardless.
    if let Err(e) = session.deselect() {
        println!("DESELECT: {}", e);
    }
    let _idle = session.release();
    Ok(())
}
