// fixtures.rs — commonly used APDUs and PICC frames

use libisodep::protocol::checksum::append_crc16a;

fn from_hex(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}

/// READ BINARY style request used in the protocol walkthrough
pub fn short_request() -> Vec<u8> {
    vec![0xA2, 0x01]
}

/// Frame the PCD sends for `short_request` with block number 0
pub fn short_request_frame() -> Vec<u8> {
    from_hex("02 A2 01 6A 9D")
}

/// PICC answer: I-block, block number 0, SW 90 00
pub fn ok_response_frame() -> Vec<u8> {
    from_hex("02 90 00 F1 09")
}

/// PICC S(WTX) request with WTXM = 3
pub fn wtx_request_frame() -> Vec<u8> {
    from_hex("F2 03 83 63")
}

/// PICC answer to S(DESELECT)
pub fn deselect_frame() -> Vec<u8> {
    from_hex("C2 E0 B4")
}

/// PICC R(ACK) with block number 0
pub fn r_ack_frame() -> Vec<u8> {
    let mut f = vec![0xA2];
    append_crc16a(&mut f);
    f
}

/// SELECT 2PAY.SYS.DDF01
pub fn select_ppse() -> Vec<u8> {
    let mut apdu = from_hex("00 A4 04 00 0E");
    apdu.extend_from_slice(b"2PAY.SYS.DDF01");
    apdu.push(0x00);
    apdu
}

/// Truncated FCI template answering `select_ppse`, followed by SW 90 00
pub fn ppse_fci() -> Vec<u8> {
    let mut resp = from_hex("6F 10 84 0E");
    resp.extend_from_slice(b"2PAY.SYS.DDF01");
    resp.extend_from_slice(&[0x90, 0x00]);
    resp
}

/// ATS of a DESFire EV1: FSCI=5, TA/TB/TC present, historical byte 80
pub fn desfire_ats() -> Vec<u8> {
    from_hex("06 75 77 81 02 80")
}
