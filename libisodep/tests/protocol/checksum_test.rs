#[path = "../common/mod.rs"]
mod common;

use libisodep::protocol::{append_crc16a, crc16a};

#[test]
fn crc16a_matches_fixture_frames() {
    for frame in [
        common::fixtures::short_request_frame(),
        common::fixtures::ok_response_frame(),
        common::fixtures::wtx_request_frame(),
        common::fixtures::deselect_frame(),
    ] {
        let (body, crc) = frame.split_at(frame.len() - 2);
        assert_eq!(&crc16a(body)[..], crc);
    }
}

#[test]
fn append_crc16a_extends_in_place() {
    let mut frame = vec![0xE0, 0x50];
    append_crc16a(&mut frame);
    assert_eq!(frame, vec![0xE0, 0x50, 0xBC, 0xA5]);
}
