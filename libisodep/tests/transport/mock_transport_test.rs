#[path = "../common/mod.rs"]
mod common;

use libisodep::LinkError;
use libisodep::transport::Transport;
use libisodep::transport::mock::MockTransport;

#[test]
fn mock_transport_exchange_records_frames() {
    let mut m = MockTransport::new();
    m.push_response(common::fixtures::ok_response_frame());
    let mut rx = [0u8; 16];

    let bits = m
        .exchange_bytes(&common::fixtures::short_request_frame(), &mut rx, 500)
        .unwrap();
    assert_eq!(bits, 40);
    assert_eq!(&rx[..5], &common::fixtures::ok_response_frame()[..]);
    assert_eq!(m.sent, vec![common::fixtures::short_request_frame()]);
    assert_eq!(m.timeouts, vec![500]);
}

#[test]
fn shared_mock_is_visible_through_handle() {
    let (mock, mut transport) = common::shared_mock(vec![vec![0x01, 0x02, 0x03]]);
    let mut rx = [0u8; 4];
    transport.exchange_bytes(&[0xC2], &mut rx, 10).unwrap();
    assert_eq!(mock.borrow().sent, vec![vec![0xC2]]);

    // queue drained: the tag stays silent
    assert_eq!(
        transport.exchange_bytes(&[0xC2], &mut rx, 10),
        Err(LinkError::Timeout)
    );
    assert_eq!(mock.borrow().sent.len(), 2);
}
