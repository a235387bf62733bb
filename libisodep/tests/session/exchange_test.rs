#[path = "../common/mod.rs"]
mod common;

use libisodep::session::SessionConfig;
use libisodep::{BlockNumber, LinkError, TransceiveError};
use proptest::prelude::*;

#[test]
fn short_request_walkthrough() {
    let (mock, mut session) = common::active_session(
        SessionConfig::default(),
        vec![common::fixtures::ok_response_frame()],
    );
    assert_eq!(session.block_number(), BlockNumber::ZERO);

    let resp = session
        .transceive(&common::fixtures::short_request())
        .unwrap();

    assert_eq!(resp, vec![0x90, 0x00]);
    assert_eq!(session.block_number(), BlockNumber::ONE);
    assert_eq!(mock.borrow().sent, vec![common::fixtures::short_request_frame()]);
}

#[test]
fn consecutive_exchanges_alternate_pcb() {
    let replies = vec![
        common::i_block(BlockNumber::ZERO, &[0x90, 0x00]),
        common::i_block(BlockNumber::ONE, &[0x90, 0x00]),
        common::i_block(BlockNumber::ZERO, &[0x90, 0x00]),
    ];
    let (mock, mut session) = common::active_session(SessionConfig::default(), replies);

    for _ in 0..3 {
        session.transceive(&[0x00, 0xB0, 0x00, 0x00, 0x00]).unwrap();
    }

    let pcbs: Vec<u8> = mock.borrow().sent.iter().map(|f| f[0]).collect();
    assert_eq!(pcbs, vec![0x02, 0x03, 0x02]);
    assert_eq!(session.block_number(), BlockNumber::ONE);
}

#[test]
fn select_ppse_returns_response_apdu() {
    let (_mock, mut session) = common::active_session(
        SessionConfig::default(),
        vec![common::i_block(BlockNumber::ZERO, &common::fixtures::ppse_fci())],
    );

    let resp = session
        .transceive_apdu(&common::fixtures::select_ppse())
        .unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.data()[0], 0x6F);
}

#[test]
fn transceive_into_writes_only_payload() {
    let (_mock, mut session) = common::active_session(
        SessionConfig::default(),
        vec![common::i_block(BlockNumber::ZERO, &[0x01, 0x02, 0x90, 0x00])],
    );
    let mut buf = [0xEEu8; 8];

    let len = session.transceive_into(&[0x00], &mut buf).unwrap();
    assert_eq!(len, 4);
    assert_eq!(buf, [0x01, 0x02, 0x90, 0x00, 0xEE, 0xEE, 0xEE, 0xEE]);
}

#[test]
fn empty_request_and_empty_response() {
    let (mock, mut session) = common::active_session(
        SessionConfig::default(),
        vec![common::i_block(BlockNumber::ZERO, &[])],
    );
    assert!(session.transceive(&[]).unwrap().is_empty());
    assert_eq!(mock.borrow().sent[0].len(), 3);
}

#[test]
fn largest_request_fits_one_frame() {
    let config = SessionConfig {
        frame_capacity: 32,
        max_response_len: 29,
        ..SessionConfig::default()
    };
    let (mock, mut session) = common::active_session(
        config,
        vec![common::i_block(BlockNumber::ZERO, &[0x5A; 29])],
    );

    let resp = session.transceive(&[0xA5; 29]).unwrap();
    assert_eq!(resp, vec![0x5A; 29]);
    assert_eq!(mock.borrow().sent[0].len(), 32);
}

proptest! {
    // After N successful exchanges from a fresh activation the block
    // number is N mod 2; a failed exchange afterwards does not move it.
    #[test]
    fn block_number_tracks_successes_prop(n in 0usize..24) {
        let replies = (0..n)
            .map(|i| common::i_block(BlockNumber::from(i % 2 == 1), &[0x90, 0x00]))
            .collect();
        let (mock, mut session) = common::active_session(SessionConfig::default(), replies);

        for _ in 0..n {
            session.transceive(&[0x00, 0x84, 0x00, 0x00, 0x08]).unwrap();
        }
        prop_assert_eq!(session.block_number().as_u8() as usize, n % 2);

        mock.borrow_mut().push_error(LinkError::Timeout);
        prop_assert_eq!(
            session.transceive(&[0x00]),
            Err(TransceiveError::Link(LinkError::Timeout))
        );
        prop_assert_eq!(session.block_number().as_u8() as usize, n % 2);
    }
}
