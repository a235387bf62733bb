#[path = "../common/mod.rs"]
mod common;

use libisodep::prelude::*;

#[test]
fn build_activate_exchange_deselect() -> anyhow::Result<()> {
    let (mock, transport) = common::shared_mock(vec![
        common::fixtures::ok_response_frame(),
        common::fixtures::deselect_frame(),
    ]);

    let session = SessionBuilder::new()
        .with_transport(transport)
        .frame_wait_ms(200)
        .build()?;
    let mut session = session.activate();

    let resp = session.transceive_apdu(&common::fixtures::short_request())?;
    assert!(resp.is_success());
    assert_eq!(session.block_number(), BlockNumber::ONE);

    session.deselect()?;
    assert_eq!(session.block_number(), BlockNumber::ZERO);

    let idle = session.release();
    assert_eq!(idle.config().frame_wait_ms, 200);
    let _transport = idle.into_transport();

    let sent = &mock.borrow().sent;
    assert_eq!(sent[1], common::fixtures::deselect_frame());
    Ok(())
}

#[test]
fn deselect_with_unexpected_answer() {
    let (_mock, transport) = common::shared_mock(vec![
        common::fixtures::ok_response_frame(),
        common::fixtures::r_ack_frame(),
    ]);
    let mut session = Session::new_with_transport(transport).activate();
    session.transceive(&[0x00]).unwrap();

    assert_eq!(
        session.deselect(),
        Err(TransceiveError::UnsupportedBlock { pcb: 0xA2 })
    );
    assert_eq!(session.block_number(), BlockNumber::ZERO);
}

#[test]
fn deselect_answer_with_cid_accepted() {
    let (_mock, transport) = common::shared_mock(vec![common::pcb_frame(0xCA, &[0x00])]);
    let mut session = Session::new_with_transport(transport).activate();
    assert_eq!(session.deselect(), Ok(()));
}

#[test]
fn reset_sequence_between_exchanges() {
    let (mock, mut session) = common::active_session(
        SessionConfig::default(),
        vec![
            common::fixtures::ok_response_frame(),
            common::fixtures::ok_response_frame(),
        ],
    );
    session.transceive(&[0x00]).unwrap();
    session.reset_sequence();
    session.transceive(&[0x00]).unwrap();

    let pcbs: Vec<u8> = mock.borrow().sent.iter().map(|f| f[0]).collect();
    assert_eq!(pcbs, vec![0x02, 0x02]);
}

#[test]
fn reactivation_starts_from_zero() {
    let (_mock, mut session) = common::active_session(
        SessionConfig::default(),
        vec![common::fixtures::ok_response_frame()],
    );
    session.transceive(&[0x00]).unwrap();
    assert_eq!(session.block_number(), BlockNumber::ONE);

    let session = session.release().activate();
    assert_eq!(session.block_number(), BlockNumber::ZERO);
}

#[test]
fn explicit_config_is_validated_on_build() {
    let config = SessionConfig {
        frame_capacity: 3,
        ..SessionConfig::default()
    };
    let res = SessionBuilder::new()
        .with_transport(Box::new(libisodep::transport::mock::MockTransport::new()))
        .with_config(config)
        .build();
    assert!(matches!(res, Err(Error::InvalidConfig(_))));
}
