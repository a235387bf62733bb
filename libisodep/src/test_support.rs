//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport setup and PICC-side frame
//! construction so tests across the crate and the tests/ directory build
//! answers the same way.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::LinkError;
use crate::constants::{DEFAULT_FRAME_CAPACITY, FRAME_OVERHEAD};
use crate::protocol::checksum::append_crc16a;
use crate::protocol::frame::encode_i_block;
use crate::session::{Active, Session, SessionConfig};
use crate::transport::mock::MockTransport;
use crate::transport::traits::Transport;
use crate::types::BlockNumber;

/// Transport that delegates into a shared MockTransport, so a test can
/// inspect transmitted frames after a Session took ownership.
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    pub fn new(inner: Rc<RefCell<MockTransport>>) -> Self {
        Self { inner }
    }
}

impl Transport for SharedTransport {
    fn exchange(
        &mut self,
        tx: &[u8],
        tx_bits: usize,
        rx: &mut [u8],
        timeout_ms: u64,
    ) -> Result<usize, LinkError> {
        self.inner
            .borrow_mut()
            .exchange(tx, tx_bits, rx, timeout_ms)
    }
}

/// Build a shared MockTransport pre-seeded with `replies` and return it
/// together with a boxed Transport handle onto it.
#[doc(hidden)]
pub fn shared_mock(replies: Vec<Vec<u8>>) -> (Rc<RefCell<MockTransport>>, Box<dyn Transport>) {
    let mut mock = MockTransport::new();
    for reply in replies {
        mock.push_response(reply);
    }
    let inner = Rc::new(RefCell::new(mock));
    let boxed: Box<dyn Transport> = Box::new(SharedTransport::new(inner.clone()));
    (inner, boxed)
}

/// Convenience: an activated Session with the given configuration backed
/// by a shared MockTransport.
#[doc(hidden)]
pub fn active_session(
    config: SessionConfig,
    replies: Vec<Vec<u8>>,
) -> (Rc<RefCell<MockTransport>>, Session<Active>) {
    let (mock, transport) = shared_mock(replies);
    let session = Session::with_config(transport, config).activate();
    (mock, session)
}

/// PICC answer carrying `payload` in an I-block.
#[doc(hidden)]
pub fn i_block(block_number: BlockNumber, payload: &[u8]) -> Vec<u8> {
    encode_i_block(block_number, payload, DEFAULT_FRAME_CAPACITY - FRAME_OVERHEAD)
}

/// PICC S(WTX) request with the given INF byte.
#[doc(hidden)]
pub fn wtx_request(wtxm: u8) -> Vec<u8> {
    pcb_frame(0xF2, &[wtxm])
}

/// Arbitrary frame with a valid CRC_A.
#[doc(hidden)]
pub fn pcb_frame(pcb: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![pcb];
    out.extend_from_slice(payload);
    append_crc16a(&mut out);
    out
}
