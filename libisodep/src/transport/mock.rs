// libisodep/src/transport/mock.rs

use crate::LinkError;
use crate::transport::traits::Transport;

/// One scripted answer of a [`MockTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Answer with these bytes, reporting `len * 8` bits
    Frame(Vec<u8>),
    /// Answer with these bytes but report the given bit count
    Bits(Vec<u8>, usize),
    /// Fail the exchange
    Fail(LinkError),
}

/// Mock transport for unit tests. It records transmitted frames and
/// returns queued replies in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub sent_bits: Vec<usize>,
    pub timeouts: Vec<u64>,
    pub replies: Vec<MockReply>,
    /// Reply used once the queue is empty; `None` means the tag is silent
    pub repeat: Option<MockReply>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, frame: Vec<u8>) {
        self.replies.push(MockReply::Frame(frame));
    }

    pub fn push_bits(&mut self, frame: Vec<u8>, bits: usize) {
        self.replies.push(MockReply::Bits(frame, bits));
    }

    pub fn push_error(&mut self, err: LinkError) {
        self.replies.push(MockReply::Fail(err));
    }

    /// Answer every exchange past the queue with `frame`.
    pub fn repeat_response(&mut self, frame: Vec<u8>) {
        self.repeat = Some(MockReply::Frame(frame));
    }

    fn next_reply(&mut self) -> Option<MockReply> {
        if self.replies.is_empty() {
            self.repeat.clone()
        } else {
            Some(self.replies.remove(0))
        }
    }
}

impl Transport for MockTransport {
    fn exchange(
        &mut self,
        tx: &[u8],
        tx_bits: usize,
        rx: &mut [u8],
        timeout_ms: u64,
    ) -> Result<usize, LinkError> {
        let tx_len = tx_bits.div_ceil(8).min(tx.len());
        self.sent.push(tx[..tx_len].to_vec());
        self.sent_bits.push(tx_bits);
        self.timeouts.push(timeout_ms);

        let (frame, bits) = match self.next_reply() {
            None => return Err(LinkError::Timeout),
            Some(MockReply::Fail(err)) => return Err(err),
            Some(MockReply::Frame(frame)) => {
                let bits = frame.len() * 8;
                (frame, bits)
            }
            Some(MockReply::Bits(frame, bits)) => (frame, bits),
        };

        if frame.len() > rx.len() {
            return Err(LinkError::Overflow);
        }
        rx[..frame.len()].copy_from_slice(&frame);
        Ok(bits)
    }
}
