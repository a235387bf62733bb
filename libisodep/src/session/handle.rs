// libisodep/src/session/handle.rs

use std::marker::PhantomData;

use log::{debug, trace, warn};

use crate::constants::{MIN_FRAME_LEN, PCB_CID_BIT, PCB_S_DESELECT};
use crate::protocol::frame::{
    Block, decode_and_validate, encode_deselect, encode_i_block, encode_wtx_ack,
};
use crate::protocol::ResponseApdu;
use crate::session::config::SessionConfig;
use crate::transport::Transport;
use crate::types::BlockNumber;
use crate::utils::{bytes_to_hex_spaced, wtx_timeout_ms};
use crate::{Result, TransceiveError};

/// Type-state markers
///
/// Transport attached, tag not activated.
pub struct Idle;
/// Tag activated; blocks may be exchanged.
pub struct Active;

/// Block-protocol session with one PICC.
///
/// `Session<Idle>` owns the transport but cannot exchange blocks;
/// `activate` (called once the tag answered RATS) resets the block
/// number and yields a `Session<Active>`.
pub struct Session<State = Idle> {
    transport: Box<dyn Transport>,
    config: SessionConfig,
    block_number: BlockNumber,
    _state: PhantomData<State>,
}

impl<State> Session<State> {
    /// Active configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Block number the next I-block will carry.
    pub fn block_number(&self) -> BlockNumber {
        self.block_number
    }

    fn into_state<Next>(self) -> Session<Next> {
        Session {
            transport: self.transport,
            config: self.config,
            block_number: self.block_number,
            _state: PhantomData,
        }
    }
}

impl Session<Idle> {
    /// Create a Session with the default configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    /// Create a Session with an explicit configuration. Callers outside the
    /// crate go through `SessionBuilder::build`, which validates it.
    pub(crate) fn with_config(transport: Box<dyn Transport>, config: SessionConfig) -> Self {
        Self {
            transport,
            config,
            block_number: BlockNumber::ZERO,
            _state: PhantomData,
        }
    }

    /// Tag activated: start a fresh block-number sequence.
    pub fn activate(self) -> Session<Active> {
        let mut active: Session<Active> = self.into_state();
        active.reset_sequence();
        active
    }

    /// Take the transport back.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }
}

impl Session<Active> {
    /// Set the block number back to 0. Call once per tag activation,
    /// before the first exchange; never in the middle of one.
    pub fn reset_sequence(&mut self) {
        self.block_number = BlockNumber::ZERO;
    }

    /// Exchange one APDU, returning at most `config.max_response_len`
    /// response bytes.
    ///
    /// # Panics
    ///
    /// If `request` does not fit in a single frame (see
    /// [`SessionConfig::max_payload`]).
    pub fn transceive(&mut self, request: &[u8]) -> std::result::Result<Vec<u8>, TransceiveError> {
        let mut response = vec![0u8; self.config.max_response_len];
        let len = self.transceive_into(request, &mut response)?;
        response.truncate(len);
        Ok(response)
    }

    /// Exchange one APDU and split the answer into data and status word.
    pub fn transceive_apdu(&mut self, request: &[u8]) -> Result<ResponseApdu> {
        let response = self.transceive(request)?;
        ResponseApdu::parse(&response)
    }

    /// Exchange one APDU, writing the response into `response`.
    ///
    /// Returns the response length. `response` is only written once a
    /// valid I-block fits entirely; on any error it is left untouched.
    ///
    /// # Panics
    ///
    /// If `request` does not fit in a single frame (see
    /// [`SessionConfig::max_payload`]).
    pub fn transceive_into(
        &mut self,
        request: &[u8],
        response: &mut [u8],
    ) -> std::result::Result<usize, TransceiveError> {
        let frame = encode_i_block(self.block_number, request, self.config.max_payload());
        let mut rx = vec![0u8; self.config.frame_capacity];
        debug!("I({}) -> {}", self.block_number, bytes_to_hex_spaced(&frame));
        let mut rx_len = self.exchange(&frame, &mut rx, self.config.frame_wait_ms)?;

        let mut wtx_rounds = 0usize;
        loop {
            match decode_and_validate(&rx[..rx_len])? {
                Block::I { payload, .. } => {
                    // The PICC consumed our block number once it answered.
                    self.block_number = self.block_number.toggled();
                    if payload.len() > response.len() {
                        return Err(TransceiveError::ResponseTooLarge {
                            len: payload.len(),
                            capacity: response.len(),
                        });
                    }
                    response[..payload.len()].copy_from_slice(payload);
                    return Ok(payload.len());
                }
                Block::S {
                    is_wtx: true,
                    payload: &[wtxm, ..],
                    ..
                } => {
                    if wtx_rounds >= self.config.max_wtx_rounds {
                        warn!("tag requested WTX after {} rounds, giving up", wtx_rounds);
                        return Err(TransceiveError::WtxExceeded { rounds: wtx_rounds });
                    }
                    wtx_rounds += 1;
                    let ack = encode_wtx_ack(wtxm);
                    let timeout_ms = wtx_timeout_ms(self.config.frame_wait_ms, wtxm);
                    debug!(
                        "WTX #{} wtxm={:#04x} wait={}ms -> {}",
                        wtx_rounds,
                        wtxm,
                        timeout_ms,
                        bytes_to_hex_spaced(&ack)
                    );
                    rx_len = self.exchange(&ack, &mut rx, timeout_ms)?;
                }
                other => {
                    debug!("unsupported {} pcb={:#04x}", other.kind(), other.pcb());
                    return Err(TransceiveError::UnsupportedBlock { pcb: other.pcb() });
                }
            }
        }
    }

    /// Send S(DESELECT) and wait for the tag to confirm it. The block
    /// number is reset whether or not the tag answered.
    pub fn deselect(&mut self) -> std::result::Result<(), TransceiveError> {
        let frame = encode_deselect();
        let mut rx = vec![0u8; self.config.frame_capacity];
        debug!("DESELECT -> {}", bytes_to_hex_spaced(&frame));
        let outcome = self
            .exchange(&frame, &mut rx, self.config.frame_wait_ms)
            .and_then(|len| match decode_and_validate(&rx[..len])? {
                Block::S { pcb, .. } if pcb & !PCB_CID_BIT == PCB_S_DESELECT => Ok(()),
                other => Err(TransceiveError::UnsupportedBlock { pcb: other.pcb() }),
            });
        self.reset_sequence();
        outcome
    }

    /// Tag deselected or lost: drop back to `Session<Idle>`.
    pub fn release(mut self) -> Session<Idle> {
        self.reset_sequence();
        self.into_state()
    }

    /// One physical exchange. Returns the number of whole bytes received.
    fn exchange(
        &mut self,
        tx: &[u8],
        rx: &mut [u8],
        timeout_ms: u64,
    ) -> std::result::Result<usize, TransceiveError> {
        let bits = self
            .transport
            .exchange_bytes(tx, rx, timeout_ms)
            .inspect_err(|e| debug!("link error: {}", e))?;
        if bits < MIN_FRAME_LEN * 8 {
            return Err(TransceiveError::FrameTooShort { bits });
        }
        // A misbehaving link may report more bits than fit the buffer.
        let len = (bits / 8).min(rx.len());
        trace!("<- {}", bytes_to_hex_spaced(&rx[..len]));
        Ok(len)
    }
}
