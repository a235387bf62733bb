// libisodep/src/protocol/frame.rs

use crate::FrameError;
use crate::constants::{
    MIN_FRAME_LEN, PCB_I_BLOCK, PCB_S_DESELECT, PCB_S_SELECTOR_MASK, PCB_S_WTX,
    PCB_S_WTX_SELECTOR,
};
use crate::protocol::checksum::{append_crc16a, crc16a};
use crate::types::{BlockKind, BlockNumber};

/// A validated ISO/IEC 14443-4 block, borrowing its payload from the
/// received frame.
///
/// Format on the wire: [PCB(1)] [INF(n)] [CRC_A(2)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// Information block carrying application data
    I {
        pcb: u8,
        block_number: BlockNumber,
        payload: &'a [u8],
    },
    /// Acknowledgement block. Reported, never interpreted.
    R { pcb: u8 },
    /// Supervisory block (WTX or DESELECT)
    S {
        pcb: u8,
        is_wtx: bool,
        payload: &'a [u8],
    },
    /// PCB with the reserved `01` type bits
    Reserved { pcb: u8 },
}

impl Block<'_> {
    pub fn pcb(&self) -> u8 {
        match *self {
            Block::I { pcb, .. }
            | Block::R { pcb }
            | Block::S { pcb, .. }
            | Block::Reserved { pcb } => pcb,
        }
    }

    pub fn kind(&self) -> BlockKind {
        BlockKind::from_pcb(self.pcb())
    }
}

/// Encode an I-block: PCB = 0x02 | block number, payload, CRC_A.
///
/// # Panics
///
/// If `payload` is longer than `max_payload`; chaining is not supported.
pub fn encode_i_block(block_number: BlockNumber, payload: &[u8], max_payload: usize) -> Vec<u8> {
    assert!(
        payload.len() <= max_payload,
        "payload of {} bytes exceeds frame payload of {} bytes",
        payload.len(),
        max_payload
    );
    let mut out = Vec::with_capacity(MIN_FRAME_LEN + payload.len());
    out.push(PCB_I_BLOCK | block_number.as_u8());
    out.extend_from_slice(payload);
    append_crc16a(&mut out);
    out
}

/// Encode the PCD's answer to an S(WTX) request. The multiplier is
/// mirrored back exactly as the PICC sent it.
pub fn encode_wtx_ack(multiplier: u8) -> Vec<u8> {
    let mut out = vec![PCB_S_WTX, multiplier];
    append_crc16a(&mut out);
    out
}

/// Encode an S(DESELECT) request.
pub fn encode_deselect() -> Vec<u8> {
    let mut out = vec![PCB_S_DESELECT];
    append_crc16a(&mut out);
    out
}

/// Check length and CRC_A of a received frame, then classify it by the
/// block type bits of its PCB.
pub fn decode_and_validate(raw: &[u8]) -> Result<Block<'_>, FrameError> {
    if raw.len() < MIN_FRAME_LEN {
        return Err(FrameError::TooShort { actual: raw.len() });
    }

    let (body, trailer) = raw.split_at(raw.len() - 2);
    let expected = crc16a(body);
    if trailer != &expected[..] {
        return Err(FrameError::CrcMismatch {
            expected,
            actual: [trailer[0], trailer[1]],
        });
    }

    let pcb = body[0];
    let payload = &body[1..];
    let block = match BlockKind::from_pcb(pcb) {
        BlockKind::I => Block::I {
            pcb,
            block_number: BlockNumber::from_pcb(pcb),
            payload,
        },
        BlockKind::R => Block::R { pcb },
        BlockKind::S => Block::S {
            pcb,
            is_wtx: pcb & PCB_S_SELECTOR_MASK == PCB_S_WTX_SELECTOR,
            payload,
        },
        BlockKind::Reserved => Block::Reserved { pcb },
    };
    Ok(block)
}
