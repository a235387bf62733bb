// libisodep/src/constants.rs
//! Protocol constants for ISO/IEC 14443-4 block frames

/// Mask selecting the block type bits of a PCB
pub const PCB_TYPE_MASK: u8 = 0xC0;

/// Block type bits: I-block
pub const PCB_TYPE_I: u8 = 0x00;
/// Block type bits: R-block
pub const PCB_TYPE_R: u8 = 0x80;
/// Block type bits: S-block
pub const PCB_TYPE_S: u8 = 0xC0;

/// I-block PCB without block number, CID, NAD or chaining
pub const PCB_I_BLOCK: u8 = 0x02;

/// Block number bit of I- and R-block PCBs
pub const PCB_BLOCK_NUMBER_BIT: u8 = 0x01;

/// Mask for the S-block selector (everything below the type bits)
pub const PCB_S_SELECTOR_MASK: u8 = 0x3F;

/// S-block selector value for WTX
pub const PCB_S_WTX_SELECTOR: u8 = 0x32;

/// S(WTX) PCB as sent by the PCD
pub const PCB_S_WTX: u8 = 0xF2;

/// S(DESELECT) PCB
pub const PCB_S_DESELECT: u8 = 0xC2;

/// CID-following bit, ignored when matching an S(DESELECT) answer
pub const PCB_CID_BIT: u8 = 0x08;

/// Bytes a frame spends on PCB + CRC_A
pub const FRAME_OVERHEAD: usize = 3;

/// Minimal valid frame length: PCB + CRC_A
pub const MIN_FRAME_LEN: usize = 3;

/// Default frame capacity (FSD) including PCB and CRC_A
pub const DEFAULT_FRAME_CAPACITY: usize = 256;

/// Default bound on WTX round-trips within one exchange attempt
pub const DEFAULT_MAX_WTX_ROUNDS: usize = 10;

/// CRC_A preset value
pub const CRC_A_INIT: u16 = 0x6363;

/// Largest WTXM value permitted by ISO/IEC 14443-4
pub const WTXM_MAX: u8 = 59;

/// Mask for the WTXM field of the S(WTX) INF byte
pub const WTXM_MASK: u8 = 0x3F;
