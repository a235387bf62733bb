// libisodep/src/types.rs

use derive_more::Display;

use crate::constants::{PCB_BLOCK_NUMBER_BIT, PCB_TYPE_I, PCB_TYPE_MASK, PCB_TYPE_R, PCB_TYPE_S};

/// Block number carried by I-blocks - Newtype Pattern (one bit)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockNumber(u8);

impl BlockNumber {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    /// Extract the block number from a PCB.
    pub const fn from_pcb(pcb: u8) -> Self {
        Self(pcb & PCB_BLOCK_NUMBER_BIT)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// The opposite block number.
    pub fn toggled(self) -> Self {
        Self(self.0 ^ 1)
    }
}

impl From<bool> for BlockNumber {
    fn from(bit: bool) -> Self {
        Self(bit as u8)
    }
}

/// Block type selected by the two top bits of a PCB
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    #[display(fmt = "I-block")]
    I,
    #[display(fmt = "R-block")]
    R,
    #[display(fmt = "S-block")]
    S,
    #[display(fmt = "reserved")]
    Reserved,
}

impl BlockKind {
    pub fn from_pcb(pcb: u8) -> Self {
        match pcb & PCB_TYPE_MASK {
            PCB_TYPE_I => Self::I,
            PCB_TYPE_R => Self::R,
            PCB_TYPE_S => Self::S,
            _ => Self::Reserved,
        }
    }
}
