// libisodep/src/error.rs

use thiserror::Error;

/// Failure reported by the physical link for a single exchange
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    #[error("no response from tag")]
    Timeout,

    #[error("collision detected")]
    Collision,

    #[error("parity error")]
    Parity,

    #[error("receive buffer overflow")]
    Overflow,

    #[error("link status {0:#04x}")]
    Status(u8),
}

/// Frame-level validation failure
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame too short: {actual} bytes")]
    TooShort { actual: usize },

    #[error("crc mismatch: expected {expected:02x?}, got {actual:02x?}")]
    CrcMismatch { expected: [u8; 2], actual: [u8; 2] },
}

/// Terminal failure of one `transceive` attempt
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransceiveError {
    #[error("link error: {0}")]
    Link(#[from] LinkError),

    #[error("response frame too short: {bits} bits")]
    FrameTooShort { bits: usize },

    #[error("response crc mismatch: expected {expected:02x?}, got {actual:02x?}")]
    CrcMismatch { expected: [u8; 2], actual: [u8; 2] },

    #[error("response of {len} bytes exceeds buffer of {capacity} bytes")]
    ResponseTooLarge { len: usize, capacity: usize },

    #[error("waiting time extension requested more than {rounds} times")]
    WtxExceeded { rounds: usize },

    #[error("unsupported block: pcb={pcb:#04x}")]
    UnsupportedBlock { pcb: u8 },
}

impl From<FrameError> for TransceiveError {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::TooShort { actual } => TransceiveError::FrameTooShort { bits: actual * 8 },
            FrameError::CrcMismatch { expected, actual } => {
                TransceiveError::CrcMismatch { expected, actual }
            }
        }
    }
}

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transceive(#[from] TransceiveError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no transport configured")]
    TransportMissing,
}

pub type Result<T> = std::result::Result<T, Error>;
