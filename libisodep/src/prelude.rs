// libisodep/src/prelude.rs

pub use crate::protocol::{Ats, Block, ResponseApdu, StatusWord};
pub use crate::session::{Active, Idle, Session, SessionBuilder, SessionConfig};
pub use crate::transport::Transport;
pub use crate::{BlockKind, BlockNumber, Error, FrameError, LinkError, Result, TransceiveError};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
