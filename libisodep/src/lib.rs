// libisodep/src/lib.rs

//! libisodep
//!
//! ISO/IEC 14443-4 half-duplex block protocol for Type A readers: I-block
//! framing with CRC_A, waiting-time extension handling and the toggling
//! block number, on top of a pluggable bit-level [`transport::Transport`].
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the small newtypes in `types` are available to consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
