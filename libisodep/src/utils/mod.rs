//! Small helpers shared across the crate: hex rendering for frame logs and
//! timeout arithmetic for waiting-time extensions.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
