//! Timeout helpers for frame waiting time and its WTX extension.

use crate::constants::{WTXM_MASK, WTXM_MAX};

/// Default per-exchange wait for a PICC answer, in milliseconds.
pub const DEFAULT_FRAME_WAIT_MS: u64 = 500;

/// Largest frame waiting time ISO/IEC 14443-4 allows (FWI = 14), rounded up.
pub const FWT_MAX_MS: u64 = 4949;

/// Temporary waiting time granted by an S(WTX) request: `base * WTXM`,
/// with WTXM taken from the low six bits and clamped to 1..=59, and the
/// result capped at [`FWT_MAX_MS`].
pub fn wtx_timeout_ms(base_ms: u64, wtxm: u8) -> u64 {
    let multiplier = (wtxm & WTXM_MASK).clamp(1, WTXM_MAX) as u64;
    base_ms.saturating_mul(multiplier).min(FWT_MAX_MS)
}
