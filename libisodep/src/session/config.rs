// libisodep/src/session/config.rs

use crate::constants::{DEFAULT_FRAME_CAPACITY, DEFAULT_MAX_WTX_ROUNDS, FRAME_OVERHEAD};
use crate::utils::timeout::DEFAULT_FRAME_WAIT_MS;
use crate::{Error, Result};

/// Tunables of a block-protocol session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Bytes of one frame including PCB and CRC_A (FSD)
    pub frame_capacity: usize,
    /// WTX acknowledgments allowed within one exchange attempt
    pub max_wtx_rounds: usize,
    /// Wait for a PICC answer, in milliseconds
    pub frame_wait_ms: u64,
    /// Response capacity used by `Session::transceive`
    pub max_response_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_capacity: DEFAULT_FRAME_CAPACITY,
            max_wtx_rounds: DEFAULT_MAX_WTX_ROUNDS,
            frame_wait_ms: DEFAULT_FRAME_WAIT_MS,
            max_response_len: DEFAULT_FRAME_CAPACITY - FRAME_OVERHEAD,
        }
    }
}

impl SessionConfig {
    /// Largest INF field a frame of `frame_capacity` bytes can carry.
    pub fn max_payload(&self) -> usize {
        self.frame_capacity.saturating_sub(FRAME_OVERHEAD)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_capacity <= FRAME_OVERHEAD {
            return Err(Error::InvalidConfig(format!(
                "frame_capacity {} leaves no room for payload",
                self.frame_capacity
            )));
        }
        if self.frame_wait_ms == 0 {
            return Err(Error::InvalidConfig("frame_wait_ms must be positive".into()));
        }
        if self.max_response_len > self.max_payload() {
            return Err(Error::InvalidConfig(format!(
                "max_response_len {} exceeds frame payload {}",
                self.max_response_len,
                self.max_payload()
            )));
        }
        Ok(())
    }
}
