// libisodep/src/session/builder.rs

use crate::session::config::SessionConfig;
use crate::session::handle::{Idle, Session};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Session with optional configuration.
#[derive(Default)]
pub struct SessionBuilder {
    transport: Option<Box<dyn Transport>>,
    config: SessionConfig,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the physical link (reader chip driver or MockTransport).
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn frame_capacity(mut self, bytes: usize) -> Self {
        self.config.frame_capacity = bytes;
        self
    }

    pub fn max_wtx_rounds(mut self, rounds: usize) -> Self {
        self.config.max_wtx_rounds = rounds;
        self
    }

    pub fn frame_wait_ms(mut self, ms: u64) -> Self {
        self.config.frame_wait_ms = ms;
        self
    }

    pub fn max_response_len(mut self, len: usize) -> Self {
        self.config.max_response_len = len;
        self
    }

    /// Consume the builder and return an idle Session.
    /// Requires a transport and a valid configuration.
    pub fn build(self) -> Result<Session<Idle>> {
        self.config.validate()?;
        match self.transport {
            Some(t) => Ok(Session::with_config(t, self.config)),
            None => Err(Error::TransportMissing),
        }
    }
}
