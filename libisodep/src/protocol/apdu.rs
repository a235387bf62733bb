// libisodep/src/protocol/apdu.rs

use derive_more::Display;

use crate::Result;
use crate::protocol::parser::{be_u16_at, ensure_len};

/// Two-byte status word (SW1 SW2) terminating every response APDU
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:04X}", _0)]
pub struct StatusWord(u16);

impl StatusWord {
    pub const SUCCESS: Self = Self(0x9000);

    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self(((sw1 as u16) << 8) | sw2 as u16)
    }

    pub fn sw1(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn sw2(&self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }

    /// `61 xx`: the card holds `xx` more response bytes (GET RESPONSE).
    pub fn bytes_available(&self) -> Option<u8> {
        (self.sw1() == 0x61).then(|| self.sw2())
    }

    /// `6C xx`: wrong Le, the exact length is `xx`.
    pub fn wrong_length(&self) -> Option<u8> {
        (self.sw1() == 0x6C).then(|| self.sw2())
    }

    /// SW1 is one of the values ISO/IEC 7816-4 allows for a status word
    /// (`61`..`6F` except the security-reserved `66`, or `9X`).
    pub fn is_well_formed(&self) -> bool {
        match self.sw1() {
            0x66 => false,
            0x61..=0x6F => true,
            sw1 => sw1 & 0xF0 == 0x90,
        }
    }
}

/// Response APDU split into response data and status word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseApdu {
    data: Vec<u8>,
    status: StatusWord,
}

impl ResponseApdu {
    /// Split `bytes` into data and trailing SW1 SW2.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        ensure_len(bytes, 2)?;
        let split = bytes.len() - 2;
        let status = StatusWord(be_u16_at(bytes, split)?);
        Ok(Self {
            data: bytes[..split].to_vec(),
            status,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn status(&self) -> StatusWord {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl TryFrom<&[u8]> for ResponseApdu {
    type Error = crate::Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes)
    }
}
