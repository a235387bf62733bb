// libisodep/src/protocol/ats.rs

use crate::protocol::parser::{byte_at, ensure_len, slice_at};
use crate::{Error, Result};

/// FSC in bytes indexed by FSCI; FSCI values above 8 are RFU and read as 256.
const FSC_TABLE: [usize; 9] = [16, 24, 32, 40, 48, 64, 96, 128, 256];

/// FSCI assumed when the ATS carries no format byte.
const DEFAULT_FSCI: u8 = 2;

const T0_TA_PRESENT: u8 = 0x10;
const T0_TB_PRESENT: u8 = 0x20;
const T0_TC_PRESENT: u8 = 0x40;

/// Answer To Select, as returned by the PICC after RATS (CRC stripped).
///
/// Format: [TL] [T0] [TA] [TB] [TC] [historical bytes...]; every byte after
/// TL is optional and TL counts itself. Bytes past TL are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ats {
    tl: u8,
    t0: Option<u8>,
    ta: Option<u8>,
    tb: Option<u8>,
    tc: Option<u8>,
    historical: Vec<u8>,
}

impl Ats {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let tl = byte_at(bytes, 0)?;
        if tl == 0 {
            return Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }
        ensure_len(bytes, tl as usize)?;
        let ats = &bytes[..tl as usize];

        let mut ats_info = Self {
            tl,
            t0: None,
            ta: None,
            tb: None,
            tc: None,
            historical: Vec::new(),
        };
        if ats.len() == 1 {
            return Ok(ats_info);
        }

        let t0 = ats[1];
        ats_info.t0 = Some(t0);
        let mut idx = 2usize;
        for (flag, slot) in [
            (T0_TA_PRESENT, &mut ats_info.ta),
            (T0_TB_PRESENT, &mut ats_info.tb),
            (T0_TC_PRESENT, &mut ats_info.tc),
        ] {
            if t0 & flag != 0 {
                *slot = Some(byte_at(ats, idx)?);
                idx += 1;
            }
        }

        ats_info.historical = slice_at(ats, idx, ats.len() - idx)?.to_vec();
        Ok(ats_info)
    }

    /// Length byte, counting itself
    pub fn tl(&self) -> u8 {
        self.tl
    }

    pub fn t0(&self) -> Option<u8> {
        self.t0
    }

    pub fn ta(&self) -> Option<u8> {
        self.ta
    }

    pub fn tb(&self) -> Option<u8> {
        self.tb
    }

    pub fn tc(&self) -> Option<u8> {
        self.tc
    }

    pub fn fsci(&self) -> u8 {
        self.t0.map_or(DEFAULT_FSCI, |t0| t0 & 0x0F)
    }

    /// Maximum frame size the PICC accepts, in bytes including PCB and CRC.
    /// Informational only: sessions keep their configured frame capacity.
    pub fn fsc(&self) -> usize {
        FSC_TABLE[(self.fsci() as usize).min(FSC_TABLE.len() - 1)]
    }

    pub fn historical_bytes(&self) -> &[u8] {
        &self.historical
    }

    /// Printable ASCII characters of the historical bytes, in order.
    /// Cards commonly put an identification string here.
    pub fn historical_ascii(&self) -> String {
        self.historical
            .iter()
            .filter(|b| b.is_ascii_graphic() || **b == b' ')
            .map(|&b| b as char)
            .collect()
    }
}

impl TryFrom<&[u8]> for Ats {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes)
    }
}
