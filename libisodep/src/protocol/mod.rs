// libisodep/src/protocol/mod.rs

pub mod apdu;
pub mod ats;
pub mod checksum;
pub mod frame;
pub mod parser;

pub use apdu::{ResponseApdu, StatusWord};
pub use ats::Ats;
pub use checksum::{append_crc16a, crc16a};
pub use frame::{Block, decode_and_validate, encode_deselect, encode_i_block, encode_wtx_ack};
