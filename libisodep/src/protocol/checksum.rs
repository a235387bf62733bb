// libisodep/src/protocol/checksum.rs

use crate::constants::CRC_A_INIT;

/// Compute CRC_A (ISO/IEC 14443-3) over `data`.
/// Preset 0x6363, reflected polynomial 0x8408, no final XOR.
/// Returned low byte first, the order it goes on the wire.
pub fn crc16a(data: &[u8]) -> [u8; 2] {
    let crc = data.iter().fold(CRC_A_INIT, |crc, &b| {
        let mut ch = b ^ (crc & 0xff) as u8;
        ch ^= ch << 4;
        let ch = ch as u16;
        (crc >> 8) ^ (ch << 8) ^ (ch << 3) ^ (ch >> 4)
    });
    crc.to_le_bytes()
}

/// Append CRC_A over the current contents of `frame`.
pub fn append_crc16a(frame: &mut Vec<u8>) {
    let crc = crc16a(frame);
    frame.extend_from_slice(&crc);
}
