// libisodep/src/transport/traits.rs

use crate::LinkError;

/// Transport abstracts the reader chip away from the block protocol.
///
/// One call is one half-duplex exchange on the RF link: the PCD transmits
/// `tx_bits` bits of `tx`, then waits up to `timeout_ms` for the PICC's
/// answer. Anticollision, modulation and CRC generation on the chip side
/// are the implementation's business; frames handed in already carry
/// CRC_A and answers are returned with theirs.
pub trait Transport {
    /// Transmit and receive into `rx`. Returns the number of bits received;
    /// the receive capacity is `rx.len() * 8` bits.
    fn exchange(
        &mut self,
        tx: &[u8],
        tx_bits: usize,
        rx: &mut [u8],
        timeout_ms: u64,
    ) -> Result<usize, LinkError>;

    /// Exchange a whole number of bytes. Default implementation forwards to
    /// `exchange` with `tx.len() * 8` bits.
    fn exchange_bytes(
        &mut self,
        tx: &[u8],
        rx: &mut [u8],
        timeout_ms: u64,
    ) -> Result<usize, LinkError> {
        self.exchange(tx, tx.len() * 8, rx, timeout_ms)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn exchange(
        &mut self,
        tx: &[u8],
        tx_bits: usize,
        rx: &mut [u8],
        timeout_ms: u64,
    ) -> Result<usize, LinkError> {
        (**self).exchange(tx, tx_bits, rx, timeout_ms)
    }
}
