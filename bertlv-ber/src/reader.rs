//! Sequential reader over concatenated triplets
//!
//! # Usage Example
//!
//! ```rust
//! use bertlv_ber::TripletReader;
//!
//! let data = [0x02, 0x01, 0x05, 0x04, 0x02, 0x68, 0x69];
//! let mut reader = TripletReader::new(&data);
//! let integer = reader.next_triplet()?;
//! assert_eq!(integer.value(), &[0x05]);
//! let octets = reader.next_triplet()?;
//! assert_eq!(octets.value(), b"hi");
//! assert!(!reader.has_remaining());
//! # Ok::<(), bertlv_core::BerError>(())
//! ```

use bertlv_core::BerResult;

use crate::triplet::Triplet;

/// Reader that decodes one [`Triplet`] after another from a byte buffer
///
/// # Position Tracking
///
/// The reader keeps a position that advances past each decoded triplet. A
/// failed decode leaves the position where it was, so the caller can report
/// the offset of the malformed unit.
pub struct TripletReader<'a> {
    buffer: &'a [u8],
    position: usize,
    failed: bool,
}

impl<'a> TripletReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
            failed: false,
        }
    }

    /// Get current position in buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Check if there is more data to decode
    pub fn has_remaining(&self) -> bool {
        self.position < self.buffer.len()
    }

    /// Decode the triplet at the current position
    pub fn next_triplet(&mut self) -> BerResult<Triplet> {
        let (triplet, consumed) = Triplet::decode(&self.buffer[self.position..])?;
        self.position += consumed;
        Ok(triplet)
    }
}

/// Yields triplets until the buffer is exhausted; after an error the
/// iterator is fused and yields nothing more.
impl Iterator for TripletReader<'_> {
    type Item = BerResult<Triplet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.has_remaining() {
            return None;
        }
        let result = self.next_triplet();
        self.failed = result.is_err();
        Some(result)
    }
}
