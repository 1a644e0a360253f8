//! LSM6DS3TR-C FIFO decoding
//!
//! The FIFO is read as 16-bit little-endian words. With gyro and accel both
//! undecimated, each measurement unit is six words: gyro X, Y, Z followed by
//! accel X, Y, Z. The 16-bit status read from `FIFO_STATUS1`/`FIFO_STATUS2`
//! carries the unread word count and the overrun flag.

use super::{FifoEntry, axes_le};

/// Words in one measurement unit
pub const WORDS_PER_ENTRY: usize = 6;

/// Size of one measurement unit in bytes
pub const ENTRY_SIZE: usize = WORDS_PER_ENTRY * 2;

/// Local burst buffer capacity in words
pub const BUFFER_WORDS: usize = 60;

/// Measurement units read per poll at most
pub const BUFFER_ENTRIES: usize = BUFFER_WORDS / WORDS_PER_ENTRY;

/// Local burst buffer capacity in bytes
pub const BUFFER_CAPACITY: usize = BUFFER_WORDS * 2;

/// Status bit set when the FIFO has overrun (`FIFO_STATUS2.OVER_RUN`)
pub const OVERRUN_MASK: u16 = 1 << 14;

/// Status bits holding the number of unread words (`DIFF_FIFO[10:0]`)
pub const UNREAD_WORDS_MASK: u16 = 0x07FF;

/// Word offset of gyro X within a unit
pub const GYRO_WORD: usize = 0;
/// Word offset of accel X within a unit
pub const ACCEL_WORD: usize = 3;

/// Decoded FIFO status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoStatus {
    /// FIFO overrun; unread data has been overwritten
    pub overrun: bool,
    /// Unread 16-bit words
    pub unread_words: u16,
}

impl FifoStatus {
    /// Decode the 16-bit status value
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            overrun: raw & OVERRUN_MASK != 0,
            unread_words: raw & UNREAD_WORDS_MASK,
        }
    }

    /// Number of words to burst-read
    ///
    /// Clamped to [`BUFFER_WORDS`] and rounded down to whole units.
    #[must_use]
    pub fn words_to_read(&self) -> usize {
        usize::from(self.unread_words).min(BUFFER_WORDS) / WORDS_PER_ENTRY * WORDS_PER_ENTRY
    }
}

/// Decode one six-word unit
#[must_use]
pub fn decode_entry(unit: &[u8; ENTRY_SIZE]) -> FifoEntry {
    FifoEntry {
        gyro: axes_le(unit, GYRO_WORD * 2),
        accel: axes_le(unit, ACCEL_WORD * 2),
        temperature: None,
        timestamp: None,
    }
}

/// Decode every whole unit in `data`, in FIFO order
pub fn decode(data: &[u8]) -> impl Iterator<Item = FifoEntry> + '_ {
    data.chunks_exact(ENTRY_SIZE).map(|chunk| {
        let mut unit = [0u8; ENTRY_SIZE];
        unit.copy_from_slice(chunk);
        decode_entry(&unit)
    })
}
