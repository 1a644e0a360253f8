//! ICM-42688-P FIFO packet decoding
//!
//! With accel and gyro enabled the FIFO emits 16-byte "packet 3" records:
//!
//! | Offset | Size | Field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 1    | packet header (ignored)                 |
//! | 1      | 6    | accel X, Y, Z                           |
//! | 7      | 6    | gyro X, Y, Z                            |
//! | 13     | 1    | temperature                             |
//! | 14     | 2    | timestamp                               |
//!
//! Multi-byte fields are little-endian as configured by `INTF_CONFIG0`.

use super::{FifoEntry, axes_le};

/// Size of one FIFO packet in bytes
pub const ENTRY_SIZE: usize = 16;

/// Packets read per poll at most
pub const BUFFER_ENTRIES: usize = 8;

/// Local burst buffer capacity in bytes
pub const BUFFER_CAPACITY: usize = BUFFER_ENTRIES * ENTRY_SIZE;

/// Offset of the accel X low byte
pub const ACCEL_OFFSET: usize = 1;
/// Offset of the gyro X low byte
pub const GYRO_OFFSET: usize = 7;
/// Offset of the temperature byte
pub const TEMP_OFFSET: usize = 13;
/// Offset of the timestamp low byte
pub const TIMESTAMP_OFFSET: usize = 14;

/// Accel X value marking a packet without valid accel data
///
/// The accelerometer runs at a fifth of the gyro rate, so most packets carry
/// gyro data only and hold this value in the accel slots.
pub const ACCEL_SENTINEL: i16 = i16::MIN;

/// Number of bytes to burst-read for a reported FIFO byte count
///
/// Clamped to [`BUFFER_CAPACITY`] and rounded down to whole packets.
#[must_use]
pub fn bytes_to_read(fifo_count: u16) -> usize {
    usize::from(fifo_count).min(BUFFER_CAPACITY) / ENTRY_SIZE * ENTRY_SIZE
}

/// Decode one 16-byte packet
#[must_use]
pub fn decode_entry(packet: &[u8; ENTRY_SIZE]) -> FifoEntry {
    FifoEntry {
        accel: axes_le(packet, ACCEL_OFFSET),
        gyro: axes_le(packet, GYRO_OFFSET),
        temperature: Some(u16::from(packet[TEMP_OFFSET])),
        timestamp: Some(u16::from_le_bytes([
            packet[TIMESTAMP_OFFSET],
            packet[TIMESTAMP_OFFSET + 1],
        ])),
    }
}

/// `true` if the packet carries a valid accel sample
#[must_use]
pub const fn accel_valid(entry: &FifoEntry) -> bool {
    entry.accel[0] != ACCEL_SENTINEL
}

/// Decode every whole packet in `data`, in FIFO order
pub fn decode(data: &[u8]) -> impl Iterator<Item = FifoEntry> + '_ {
    data.chunks_exact(ENTRY_SIZE).map(|chunk| {
        let mut packet = [0u8; ENTRY_SIZE];
        packet.copy_from_slice(chunk);
        decode_entry(&packet)
    })
}
