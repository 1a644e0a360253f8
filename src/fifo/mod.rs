//! FIFO (First In First Out) record decoding
//!
//! Both supported devices queue samples in an onboard FIFO between polls.
//! Each poll reads a whole number of fixed-size FIFO entries in one burst and
//! decodes them with the device-specific rules in [`icm42688p`] and
//! [`lsm6ds3trc`]:
//!
//! | Device      | Entry      | Layout (little-endian)                          | Special rule        |
//! |-------------|------------|-------------------------------------------------|---------------------|
//! | ICM-42688-P | 16 bytes   | header, accel, gyro, temp (1 byte), timestamp   | accel sentinel      |
//! | LSM6DS3TR-C | 6 words    | gyro, accel                                     | overrun flush       |
//!
//! Decoding works on exact-size chunks only, so a short or malformed buffer
//! never yields a partial entry.

pub mod icm42688p;
pub mod lsm6ds3trc;

/// Largest number of entries a single poll can decode on any supported device
pub const MAX_BATCH_ENTRIES: usize = 10;

/// One decoded FIFO entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoEntry {
    /// Accelerometer X, Y, Z (raw)
    pub accel: [i16; 3],
    /// Gyroscope X, Y, Z (raw)
    pub gyro: [i16; 3],
    /// Temperature (raw), if the entry carries one
    pub temperature: Option<u16>,
    /// Sample timestamp (raw), if the entry carries one
    pub timestamp: Option<u16>,
}

/// Outcome of one `bulk_read` poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoReport {
    /// Number of FIFO entries decoded
    pub entries: usize,
    /// Number of gyroscope samples delivered
    pub gyro_samples: usize,
    /// Number of accelerometer samples delivered
    pub accel_samples: usize,
    /// The device held more data than one poll reads; the rest stays queued
    pub truncated: bool,
    /// The FIFO had overrun and was flushed; this poll's data is lost
    pub overrun: bool,
}

/// Samples collected from one poll
///
/// Gyro and accel counts differ when the device drops invalid accel samples.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleBatch {
    /// Gyroscope samples in FIFO order
    pub gyro: heapless::Vec<[i16; 3], MAX_BATCH_ENTRIES>,
    /// Accelerometer samples in FIFO order
    pub accel: heapless::Vec<[i16; 3], MAX_BATCH_ENTRIES>,
    /// Gyroscope sample period in seconds
    pub gyro_period: f32,
    /// Accelerometer sample period in seconds
    pub accel_period: f32,
    /// Poll outcome
    pub report: FifoReport,
}

impl SampleBatch {
    /// `true` when the poll delivered no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gyro.is_empty() && self.accel.is_empty()
    }
}

/// Decode three consecutive little-endian `i16` values starting at `offset`
pub(crate) fn axes_le(data: &[u8], offset: usize) -> [i16; 3] {
    [
        i16::from_le_bytes([data[offset], data[offset + 1]]),
        i16::from_le_bytes([data[offset + 2], data[offset + 3]]),
        i16::from_le_bytes([data[offset + 4], data[offset + 5]]),
    ]
}
