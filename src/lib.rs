#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod drivers;
pub mod fifo;
pub mod interface;
pub mod profile;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use drivers::{Icm42688p, ImuDriver, Lsm6ds3trc};
pub use fifo::{FifoEntry, FifoReport, MAX_BATCH_ENTRIES, SampleBatch};
pub use interface::{I2cInterface, RegisterBus, SpiInterface};
pub use profile::{DeviceProfile, WhoAmI};
pub use registers::RegisterWrite;
pub use sensors::{
    AccelDataG, AccelDataMps2, GyroCalibration, GyroCalibrationConfig, GyroDataDps, GyroDataRps,
    calibrate_gyro_offset,
};

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// Invalid configuration parameter
    InvalidConfig,
    /// Calibration did not collect enough samples within its poll budget
    CalibrationTimeout,
    /// A poll produced more samples than a [`SampleBatch`] can hold
    FifoOverflow,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
