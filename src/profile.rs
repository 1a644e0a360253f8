//! Static device descriptions
//!
//! A [`DeviceProfile`] carries everything a host loop needs to know about a
//! chip without talking to it: bus address, identity, the fixed sample
//! periods the FIFO is configured for, and the sensitivities matching the
//! configured full-scale ranges.

use crate::registers::{icm42688p, lsm6ds3trc};

/// Identity register and its expected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WhoAmI {
    /// Register address
    pub register: u8,
    /// Expected value
    pub value: u8,
}

/// Compile-time description of a supported device
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceProfile {
    /// Default 7-bit I2C address
    pub address: u8,
    /// Display name
    pub name: &'static str,
    /// Numeric sensor type identifier
    pub type_id: u8,
    /// Gyroscope sample period in seconds
    pub gyro_period: f32,
    /// Accelerometer sample period in seconds
    pub accel_period: f32,
    /// Magnetometer sample period in seconds, used by fusion consumers
    pub mag_period: f32,
    /// Gyroscope sensitivity in LSB/(°/s)
    pub gyro_sensitivity: f32,
    /// Accelerometer sensitivity in LSB/g
    pub accel_sensitivity: f32,
    /// Identity register
    pub who_am_i: WhoAmI,
    /// Wait after the soft reset before configuring, in milliseconds
    pub reset_settle_ms: u32,
    /// Wait after the configuration sequence, in milliseconds (0 = none)
    pub init_settle_ms: u32,
}

impl DeviceProfile {
    /// Gyroscope output data rate in Hz
    #[must_use]
    pub fn gyro_rate_hz(&self) -> f32 {
        1.0 / self.gyro_period
    }

    /// Accelerometer output data rate in Hz
    #[must_use]
    pub fn accel_rate_hz(&self) -> f32 {
        1.0 / self.accel_period
    }
}

/// ICM-42688-P: ±1000 dps gyro at 500 Hz, ±8 g accel at 100 Hz
pub const ICM42688P: DeviceProfile = DeviceProfile {
    address: icm42688p::I2C_ADDRESS_AD0_LOW,
    name: "ICM-42688-P",
    type_id: 12,
    gyro_period: 1.0 / 500.0,
    accel_period: 1.0 / 100.0,
    mag_period: 1.0 / 100.0,
    gyro_sensitivity: 32.8,
    accel_sensitivity: 4096.0,
    who_am_i: WhoAmI {
        register: icm42688p::WHO_AM_I,
        value: icm42688p::WHO_AM_I_VALUE,
    },
    reset_settle_ms: 20,
    init_settle_ms: 100,
};

/// LSM6DS3TR-C output rate shared by gyro and accel, as observed at the FIFO
const LSM6DS3TRC_RATE_HZ: f32 = 425.0;

/// LSM6DS3TR-C: ±1000 dps gyro and ±8 g accel, sampled together at 425 Hz
pub const LSM6DS3TRC: DeviceProfile = DeviceProfile {
    address: lsm6ds3trc::I2C_ADDRESS_SA0_LOW,
    name: "LSM6DS3TR-C",
    type_id: 11,
    gyro_period: 1.0 / LSM6DS3TRC_RATE_HZ,
    accel_period: 1.0 / LSM6DS3TRC_RATE_HZ,
    mag_period: 1.0 / LSM6DS3TRC_RATE_HZ,
    gyro_sensitivity: 28.571_428,
    accel_sensitivity: 4098.360_7,
    who_am_i: WhoAmI {
        register: lsm6ds3trc::WHO_AM_I,
        value: lsm6ds3trc::WHO_AM_I_VALUE,
    },
    reset_settle_ms: 20,
    init_settle_ms: 0,
};
