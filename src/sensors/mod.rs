//! Sensor data conversion and calibration
//!
//! This module converts raw FIFO samples into physical units using the
//! sensitivities in a [`DeviceProfile`](crate::DeviceProfile), and provides a
//! driver-agnostic gyroscope offset calibration built on
//! [`ImuDriver::bulk_read`](crate::ImuDriver::bulk_read).

pub mod accelerometer;
pub mod calibration;
pub mod gyroscope;

// Re-export main types
pub use accelerometer::{AccelDataG, AccelDataMps2};
pub use calibration::{GyroCalibration, GyroCalibrationConfig, calibrate_gyro_offset};
pub use gyroscope::{GyroDataDps, GyroDataRps};
