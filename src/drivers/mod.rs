//! Device drivers
//!
//! Every supported IMU implements [`ImuDriver`], so a host loop can be written
//! once against the trait and run on either chip:
//!
//! ```rust,ignore
//! fn poll<D: ImuDriver>(imu: &mut D) -> Result<(), Error<D::BusError>> {
//!     imu.bulk_read(
//!         |accel, period| fusion.push_accel(accel, period),
//!         |gyro, period| fusion.push_gyro(gyro, period),
//!     )?;
//!     Ok(())
//! }
//! ```

pub mod icm42688p;
pub mod lsm6ds3trc;

pub use icm42688p::Icm42688p;
pub use lsm6ds3trc::Lsm6ds3trc;

use crate::fifo::{FifoReport, SampleBatch};
use crate::interface::RegisterBus;
use crate::profile::DeviceProfile;
use crate::registers::RegisterWrite;
use crate::Error;
use embedded_hal::delay::DelayNs;

/// Uniform contract implemented by every supported IMU
pub trait ImuDriver {
    /// Error type of the underlying transport
    type BusError;

    /// Static description of the device
    const PROFILE: DeviceProfile;

    /// Check the identity register
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] with the value read when it does not
    /// match the profile, or [`Error::Bus`] if the read fails.
    fn detect(&mut self) -> Result<(), Error<Self::BusError>>;

    /// Reset the device and apply the fixed FIFO streaming configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bus`] on the first failed write; the remaining
    /// configuration is not applied.
    fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<Self::BusError>>;

    /// Read the die temperature register, in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bus`] if the read fails.
    fn direct_temperature(&mut self) -> Result<f32, Error<Self::BusError>>;

    /// Drain one bounded burst of FIFO data
    ///
    /// `on_gyro` and `on_accel` receive each decoded sample and the sample
    /// period in seconds, in FIFO order. The data read is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bus`] if any bus transaction fails. Callbacks already
    /// invoked are not rolled back.
    fn bulk_read<A, G>(
        &mut self,
        on_accel: A,
        on_gyro: G,
    ) -> Result<FifoReport, Error<Self::BusError>>
    where
        A: FnMut([i16; 3], f32),
        G: FnMut([i16; 3], f32);

    /// Poll once and collect the samples into a [`SampleBatch`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bus`] if the poll fails, or [`Error::FifoOverflow`] if
    /// the poll produced more samples than the batch can hold.
    fn read_batch(&mut self) -> Result<SampleBatch, Error<Self::BusError>> {
        let mut batch = SampleBatch {
            gyro_period: Self::PROFILE.gyro_period,
            accel_period: Self::PROFILE.accel_period,
            ..SampleBatch::default()
        };
        let mut gyro_overflow = false;
        let mut accel_overflow = false;

        let gyro = &mut batch.gyro;
        let accel = &mut batch.accel;
        let report = self.bulk_read(
            |sample, _| accel_overflow |= accel.push(sample).is_err(),
            |sample, _| gyro_overflow |= gyro.push(sample).is_err(),
        )?;

        if gyro_overflow || accel_overflow {
            return Err(Error::FifoOverflow);
        }
        batch.report = report;
        Ok(batch)
    }
}

/// Write each register in order, stopping at the first failure
pub(crate) fn write_sequence<I: RegisterBus>(
    bus: &mut I,
    sequence: &[RegisterWrite],
) -> Result<(), I::Error> {
    for write in sequence {
        bus.write_reg(write.address, write.value)?;
    }
    Ok(())
}
