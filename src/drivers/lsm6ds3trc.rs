//! LSM6DS3TR-C driver

use super::{ImuDriver, write_sequence};
use crate::Error;
use crate::fifo::lsm6ds3trc::{self as fifo, FifoStatus};
use crate::fifo::FifoReport;
use crate::interface::RegisterBus;
use crate::profile::{DeviceProfile, LSM6DS3TRC};
use crate::registers::lsm6ds3trc::{
    FIFO_DATA, FIFO_RESET_SEQUENCE, FIFO_STATUS, INIT_SEQUENCE, OUT_TEMP, SOFT_RESET,
};
use embedded_hal::delay::DelayNs;

/// LSM6DS3TR-C 6-axis IMU
///
/// Gyro and accel share one output rate and are written to the FIFO as
/// six-word units. An overrun discards the poll and flushes the FIFO.
pub struct Lsm6ds3trc<I> {
    bus: I,
}

impl<I> Lsm6ds3trc<I>
where
    I: RegisterBus,
{
    /// Create a driver over the given bus
    pub const fn new(bus: I) -> Self {
        Self { bus }
    }

    /// Consume the driver and return the underlying bus
    pub fn release(self) -> I {
        self.bus
    }

    /// Convert raw temperature to degrees Celsius
    #[must_use]
    pub fn temperature_to_celsius(raw: i16) -> f32 {
        f32::from(raw) / 256.0 + 25.0
    }

    /// Read and decode `FIFO_STATUS1`/`FIFO_STATUS2`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_status(&mut self) -> Result<FifoStatus, Error<I::Error>> {
        let raw = self.bus.read_reg16(FIFO_STATUS)?;
        Ok(FifoStatus::from_raw(raw))
    }

    /// Flush the FIFO by cycling it through bypass mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset_fifo(&mut self) -> Result<(), Error<I::Error>> {
        write_sequence(&mut self.bus, &FIFO_RESET_SEQUENCE)?;
        Ok(())
    }
}

impl<I> ImuDriver for Lsm6ds3trc<I>
where
    I: RegisterBus,
{
    type BusError = I::Error;

    const PROFILE: DeviceProfile = LSM6DS3TRC;

    fn detect(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.bus.read_reg(Self::PROFILE.who_am_i.register)?;
        if who_am_i != Self::PROFILE.who_am_i.value {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "{}: unexpected WHO_AM_I {:#x}",
                Self::PROFILE.name,
                who_am_i
            );
            return Err(Error::InvalidDevice(who_am_i));
        }
        Ok(())
    }

    fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I::Error>> {
        self.bus.write_reg(SOFT_RESET.address, SOFT_RESET.value)?;
        delay.delay_ms(Self::PROFILE.reset_settle_ms);

        write_sequence(&mut self.bus, &INIT_SEQUENCE)?;
        if Self::PROFILE.init_settle_ms > 0 {
            delay.delay_ms(Self::PROFILE.init_settle_ms);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: FIFO streaming configured", Self::PROFILE.name);
        Ok(())
    }

    fn direct_temperature(&mut self) -> Result<f32, Error<I::Error>> {
        #[allow(clippy::cast_possible_wrap)]
        let raw = self.bus.read_reg16(OUT_TEMP)? as i16;
        Ok(Self::temperature_to_celsius(raw))
    }

    fn bulk_read<A, G>(
        &mut self,
        mut on_accel: A,
        mut on_gyro: G,
    ) -> Result<FifoReport, Error<I::Error>>
    where
        A: FnMut([i16; 3], f32),
        G: FnMut([i16; 3], f32),
    {
        let status = self.read_fifo_status()?;

        if status.overrun {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "{}: FIFO overrun with {} words pending, flushing",
                Self::PROFILE.name,
                status.unread_words
            );
            self.reset_fifo()?;
            return Ok(FifoReport {
                overrun: true,
                ..FifoReport::default()
            });
        }

        let words = status.words_to_read();
        let mut report = FifoReport {
            truncated: usize::from(status.unread_words) > fifo::BUFFER_WORDS,
            ..FifoReport::default()
        };

        #[cfg(feature = "defmt")]
        if report.truncated {
            defmt::trace!(
                "{}: FIFO holds {} words, reading {}",
                Self::PROFILE.name,
                status.unread_words,
                words
            );
        }

        if words == 0 {
            return Ok(report);
        }

        let len = words * 2;
        let mut buffer = [0u8; fifo::BUFFER_CAPACITY];
        self.bus.read_bytes(FIFO_DATA, &mut buffer[..len])?;

        for entry in fifo::decode(&buffer[..len]) {
            report.entries += 1;

            on_gyro(entry.gyro, Self::PROFILE.gyro_period);
            report.gyro_samples += 1;

            on_accel(entry.accel, Self::PROFILE.accel_period);
            report.accel_samples += 1;
        }

        Ok(report)
    }
}
