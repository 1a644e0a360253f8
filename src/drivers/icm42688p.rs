//! ICM-42688-P driver

use super::{ImuDriver, write_sequence};
use crate::Error;
use crate::fifo::{FifoReport, icm42688p as fifo};
use crate::interface::RegisterBus;
use crate::profile::{DeviceProfile, ICM42688P};
use crate::registers::icm42688p::{FIFO_COUNT, FIFO_DATA, INIT_SEQUENCE, SOFT_RESET, TEMP_DATA};
use embedded_hal::delay::DelayNs;

/// ICM-42688-P 6-axis IMU
///
/// Streams 16-byte accel + gyro packets through the FIFO. The accelerometer
/// runs at 100 Hz against a 500 Hz gyro, so packets without a fresh accel
/// sample are recognized by [`fifo::ACCEL_SENTINEL`] and only emit gyro.
pub struct Icm42688p<I> {
    bus: I,
}

impl<I> Icm42688p<I>
where
    I: RegisterBus,
{
    /// Create a driver over the given bus
    ///
    /// No bus traffic happens until [`ImuDriver::detect`] or
    /// [`ImuDriver::initialize`] is called.
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
        // Datasheet: Temperature in °C = (TEMP_DATA / 132.48) + 25
        f32::from(raw) / 132.48 + 25.0
    }

    /// Read the FIFO fill level in bytes
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_count(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.bus.read_reg16(FIFO_COUNT)?)
    }
}

impl<I> ImuDriver for Icm42688p<I>
where
    I: RegisterBus,
{
    type BusError = I::Error;

    const PROFILE: DeviceProfile = ICM42688P;

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
        let raw = self.bus.read_reg16(TEMP_DATA)? as i16;
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
        let count = self.read_fifo_count()?;
        let len = fifo::bytes_to_read(count);
        let mut report = FifoReport {
            truncated: usize::from(count) > fifo::BUFFER_CAPACITY,
            ..FifoReport::default()
        };

        #[cfg(feature = "defmt")]
        if report.truncated {
            defmt::trace!("{}: FIFO holds {} bytes, reading {}", Self::PROFILE.name, count, len);
        }

        if len == 0 {
            return Ok(report);
        }

        let mut buffer = [0u8; fifo::BUFFER_CAPACITY];
        self.bus.read_bytes(FIFO_DATA, &mut buffer[..len])?;

        for entry in fifo::decode(&buffer[..len]) {
            report.entries += 1;

            on_gyro(entry.gyro, Self::PROFILE.gyro_period);
            report.gyro_samples += 1;

            if fifo::accel_valid(&entry) {
                on_accel(entry.accel, Self::PROFILE.accel_period);
                report.accel_samples += 1;
            }
        }

        Ok(report)
    }
}
