//! Gyroscope offset calibration

use crate::Error;
use crate::drivers::ImuDriver;
use embedded_hal::delay::DelayNs;

/// Gyroscope bias, in raw LSB
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroCalibration {
    /// Per-axis offset subtracted from raw samples
    pub offset: [f32; 3],
    /// Die temperature when the offset was measured, in °C
    pub temperature: f32,
}

impl GyroCalibration {
    /// Apply calibration to a raw gyroscope sample
    #[must_use]
    pub fn apply(&self, raw: [i16; 3]) -> [f32; 3] {
        [
            f32::from(raw[0]) - self.offset[0],
            f32::from(raw[1]) - self.offset[1],
            f32::from(raw[2]) - self.offset[2],
        ]
    }
}

/// Parameters for [`calibrate_gyro_offset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroCalibrationConfig {
    /// Gyro samples to average
    pub samples: u16,
    /// Polls discarded before sampling while the sensor settles
    pub warmup_polls: u16,
    /// Wait between polls in milliseconds
    pub poll_interval_ms: u32,
    /// Poll budget for the whole run, warm-up included
    pub max_polls: u16,
}

impl Default for GyroCalibrationConfig {
    fn default() -> Self {
        Self {
            samples: 200,
            warmup_polls: 50,
            poll_interval_ms: 5,
            max_polls: 2000,
        }
    }
}

/// Measure the gyroscope bias of a stationary device
///
/// Polls [`ImuDriver::bulk_read`] for `warmup_polls` discarding samples,
/// records the die temperature, then averages the first `samples` gyro
/// samples. Accel samples are ignored. The device must be initialized and
/// must stay still for the duration.
///
/// # Errors
///
/// Returns:
/// - [`Error::InvalidConfig`] if `samples` is zero
/// - [`Error::CalibrationTimeout`] if `max_polls` runs out first
/// - [`Error::Bus`] if communication with the device fails
pub fn calibrate_gyro_offset<D>(
    driver: &mut D,
    delay: &mut impl DelayNs,
    config: &GyroCalibrationConfig,
) -> Result<GyroCalibration, Error<D::BusError>>
where
    D: ImuDriver,
{
    if config.samples == 0 {
        return Err(Error::InvalidConfig);
    }

    let mut polls: u16 = 0;

    for _ in 0..config.warmup_polls {
        if polls >= config.max_polls {
            return Err(Error::CalibrationTimeout);
        }
        driver.bulk_read(|_, _| {}, |_, _| {})?;
        polls += 1;
        delay.delay_ms(config.poll_interval_ms);
    }

    let temperature = driver.direct_temperature()?;

    let target = u32::from(config.samples);
    let mut collected: u32 = 0;
    let mut sum = [0i64; 3];

    while collected < target {
        if polls >= config.max_polls {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Gyro calibration timed out with {}/{} samples",
                collected,
                target
            );
            return Err(Error::CalibrationTimeout);
        }
        driver.bulk_read(
            |_, _| {},
            |gyro, _| {
                if collected < target {
                    for (acc, value) in sum.iter_mut().zip(gyro) {
                        *acc += i64::from(value);
                    }
                    collected += 1;
                }
            },
        )?;
        polls += 1;
        if collected < target {
            delay.delay_ms(config.poll_interval_ms);
        }
    }

    // Sums of at most u16::MAX i16 values are exact in f64
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let offset = sum.map(|s| (s as f64 / f64::from(target)) as f32);

    #[cfg(feature = "defmt")]
    defmt::info!(
        "Gyro calibration: offset [{}, {}, {}] at {} C",
        offset[0],
        offset[1],
        offset[2],
        temperature
    );

    Ok(GyroCalibration {
        offset,
        temperature,
    })
}
