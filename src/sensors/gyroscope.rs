//! Gyroscope data types

use crate::profile::DeviceProfile;

const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Gyroscope data in degrees per second
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataDps {
    /// X-axis rotation rate in °/s
    pub x: f32,
    /// Y-axis rotation rate in °/s
    pub y: f32,
    /// Z-axis rotation rate in °/s
    pub z: f32,
}

impl GyroDataDps {
    /// Convert a raw sample using the profile's sensitivity in LSB/(°/s)
    #[must_use]
    pub fn from_raw(raw: [i16; 3], profile: &DeviceProfile) -> Self {
        Self::from_counts(raw.map(f32::from), profile)
    }

    /// Convert offset-corrected counts (see [`GyroCalibration::apply`])
    ///
    /// [`GyroCalibration::apply`]: crate::GyroCalibration::apply
    #[must_use]
    pub fn from_counts(counts: [f32; 3], profile: &DeviceProfile) -> Self {
        let [x, y, z] = counts.map(|c| c / profile.gyro_sensitivity);
        Self { x, y, z }
    }

    /// Convert to radians per second
    #[must_use]
    pub fn to_radians_per_sec(&self) -> GyroDataRps {
        GyroDataRps {
            x: self.x * DEG_TO_RAD,
            y: self.y * DEG_TO_RAD,
            z: self.z * DEG_TO_RAD,
        }
    }

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Gyroscope data in radians per second
///
/// This is the unit fusion filters consume.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataRps {
    /// X-axis rotation rate in rad/s
    pub x: f32,
    /// Y-axis rotation rate in rad/s
    pub y: f32,
    /// Z-axis rotation rate in rad/s
    pub z: f32,
}

impl GyroDataRps {
    /// Convert a raw sample: `raw * (π/180) / sensitivity`
    #[must_use]
    pub fn from_raw(raw: [i16; 3], profile: &DeviceProfile) -> Self {
        GyroDataDps::from_raw(raw, profile).to_radians_per_sec()
    }

    /// Convert offset-corrected counts
    #[must_use]
    pub fn from_counts(counts: [f32; 3], profile: &DeviceProfile) -> Self {
        GyroDataDps::from_counts(counts, profile).to_radians_per_sec()
    }

    /// Convert to degrees per second
    #[must_use]
    pub fn to_degrees_per_sec(&self) -> GyroDataDps {
        const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;
        GyroDataDps {
            x: self.x * RAD_TO_DEG,
            y: self.y * RAD_TO_DEG,
            z: self.z * RAD_TO_DEG,
        }
    }

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Components as an array
    #[must_use]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}
