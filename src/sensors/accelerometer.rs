//! Accelerometer data types

use crate::profile::DeviceProfile;

/// Standard gravity in m/s²
pub const STANDARD_GRAVITY: f32 = 9.806_65;

/// Accelerometer data in g
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataG {
    /// X-axis acceleration in g
    pub x: f32,
    /// Y-axis acceleration in g
    pub y: f32,
    /// Z-axis acceleration in g
    pub z: f32,
}

impl AccelDataG {
    /// Convert a raw sample using the profile's sensitivity in LSB/g
    #[must_use]
    pub fn from_raw(raw: [i16; 3], profile: &DeviceProfile) -> Self {
        let [x, y, z] = raw.map(|r| f32::from(r) / profile.accel_sensitivity);
        Self { x, y, z }
    }

    /// Convert to m/s²
    #[must_use]
    pub fn to_mps2(&self) -> AccelDataMps2 {
        AccelDataMps2 {
            x: self.x * STANDARD_GRAVITY,
            y: self.y * STANDARD_GRAVITY,
            z: self.z * STANDARD_GRAVITY,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Accelerometer data in m/s²
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataMps2 {
    /// X-axis acceleration in m/s²
    pub x: f32,
    /// Y-axis acceleration in m/s²
    pub y: f32,
    /// Z-axis acceleration in m/s²
    pub z: f32,
}

impl AccelDataMps2 {
    /// Convert a raw sample: `raw * 9.80665 / sensitivity`
    #[must_use]
    pub fn from_raw(raw: [i16; 3], profile: &DeviceProfile) -> Self {
        AccelDataG::from_raw(raw, profile).to_mps2()
    }

    /// Get the magnitude of the acceleration vector
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
