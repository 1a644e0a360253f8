//! Register definitions for the supported IMUs
//!
//! Each device module lists the register addresses the driver touches, the
//! bit positions of the fields it configures, and the exact values written
//! during initialization. `INIT_SEQUENCE` is the ordered power-on
//! configuration: it is written after the soft reset and its settle delay,
//! configuration registers first, FIFO and power enables last.

/// One register write of a configuration sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterWrite {
    /// Register address
    pub address: u8,
    /// Value written to the register
    pub value: u8,
}

impl RegisterWrite {
    /// Create a register write
    pub const fn new(address: u8, value: u8) -> Self {
        Self { address, value }
    }
}

/// ICM-42688-P register map (user bank 0)
///
/// Configured for ±8 g / 100 Hz accelerometer and ±1000 dps / 500 Hz
/// gyroscope, streaming 16-byte accel + gyro packets into the FIFO.
pub mod icm42688p {
    use super::RegisterWrite;

    /// I2C address when AD0 pin is low
    pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;
    /// I2C address when AD0 pin is high
    pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

    /// `WHO_AM_I` register
    pub const WHO_AM_I: u8 = 0x75;
    /// Expected value of `WHO_AM_I`
    pub const WHO_AM_I_VALUE: u8 = 0x47;

    /// `DEVICE_CONFIG` - soft reset
    pub const DEVICE_CONFIG: u8 = 0x11;
    /// `FIFO_CONFIG` - FIFO mode
    pub const FIFO_CONFIG: u8 = 0x16;
    /// `TEMP_DATA1` - die temperature, 16 bits
    pub const TEMP_DATA: u8 = 0x1D;
    /// `FIFO_COUNTH` - FIFO fill level in bytes, 16 bits
    pub const FIFO_COUNT: u8 = 0x2E;
    /// `FIFO_DATA` - FIFO read port
    pub const FIFO_DATA: u8 = 0x30;
    /// `INTF_CONFIG0` - interface byte order and FIFO count units
    pub const INTF_CONFIG0: u8 = 0x4C;
    /// `PWR_MGMT0` - sensor power modes
    pub const PWR_MGMT0: u8 = 0x4E;
    /// `GYRO_CONFIG0` - gyro full scale and ODR
    pub const GYRO_CONFIG0: u8 = 0x4F;
    /// `ACCEL_CONFIG0` - accel full scale and ODR
    pub const ACCEL_CONFIG0: u8 = 0x50;
    /// `FIFO_CONFIG1` - FIFO packet sources
    pub const FIFO_CONFIG1: u8 = 0x5F;

    /// `DEVICE_CONFIG.SOFT_RESET_CONFIG`
    pub const DEVICE_CONFIG_SOFT_RESET: u8 = 1;

    /// `INTF_CONFIG0` value
    ///
    /// `FIFO_COUNT_REC` (bit 6), `FIFO_COUNT_ENDIAN` (bit 5) and
    /// `SENSOR_DATA_ENDIAN` (bit 4) all cleared: FIFO count in bytes, count and
    /// sensor data little-endian.
    pub const INTF_CONFIG0_VALUE: u8 = 0x00;

    /// `GYRO_FS_SEL` field position
    pub const GYRO_FS_SEL_SHIFT: u8 = 5;
    /// `GYRO_FS_SEL` = ±1000 dps
    pub const GYRO_FS_1000DPS: u8 = 0b001;
    /// `GYRO_ODR` = 500 Hz
    pub const GYRO_ODR_500HZ: u8 = 0b1111;
    /// `GYRO_CONFIG0` value
    pub const GYRO_CONFIG0_VALUE: u8 = (GYRO_FS_1000DPS << GYRO_FS_SEL_SHIFT) | GYRO_ODR_500HZ;

    /// `ACCEL_FS_SEL` field position
    pub const ACCEL_FS_SEL_SHIFT: u8 = 5;
    /// `ACCEL_FS_SEL` = ±8 g
    pub const ACCEL_FS_8G: u8 = 0b001;
    /// `ACCEL_ODR` = 100 Hz
    pub const ACCEL_ODR_100HZ: u8 = 0b1000;
    /// `ACCEL_CONFIG0` value
    pub const ACCEL_CONFIG0_VALUE: u8 = (ACCEL_FS_8G << ACCEL_FS_SEL_SHIFT) | ACCEL_ODR_100HZ;

    /// `FIFO_MODE` field position
    pub const FIFO_MODE_SHIFT: u8 = 6;
    /// `FIFO_MODE` = stream-to-FIFO
    pub const FIFO_MODE_STREAM: u8 = 0b01;
    /// `FIFO_CONFIG` value
    pub const FIFO_CONFIG_VALUE: u8 = FIFO_MODE_STREAM << FIFO_MODE_SHIFT;

    /// `FIFO_ACCEL_EN`
    pub const FIFO_ACCEL_EN: u8 = 0b001;
    /// `FIFO_GYRO_EN`
    pub const FIFO_GYRO_EN: u8 = 0b010;
    /// `FIFO_TEMP_EN`
    pub const FIFO_TEMP_EN: u8 = 0b100;
    /// `FIFO_CONFIG1` value: accel and gyro packets, temperature not requested
    pub const FIFO_CONFIG1_VALUE: u8 = FIFO_ACCEL_EN | FIFO_GYRO_EN;

    /// `GYRO_MODE`/`ACCEL_MODE` = low noise
    pub const MODE_LOW_NOISE: u8 = 0b11;
    /// `GYRO_MODE` field position
    pub const GYRO_MODE_SHIFT: u8 = 2;
    /// `PWR_MGMT0` value: accel and gyro in low-noise mode
    pub const PWR_MGMT0_VALUE: u8 = MODE_LOW_NOISE | (MODE_LOW_NOISE << GYRO_MODE_SHIFT);

    /// Soft reset, issued before the reset settle delay
    pub const SOFT_RESET: RegisterWrite =
        RegisterWrite::new(DEVICE_CONFIG, DEVICE_CONFIG_SOFT_RESET);

    /// Configuration written after the soft reset, in order
    pub const INIT_SEQUENCE: [RegisterWrite; 6] = [
        RegisterWrite::new(INTF_CONFIG0, INTF_CONFIG0_VALUE),
        RegisterWrite::new(GYRO_CONFIG0, GYRO_CONFIG0_VALUE),
        RegisterWrite::new(ACCEL_CONFIG0, ACCEL_CONFIG0_VALUE),
        RegisterWrite::new(FIFO_CONFIG, FIFO_CONFIG_VALUE),
        RegisterWrite::new(FIFO_CONFIG1, FIFO_CONFIG1_VALUE),
        RegisterWrite::new(PWR_MGMT0, PWR_MGMT0_VALUE),
    ];
}

/// LSM6DS3TR-C register map
///
/// Configured for ±8 g accelerometer and ±1000 dps gyroscope, both at
/// 416 Hz, with the FIFO in continuous mode.
pub mod lsm6ds3trc {
    use super::RegisterWrite;

    /// I2C address when SA0 pin is low
    pub const I2C_ADDRESS_SA0_LOW: u8 = 0x6A;
    /// I2C address when SA0 pin is high
    pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x6B;

    /// `WHO_AM_I` register
    pub const WHO_AM_I: u8 = 0x0F;
    /// Expected value of `WHO_AM_I`
    pub const WHO_AM_I_VALUE: u8 = 0x6A;

    /// `FIFO_CTRL3` - FIFO decimation
    pub const FIFO_CTRL3: u8 = 0x08;
    /// `FIFO_CTRL5` - FIFO ODR and mode
    pub const FIFO_CTRL5: u8 = 0x0A;
    /// `CTRL1_XL` - accel full scale and ODR
    pub const CTRL1_XL: u8 = 0x10;
    /// `CTRL2_G` - gyro full scale and ODR
    pub const CTRL2_G: u8 = 0x11;
    /// `CTRL3_C` - reset, block data update, auto-increment
    pub const CTRL3_C: u8 = 0x12;
    /// `OUT_TEMP_L` - die temperature, 16 bits
    pub const OUT_TEMP: u8 = 0x20;
    /// `FIFO_STATUS1` - unread words and flags, 16 bits with `FIFO_STATUS2`
    pub const FIFO_STATUS: u8 = 0x3A;
    /// `FIFO_DATA_OUT_L` - FIFO read port
    pub const FIFO_DATA: u8 = 0x3E;

    /// Shared ODR code for 416 Hz
    pub const ODR_416HZ: u8 = 0b0110;
    /// `ODR_XL`/`ODR_G` field position
    pub const ODR_SHIFT: u8 = 4;
    /// `FS_XL`/`FS_G` field position
    pub const FS_SHIFT: u8 = 2;

    /// `FS_XL` = ±8 g
    pub const ACCEL_FS_8G: u8 = 0b11;
    /// `CTRL1_XL` value
    pub const CTRL1_XL_VALUE: u8 = (ACCEL_FS_8G << FS_SHIFT) | (ODR_416HZ << ODR_SHIFT);

    /// `FS_G` = ±1000 dps
    pub const GYRO_FS_1000DPS: u8 = 0b10;
    /// `CTRL2_G` value
    pub const CTRL2_G_VALUE: u8 = (GYRO_FS_1000DPS << FS_SHIFT) | (ODR_416HZ << ODR_SHIFT);

    /// `CTRL3_C.SW_RESET`
    pub const CTRL3_C_SW_RESET: u8 = 1;
    /// `CTRL3_C.IF_INC`
    pub const CTRL3_C_IF_INC: u8 = 1 << 2;
    /// `CTRL3_C.BDU`
    pub const CTRL3_C_BDU: u8 = 1 << 6;
    /// `CTRL3_C` value
    pub const CTRL3_C_VALUE: u8 = CTRL3_C_BDU | CTRL3_C_IF_INC;

    /// `DEC_FIFO_XL`/`DEC_FIFO_GYRO` = no decimation
    pub const FIFO_NO_DECIMATION: u8 = 0b001;
    /// `DEC_FIFO_GYRO` field position
    pub const DEC_FIFO_GYRO_SHIFT: u8 = 3;
    /// `FIFO_CTRL3` value: gyro and accel written to the FIFO undecimated
    pub const FIFO_CTRL3_VALUE: u8 =
        FIFO_NO_DECIMATION | (FIFO_NO_DECIMATION << DEC_FIFO_GYRO_SHIFT);

    /// `FIFO_MODE` = continuous
    pub const FIFO_MODE_CONTINUOUS: u8 = 0b110;
    /// `ODR_FIFO` = 833 Hz
    pub const FIFO_ODR_833HZ: u8 = 0b0111;
    /// `ODR_FIFO` field position
    pub const FIFO_ODR_SHIFT: u8 = 3;
    /// `FIFO_CTRL5` value
    pub const FIFO_CTRL5_VALUE: u8 = FIFO_MODE_CONTINUOUS | (FIFO_ODR_833HZ << FIFO_ODR_SHIFT);
    /// `FIFO_CTRL5` value that puts the FIFO in bypass mode, clearing it
    pub const FIFO_CTRL5_BYPASS: u8 = 0;

    /// Soft reset, issued before the reset settle delay
    pub const SOFT_RESET: RegisterWrite = RegisterWrite::new(CTRL3_C, CTRL3_C_SW_RESET);

    /// Configuration written after the soft reset, in order
    pub const INIT_SEQUENCE: [RegisterWrite; 5] = [
        RegisterWrite::new(CTRL1_XL, CTRL1_XL_VALUE),
        RegisterWrite::new(CTRL2_G, CTRL2_G_VALUE),
        RegisterWrite::new(CTRL3_C, CTRL3_C_VALUE),
        RegisterWrite::new(FIFO_CTRL3, FIFO_CTRL3_VALUE),
        RegisterWrite::new(FIFO_CTRL5, FIFO_CTRL5_VALUE),
    ];

    /// Overrun recovery: bypass then continuous mode, flushing the FIFO
    pub const FIFO_RESET_SEQUENCE: [RegisterWrite; 2] = [
        RegisterWrite::new(FIFO_CTRL5, FIFO_CTRL5_BYPASS),
        RegisterWrite::new(FIFO_CTRL5, FIFO_CTRL5_VALUE),
    ];
}
