//! Bus interface implementations for the supported IMUs
//!
//! This module provides implementations of the `device-driver` register
//! interface for I2C and SPI, and the [`RegisterBus`] contract the drivers are
//! written against. Any [`RegisterInterface`] with 8-bit addresses is a
//! [`RegisterBus`], so tests and custom transports only need to implement the
//! `device-driver` trait.

use crate::registers::{icm42688p, lsm6ds3trc};
use device_driver::RegisterInterface;

/// Register-level bus access used by every driver
///
/// Multi-byte values are little-endian: both supported devices are configured
/// for little-endian FIFO and sensor data during initialization.
pub trait RegisterBus {
    /// Transport error type
    type Error;

    /// Read a single 8-bit register
    ///
    /// # Errors
    ///
    /// Returns the transport error if the bus transaction fails.
    fn read_reg(&mut self, address: u8) -> Result<u8, Self::Error>;

    /// Read two consecutive registers as one little-endian 16-bit value
    ///
    /// # Errors
    ///
    /// Returns the transport error if the bus transaction fails.
    fn read_reg16(&mut self, address: u8) -> Result<u16, Self::Error>;

    /// Write a single 8-bit register
    ///
    /// # Errors
    ///
    /// Returns the transport error if the bus transaction fails.
    fn write_reg(&mut self, address: u8, value: u8) -> Result<(), Self::Error>;

    /// Burst-read `buffer.len()` bytes starting at `address`
    ///
    /// # Errors
    ///
    /// Returns the transport error if the bus transaction fails.
    fn read_bytes(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T> RegisterBus for T
where
    T: RegisterInterface<AddressType = u8>,
{
    type Error = <T as RegisterInterface>::Error;

    fn read_reg(&mut self, address: u8) -> Result<u8, <T as RegisterInterface>::Error> {
        let mut buffer = [0u8; 1];
        self.read_register(address, 8, &mut buffer)?;
        Ok(buffer[0])
    }

    fn read_reg16(&mut self, address: u8) -> Result<u16, <T as RegisterInterface>::Error> {
        let mut buffer = [0u8; 2];
        self.read_register(address, 16, &mut buffer)?;
        Ok(u16::from_le_bytes(buffer))
    }

    fn write_reg(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<(), <T as RegisterInterface>::Error> {
        self.write_register(address, 8, &[value])
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_bytes(
        &mut self,
        address: u8,
        buffer: &mut [u8],
    ) -> Result<(), <T as RegisterInterface>::Error> {
        // Burst buffers are at most a few hundred bytes
        let size_bits = (buffer.len() * 8) as u32;
        self.read_register(address, size_bits, buffer)
    }
}

/// I2C interface for the supported IMUs
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create an I2C interface for an ICM-42688-P with AD0 low (0x68)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::icm42688p(i2c);
    /// let mut imu = Icm42688p::new(interface);
    /// ```
    pub const fn icm42688p(i2c: I2C) -> Self {
        Self::new(i2c, icm42688p::I2C_ADDRESS_AD0_LOW)
    }

    /// Create an I2C interface for an ICM-42688-P with AD0 high (0x69)
    pub const fn icm42688p_alternative(i2c: I2C) -> Self {
        Self::new(i2c, icm42688p::I2C_ADDRESS_AD0_HIGH)
    }

    /// Create an I2C interface for an LSM6DS3TR-C with SA0 low (0x6A)
    pub const fn lsm6ds3trc(i2c: I2C) -> Self {
        Self::new(i2c, lsm6ds3trc::I2C_ADDRESS_SA0_LOW)
    }

    /// Create an I2C interface for an LSM6DS3TR-C with SA0 high (0x6B)
    pub const fn lsm6ds3trc_alternative(i2c: I2C) -> Self {
        Self::new(i2c, lsm6ds3trc::I2C_ADDRESS_SA0_HIGH)
    }

    /// Create a new I2C interface with a custom device address
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - The 7-bit I2C device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The device address this interface talks to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: u8,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), E> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: u8,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), E> {
        let _ = size_bits;
        // Max: 1 address + 32 data bytes
        let mut buffer = [0u8; 33];
        buffer[0] = address;
        let len = write_data.len().min(32);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        self.i2c.write(self.address, &buffer[..=len])
    }
}

/// SPI interface for the supported IMUs
///
/// Both devices use the same 4-wire framing: the first byte carries the
/// register address with bit 7 set for reads and cleared for writes.
///
/// # Note on Chip Select
///
/// This interface uses the `SpiDevice` trait from `embedded-hal`, which manages
/// the chip select (CS) pin. Wrap a bus and CS pin with e.g.
/// `embedded_hal_bus::spi::ExclusiveDevice` before handing it over:
/// ```ignore
/// let spi_device = ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let mut imu = Lsm6ds3trc::new(SpiInterface::new(spi_device));
/// ```
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: u8,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), E> {
        let _ = size_bits; // Size is implicit in read_data.len() for SPI
        let read_address = address | 0x80;

        let mut operations = [
            embedded_hal::spi::Operation::Write(&[read_address]),
            embedded_hal::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations)
    }

    fn write_register(
        &mut self,
        address: u8,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), E> {
        let _ = size_bits;
        let write_address = address & 0x7F;

        let mut buffer = [0u8; 33];
        buffer[0] = write_address;
        let len = write_data.len().min(32);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        self.spi.write(&buffer[..=len])
    }
}
