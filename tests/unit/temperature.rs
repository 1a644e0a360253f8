//! Temperature conversion tests

use crate::common::{assert_float_eq, create_icm42688p, create_lsm6ds3trc};
use imu_fifo::{Icm42688p, ImuDriver, Lsm6ds3trc};

type Icm = Icm42688p<crate::common::MockInterface>;
type Lsm = Lsm6ds3trc<crate::common::MockInterface>;

#[test]
fn test_zero_is_twenty_five_degrees() {
    assert_eq!(Icm::temperature_to_celsius(0), 25.0);
    assert_eq!(Lsm::temperature_to_celsius(0), 25.0);
}

#[test]
fn test_icm42688p_formula() {
    for raw in [i16::MIN, -1325, -1, 1, 132, 1325, 2649, i16::MAX] {
        let expected = f32::from(raw) / 132.48 + 25.0;
        assert_eq!(Icm::temperature_to_celsius(raw), expected, "raw = {raw}");
    }
    assert_float_eq(Icm::temperature_to_celsius(1325), 35.0, 0.01);
}

#[test]
fn test_lsm6ds3trc_formula() {
    for raw in [i16::MIN, -256, -1, 1, 256, 2560, i16::MAX] {
        let expected = f32::from(raw) / 256.0 + 25.0;
        assert_eq!(Lsm::temperature_to_celsius(raw), expected, "raw = {raw}");
    }
    assert_eq!(Lsm::temperature_to_celsius(256), 26.0);
    assert_eq!(Lsm::temperature_to_celsius(-2560), 15.0);
}

#[test]
fn test_icm42688p_direct_temperature() {
    let (mut imu, mock) = create_icm42688p();
    mock.set_register16(0x1D, 1325);

    let celsius = imu.direct_temperature().unwrap();

    assert_float_eq(celsius, 35.0, 0.01);
    assert_eq!(mock.reads(), vec![(0x1D, 2)]);
}

#[test]
fn test_lsm6ds3trc_direct_temperature_negative() {
    let (mut imu, mock) = create_lsm6ds3trc();
    // -2560 little-endian: 0x00, 0xF6
    mock.set_register(0x20, 0x00);
    mock.set_register(0x21, 0xF6);

    let celsius = imu.direct_temperature().unwrap();

    assert_eq!(celsius, 15.0);
    assert_eq!(mock.reads(), vec![(0x20, 2)]);
}
