//! End-to-end host loop tests
//!
//! The same generic loop drives both devices through detection,
//! initialization, calibration and polling.

use crate::common::{
    MockDelay, MockInterface, assert_float_eq, create_icm42688p, create_lsm6ds3trc, icm_packet,
    lsm_unit,
};
use imu_fifo::{
    AccelDataMps2, Error, GyroCalibrationConfig, GyroDataRps, ImuDriver, calibrate_gyro_offset,
};

/// What a fusion consumer would see after a session
#[derive(Debug, Default)]
struct Session {
    gyro: Vec<GyroDataRps>,
    accel: Vec<AccelDataMps2>,
    gyro_time: f32,
    accel_time: f32,
    temperature: f32,
    overruns: usize,
}

fn run_session<D: ImuDriver>(
    imu: &mut D,
    delay: &mut MockDelay,
    polls: usize,
    calibration: &GyroCalibrationConfig,
) -> Result<Session, Error<D::BusError>> {
    imu.detect()?;
    imu.initialize(delay)?;
    let cal = calibrate_gyro_offset(imu, delay, calibration)?;

    let profile = D::PROFILE;
    let mut session = Session {
        temperature: imu.direct_temperature()?,
        ..Session::default()
    };

    for _ in 0..polls {
        let gyro = std::cell::RefCell::new(Vec::new());
        let accel = std::cell::RefCell::new(Vec::new());
        let report = imu.bulk_read(
            |sample, period| accel.borrow_mut().push((sample, period)),
            |sample, period| gyro.borrow_mut().push((sample, period)),
        )?;
        if report.overrun {
            session.overruns += 1;
        }
        for (sample, period) in gyro.into_inner() {
            session.gyro_time += period;
            session
                .gyro
                .push(GyroDataRps::from_counts(cal.apply(sample), &profile));
        }
        for (sample, period) in accel.into_inner() {
            session.accel_time += period;
            session.accel.push(AccelDataMps2::from_raw(sample, &profile));
        }
    }

    Ok(session)
}

fn calibration() -> GyroCalibrationConfig {
    GyroCalibrationConfig {
        samples: 8,
        warmup_polls: 1,
        poll_interval_ms: 2,
        max_polls: 10,
    }
}

fn queue_icm_second(mock: &MockInterface) {
    // 500 gyro packets per second, one in five carrying accel
    for i in 0..500 {
        let accel = if i % 5 == 4 { [0, 0, 4096] } else { [i16::MIN, 0, 0] };
        mock.push_fifo(&icm_packet(accel, [33, -33, 0]));
    }
}

#[test]
fn test_icm42688p_session() {
    let (mut imu, mock) = create_icm42688p();
    mock.set_register16(0x1D, 0);
    // Warm-up poll, then the rest-state calibration samples
    for _ in 0..8 {
        mock.push_fifo(&icm_packet([i16::MIN, 0, 0], [0, 0, 0]));
    }
    for _ in 0..8 {
        mock.push_fifo(&icm_packet([i16::MIN, 0, 0], [1, 1, 1]));
    }
    queue_icm_second(&mock);
    let mut delay = MockDelay::new();

    // 500 packets at 8 per poll
    let session = run_session(&mut imu, &mut delay, 63, &calibration()).unwrap();

    assert_eq!(session.gyro.len(), 500);
    assert_eq!(session.accel.len(), 100);
    assert_float_eq(session.gyro_time, 1.0, 1e-3);
    assert_float_eq(session.accel_time, 1.0, 1e-3);
    assert_float_eq(session.temperature, 25.0, 1e-6);
    assert_eq!(session.overruns, 0);

    // 32 counts minus the 1-count offset at 32.8 LSB/(°/s)
    let expected = 32.0 / 32.8 * core::f32::consts::PI / 180.0;
    assert_float_eq(session.gyro[0].x, expected, 1e-5);
    assert_float_eq(session.gyro[0].y, -(34.0 / 32.8) * core::f32::consts::PI / 180.0, 1e-5);
    for accel in &session.accel {
        assert_float_eq(accel.magnitude(), 9.80665, 1e-4);
    }
    assert_eq!(mock.fifo_len(), 0);
}

#[test]
fn test_lsm6ds3trc_session_with_overrun() {
    let (mut imu, mock) = create_lsm6ds3trc();
    mock.set_register16(0x20, 512); // 27 °C
    for _ in 0..10 {
        mock.push_fifo(&lsm_unit([0, 0, 0], [0, 0, 0]));
    }
    for _ in 0..8 {
        mock.push_fifo(&lsm_unit([-2, 0, 2], [0, 0, 0]));
    }
    let mut delay = MockDelay::new();

    // Status seen by the warm-up poll, the calibration poll, then an overrun
    // on the first loop poll; the next two drain 20 units
    mock.queue_register16(0x3A, 60);
    mock.queue_register16(0x3A, 48);
    mock.queue_register16(0x3A, 0xFFFF);
    for _ in 0..20 {
        mock.push_fifo(&lsm_unit([-2, 0, 2], [0, 4098, 0]));
    }

    let session = run_session(&mut imu, &mut delay, 3, &calibration()).unwrap();

    assert_eq!(session.overruns, 1);
    assert_eq!(session.gyro.len(), 20);
    assert_eq!(session.accel.len(), 20);
    assert_float_eq(session.temperature, 27.0, 1e-6);
    for gyro in &session.gyro {
        assert_float_eq(gyro.magnitude(), 0.0, 1e-6);
    }
    for accel in &session.accel {
        assert_float_eq(accel.y, 9.80665, 1e-2);
    }
    assert_float_eq(session.gyro_time, 20.0 / 425.0, 1e-5);
}

#[test]
fn test_session_rejects_wrong_device() {
    let (mut imu, mock) = create_lsm6ds3trc();
    mock.set_register(0x0F, 0x00);
    let mut delay = MockDelay::new();

    let result = run_session(&mut imu, &mut delay, 1, &calibration());

    assert!(matches!(result, Err(Error::InvalidDevice(0x00))));
    assert!(mock.writes().is_empty());
}
