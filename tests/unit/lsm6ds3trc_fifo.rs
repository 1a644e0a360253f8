//! LSM6DS3TR-C FIFO polling and overrun recovery tests

use crate::common::{collect, create_lsm6ds3trc, lsm_unit};
use imu_fifo::ImuDriver;
use imu_fifo::registers::lsm6ds3trc::{FIFO_CTRL5, FIFO_CTRL5_VALUE};

const FIFO_STATUS: u8 = 0x3A;
const FIFO_DATA: u8 = 0x3E;

#[test]
fn test_one_unit_axis_assignment() {
    let (mut imu, mock) = create_lsm6ds3trc();
    mock.queue_register16(FIFO_STATUS, 0x0006);
    mock.push_fifo(&lsm_unit([11, -12, 13], [-21, 22, -23]));

    let c = collect(&mut imu).unwrap();

    assert_eq!(c.gyro.len(), 1);
    assert_eq!(c.accel.len(), 1);
    assert_eq!(c.gyro[0].0, [11, -12, 13]);
    assert_eq!(c.accel[0].0, [-21, 22, -23]);
    assert_eq!(c.order, ['g', 'a']);
    assert_eq!(mock.reads(), vec![(FIFO_STATUS, 2), (FIFO_DATA, 12)]);
}

#[test]
fn test_overrun_flushes_and_emits_nothing() {
    let (mut imu, mock) = create_lsm6ds3trc();
    mock.queue_register16(FIFO_STATUS, 0x4005);
    mock.push_fifo(&lsm_unit([1, 1, 1], [2, 2, 2]));

    let c = collect(&mut imu).unwrap();

    assert!(c.gyro.is_empty());
    assert!(c.accel.is_empty());
    assert!(c.report.overrun);
    assert_eq!(c.report.entries, 0);
    assert_eq!(
        mock.writes(),
        vec![(FIFO_CTRL5, 0x00), (FIFO_CTRL5, FIFO_CTRL5_VALUE)]
    );
    // No burst read of the FIFO port
    assert_eq!(mock.reads(), vec![(FIFO_STATUS, 2)]);
}

#[test]
fn test_overrun_ignores_reported_count() {
    for count in [0u16, 6, 60, 0x07FF] {
        let (mut imu, mock) = create_lsm6ds3trc();
        mock.queue_register16(FIFO_STATUS, 0x4000 | count);

        let c = collect(&mut imu).unwrap();

        assert!(c.order.is_empty());
        assert_eq!(mock.writes().len(), 2);
        assert_eq!(mock.reads().len(), 1);
    }
}

#[test]
fn test_next_poll_after_overrun_resumes() {
    let (mut imu, mock) = create_lsm6ds3trc();
    mock.queue_register16(FIFO_STATUS, 0x4006);
    collect(&mut imu).unwrap();

    mock.clear_operations();
    mock.push_fifo(&lsm_unit([3, 3, 3], [4, 4, 4]));
    let c = collect(&mut imu).unwrap();

    assert!(!c.report.overrun);
    assert_eq!(c.gyro.len(), 1);
    assert!(mock.writes().is_empty());
}

#[test]
fn test_shared_period() {
    let (mut imu, mock) = create_lsm6ds3trc();
    mock.push_fifo(&lsm_unit([0; 3], [0; 3]));

    let c = collect(&mut imu).unwrap();
    let period = 1.0 / 425.0;
    assert!((c.gyro[0].1 - period).abs() < 1e-9);
    assert_eq!(c.gyro[0].1, c.accel[0].1);
}

#[test]
fn test_partial_unit_not_read() {
    let (mut imu, mock) = create_lsm6ds3trc();
    mock.queue_register16(FIFO_STATUS, 0x0005);

    let c = collect(&mut imu).unwrap();

    assert_eq!(c.report.entries, 0);
    assert_eq!(mock.reads(), vec![(FIFO_STATUS, 2)]);
}

#[test]
fn test_burst_clamped_to_sixty_words() {
    let (mut imu, mock) = create_lsm6ds3trc();
    for i in 0..12i16 {
        mock.push_fifo(&lsm_unit([i, 0, 0], [0, i, 0]));
    }

    let c = collect(&mut imu).unwrap();

    assert_eq!(c.report.entries, 10);
    assert!(c.report.truncated);
    assert_eq!(mock.reads()[1], (FIFO_DATA, 120));
    assert_eq!(c.gyro[9].0, [9, 0, 0]);
    assert_eq!(c.accel[9].0, [0, 9, 0]);
    assert_eq!(mock.fifo_len(), 24);
}

#[test]
fn test_status_flag_bits_do_not_inflate_count() {
    // FIFO_STATUS2 watermark and full flags (bits 15, 13, 12)
    let (mut imu, mock) = create_lsm6ds3trc();
    mock.queue_register16(FIFO_STATUS, 0xB000 | 12);
    mock.push_fifo(&lsm_unit([1, 0, 0], [0; 3]));
    mock.push_fifo(&lsm_unit([2, 0, 0], [0; 3]));

    let c = collect(&mut imu).unwrap();

    assert!(!c.report.overrun);
    assert_eq!(c.report.entries, 2);
}

#[test]
fn test_entry_count_formula() {
    for words in [0u16, 5, 6, 7, 12, 59, 60, 61, 600, 0x07FF] {
        let (mut imu, mock) = create_lsm6ds3trc();
        mock.queue_register16(FIFO_STATUS, words);

        let report = imu.bulk_read(|_, _| {}, |_, _| {}).unwrap();

        let expected = usize::from(words).min(60) / 6;
        assert_eq!(report.entries, expected, "words = {words}");
        assert_eq!(report.gyro_samples, expected);
        assert_eq!(report.accel_samples, expected);
    }
}
