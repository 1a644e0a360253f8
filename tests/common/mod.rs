//! Common test utilities and mock implementations

#![allow(dead_code)]


pub use mock_interface::{MockError, MockInterface, Operation};
pub use test_utils::{
    MockDelay, assert_float_eq, collect, create_icm42688p, create_lsm6ds3trc, icm_packet,
    icm_packet_with, lsm_unit,
};
