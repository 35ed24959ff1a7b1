//! Shared criterion setup: wall-clock by default, cycles per byte with `--features cpb`.
#![allow(dead_code)]

use criterion::Criterion;

#[cfg(not(feature = "cpb"))]
pub type Benchmarker = Criterion;

#[cfg(feature = "cpb")]
pub type Benchmarker = Criterion<criterion_cycles_per_byte::CyclesPerByte>;

#[cfg(not(feature = "cpb"))]
pub fn config() -> Benchmarker {
    Criterion::default()
}

#[cfg(feature = "cpb")]
pub fn config() -> Benchmarker {
    Criterion::default().with_measurement(criterion_cycles_per_byte::CyclesPerByte)
}

/// `len` bytes of non-repeating input so no backend sees an all-zero schedule.
pub fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(167) >> 3) as u8).collect()
}

/// A single non-trivial field element.
pub fn block<const N: usize>(seed: u8) -> [u8; N] {
    core::array::from_fn(|i| seed.wrapping_add((i as u8).wrapping_mul(29)))
}
