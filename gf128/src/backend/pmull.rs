//! ARMv8 `PMULL`-accelerated implementation of GF(2^128) multiplication.
//!
//! Based on this C intrinsics implementation:
//! <https://github.com/noloader/AES-Intrinsics/blob/master/clmul-arm.c>
//!
//! Original C written and placed in public domain by Jeffrey Walton.
//! Based on code from ARM, and by Johannes Schneiders, Skip Hovsmith and
//! Barry O'Rourke for the mbedTLS project.
//!
//! For more information about PMULL, see:
//! - <https://developer.arm.com/documentation/100069/0608/A64-SIMD-Vector-Instructions/PMULL--PMULL2--vector->
//! - <https://eprint.iacr.org/2015/688.pdf>

#![allow(unsafe_op_in_unsafe_fn)]

use crate::{Block, POLY};
use core::arch::aarch64::*;

/// 128-bit SIMD register type.
pub(super) type Simd128 = uint8x16_t;

/// Multiply `a` by `b` in GF(2^128).
///
/// # Safety
/// It is the caller's responsibility to ensure the host CPU is capable of PMULL and NEON
/// instructions.
#[inline]
#[target_feature(enable = "aes,neon")]
pub(super) unsafe fn multiply(a: &Block, b: &Block) -> Block {
    let a = vrbitq_u8(vld1q_u8(a.as_ptr()));
    let b = vrbitq_u8(vld1q_u8(b.as_ptr()));
    let (hi, lo) = clmul128(a, b);
    let r = vrbitq_u8(reduce(hi, lo));

    let mut out = Block::default();
    vst1q_u8(out.as_mut_ptr(), r);
    out
}

/// 256-bit carryless product of `a` and `b`, returned as `(high, low)`.
#[inline]
#[target_feature(enable = "aes,neon")]
unsafe fn clmul128(a: Simd128, b: Simd128) -> (Simd128, Simd128) {
    let z = vdupq_n_u8(0);
    let l = pmull(a, b); // a.lo * b.lo
    let h = pmull2(a, b); // a.hi * b.hi
    let m = veorq_u8(
        pmull(a, vextq_u8(b, b, 8)), // a.lo * b.hi
        pmull(vextq_u8(a, a, 8), b), // a.hi * b.lo
    );

    // {m1, 0} and {0, m0}
    (veorq_u8(h, vextq_u8(m, z, 8)), veorq_u8(l, vextq_u8(z, m, 8)))
}

/// Reduce the 256-bit product `hi:lo` modulo `x^128 + x^7 + x^2 + x + 1`.
#[inline]
#[target_feature(enable = "aes,neon")]
unsafe fn reduce(hi: Simd128, lo: Simd128) -> Simd128 {
    let z = vdupq_n_u8(0);
    let p = vreinterpretq_u8_u64(vdupq_n_u64(POLY));

    // Fold x^192 terms into x^64..x^192
    let t = pmull2(hi, p);
    let hi = veorq_u8(hi, vextq_u8(t, z, 8));
    let lo = veorq_u8(lo, vextq_u8(z, t, 8));

    // Fold x^128 terms into x^0..x^128
    veorq_u8(lo, pmull(hi, p))
}

/// Multiplies the low bits in `a` and `b`.
#[inline]
#[target_feature(enable = "aes,neon")]
unsafe fn pmull(a: Simd128, b: Simd128) -> Simd128 {
    vreinterpretq_u8_p128(vmull_p64(
        vgetq_lane_u64(vreinterpretq_u64_u8(a), 0),
        vgetq_lane_u64(vreinterpretq_u64_u8(b), 0),
    ))
}

/// Multiplies the high bits in `a` and `b`.
#[inline]
#[target_feature(enable = "aes,neon")]
unsafe fn pmull2(a: Simd128, b: Simd128) -> Simd128 {
    vreinterpretq_u8_p128(vmull_p64(
        vgetq_lane_u64(vreinterpretq_u64_u8(a), 1),
        vgetq_lane_u64(vreinterpretq_u64_u8(b), 1),
    ))
}
