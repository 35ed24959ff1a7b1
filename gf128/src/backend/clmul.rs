//! Intel `CLMUL`-accelerated implementation for modern x86/x86_64 CPUs
//! (i.e. Intel Westmere-compatible or newer).
//!
//! `SSSE3` `PSHUFB` performs the per-byte bit reflection with two 16-entry nibble tables,
//! after which the product and reduction mirror the `PMULL` implementation step for step.

#![allow(unsafe_op_in_unsafe_fn, unused_unsafe)]

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::{Block, POLY};

/// 128-bit SIMD register type.
pub(super) type Simd128 = __m128i;

/// Nibble `n` bit-reversed, in the low half of the byte.
static REV_NIBBLE_LO: [u8; 16] = [
    0x00, 0x08, 0x04, 0x0c, 0x02, 0x0a, 0x06, 0x0e, 0x01, 0x09, 0x05, 0x0d, 0x03, 0x0b, 0x07, 0x0f,
];

/// Nibble `n` bit-reversed, in the high half of the byte.
static REV_NIBBLE_HI: [u8; 16] = [
    0x00, 0x80, 0x40, 0xc0, 0x20, 0xa0, 0x60, 0xe0, 0x10, 0x90, 0x50, 0xd0, 0x30, 0xb0, 0x70, 0xf0,
];

/// Reduction constant in the low lane.
static POLY_LANES: [u64; 2] = [POLY, 0];

/// Multiply `a` by `b` in GF(2^128).
///
/// # Safety
///
/// The `pclmulqdq`, `sse2` and `ssse3` target features must be enabled.
#[inline]
#[target_feature(enable = "pclmulqdq,sse2,ssse3")]
pub(super) unsafe fn multiply(a: &Block, b: &Block) -> Block {
    let a = reflect(_mm_loadu_si128(a.as_ptr().cast()));
    let b = reflect(_mm_loadu_si128(b.as_ptr().cast()));
    let (hi, lo) = clmul128(a, b);
    let r = reflect(reduce(hi, lo));

    let mut out = Block::default();
    _mm_storeu_si128(out.as_mut_ptr().cast(), r);
    out
}

/// Reverse the bit order within every byte.
#[inline]
#[target_feature(enable = "sse2,ssse3")]
unsafe fn reflect(x: Simd128) -> Simd128 {
    let mask = _mm_set1_epi8(0x0f);
    let lo = _mm_and_si128(x, mask);
    let hi = _mm_and_si128(_mm_srli_epi16(x, 4), mask);
    _mm_or_si128(
        _mm_shuffle_epi8(_mm_loadu_si128(REV_NIBBLE_HI.as_ptr().cast()), lo),
        _mm_shuffle_epi8(_mm_loadu_si128(REV_NIBBLE_LO.as_ptr().cast()), hi),
    )
}

/// 256-bit carryless product of `a` and `b`, returned as `(high, low)`.
#[inline]
#[target_feature(enable = "pclmulqdq,sse2")]
unsafe fn clmul128(a: Simd128, b: Simd128) -> (Simd128, Simd128) {
    let l = _mm_clmulepi64_si128(a, b, 0x00); // a.lo * b.lo
    let h = _mm_clmulepi64_si128(a, b, 0x11); // a.hi * b.hi
    let m = _mm_xor_si128(
        _mm_clmulepi64_si128(a, b, 0x01), // a.hi * b.lo
        _mm_clmulepi64_si128(a, b, 0x10), // a.lo * b.hi
    );

    (
        _mm_xor_si128(h, _mm_srli_si128(m, 8)),
        _mm_xor_si128(l, _mm_slli_si128(m, 8)),
    )
}

/// Reduce the 256-bit product `hi:lo` modulo `x^128 + x^7 + x^2 + x + 1`.
#[inline]
#[target_feature(enable = "pclmulqdq,sse2")]
unsafe fn reduce(hi: Simd128, lo: Simd128) -> Simd128 {
    let poly = _mm_loadu_si128(POLY_LANES.as_ptr().cast());

    // Fold x^192 terms into x^64..x^192
    let t = _mm_clmulepi64_si128(hi, poly, 0x01);
    let hi = _mm_xor_si128(hi, _mm_srli_si128(t, 8));
    let lo = _mm_xor_si128(lo, _mm_slli_si128(t, 8));

    // Fold x^128 terms into x^0..x^128
    _mm_xor_si128(lo, _mm_clmulepi64_si128(hi, poly, 0x00))
}
