//! Carryless multiplication for 32-bit architectures.
//!
//! Adapted from BearSSL's `ghash_ctmul32.c`:
//!
//! <https://bearssl.org/gitweb/?p=BearSSL;a=blob;f=src/hash/ghash_ctmul32.c;hb=4b6046412>
//!
//! Copyright (c) 2016 Thomas Pornin <pornin@bolet.org>
//!
//! Only the low 32 bits of each integer multiplication are used, which suits CPUs such as the
//! ARM Cortex M0 whose multiplication opcode does not yield the upper half.
//!
//! The implementation trick that is used here is bit-reversing (bit 0 is swapped with bit 31, bit 1
//! with bit 30, and so on). In GF(2)[X], for all values x and y, we have:
//!
//! ```text
//! x.reverse_bits() * y.reverse_bits() = (x * y).reverse_bits()
//! ```
//!
//! In other words, if we bit-reverse (over 32-bits) the operands then we bit-reverse (over 64-bits)
//! the result.

/// Full 128-bit carryless product of `x` and `y`, from three 32x32 products.
#[inline]
pub(super) fn clmul64(x: u64, y: u64) -> u128 {
    let (x1, x0) = halves(x);
    let (y1, y0) = halves(y);

    let l = clmul32(x0, y0);
    let h = clmul32(x1, y1);
    let m = clmul32(x0 ^ x1, y0 ^ y1) ^ l ^ h;

    u128::from(l) ^ (u128::from(m) << 32) ^ (u128::from(h) << 64)
}

/// Full 64-bit carryless product of `x` and `y`.
#[inline]
fn clmul32(x: u32, y: u32) -> u64 {
    let lo = bmul32(x, y);
    let hi = bmul32(x.reverse_bits(), y.reverse_bits()).reverse_bits() >> 1;
    u64::from(lo) | (u64::from(hi) << 32)
}

/// Carryless multiplication in GF(2)[X], truncated to the low 32-bits.
#[inline]
fn bmul32(x: u32, y: u32) -> u32 {
    super::bmul(x, y, 0x1111_1111)
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn halves(x: u64) -> (u32, u32) {
    ((x >> 32) as u32, x as u32)
}
