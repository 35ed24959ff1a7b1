//! Carryless 64x64 multiplication for CPUs with a 64-bit multiplier.
//!
//! Adapted from BearSSL's `ghash_ctmul64.c`:
//!
//! <https://bearssl.org/gitweb/?p=BearSSL;a=blob;f=src/hash/ghash_ctmul64.c;hb=4b6046412>
//!
//! Copyright (c) 2016 Thomas Pornin <pornin@bolet.org>

/// Full 128-bit carryless product of `x` and `y`.
///
/// The low half comes straight from `bmul64`. For the high half, bit-reversing the operands
/// reverses the 127-bit product, so the low 64 bits of the reversed product, reversed again
/// and shifted right by one, are bits 64..127 of the original.
#[inline]
pub(super) fn clmul64(x: u64, y: u64) -> u128 {
    let lo = bmul64(x, y);
    let hi = bmul64(x.reverse_bits(), y.reverse_bits()).reverse_bits() >> 1;
    u128::from(lo) | (u128::from(hi) << 64)
}

/// Carryless multiplication in GF(2)[X], truncated to the low 64-bits.
#[inline]
fn bmul64(x: u64, y: u64) -> u64 {
    super::bmul(x, y, 0x1111_1111_1111_1111)
}
