//! Portable pure Rust implementation which computes GHASH-convention multiplication over
//! GF(2^128) in constant time. Both 32-bit and 64-bit carryless multipliers are available.
//!
//! Method described at: <https://www.bearssl.org/constanttime.html#ghash-for-gcm>
//!
//! GHASH numbers the bits of each byte from the most significant end, so the field element
//! `x^i` lives in bit `7 - i % 8` of byte `i / 8`. Reflecting every byte and reading the
//! result as a little-endian integer is the same as reading the block as a big-endian integer
//! and reversing all 128 bits, which is what [`reflect`] does.

cpubits::cpubits! {
    16 | 32 => {
        #[path = "soft/soft32.rs"]
        mod soft_impl;
    }
    64 => {
        #[path = "soft/soft64.rs"]
        mod soft_impl;
    }
}

use self::soft_impl::clmul64;
use crate::{Block, POLY};
use core::{
    num::Wrapping,
    ops::{BitAnd, BitOr, BitXor, Mul, Shl},
};

/// Multiply `a` by `b` in GF(2^128).
#[inline]
pub(crate) fn multiply(a: &Block, b: &Block) -> Block {
    let (hi, lo) = clmul128(reflect(a), reflect(b));
    reduce(hi, lo).reverse_bits().to_be_bytes()
}

/// Load a block with the bit order of every byte reversed.
#[inline]
fn reflect(block: &Block) -> u128 {
    u128::from_be_bytes(*block).reverse_bits()
}

/// 256-bit carryless product of `a` and `b`, returned as `(high, low)`.
#[inline]
fn clmul128(a: u128, b: u128) -> (u128, u128) {
    let (a1, a0) = split(a);
    let (b1, b0) = split(b);

    // Karatsuba: a1*b0 + a0*b1 = (a1+a0)*(b1+b0) + a1*b1 + a0*b0
    let l = clmul64(a0, b0);
    let h = clmul64(a1, b1);
    let m = clmul64(a0 ^ a1, b0 ^ b1) ^ l ^ h;

    (h ^ (m >> 64), l ^ (m << 64))
}

/// Reduce the 256-bit product `hi:lo` modulo `x^128 + x^7 + x^2 + x + 1`.
#[inline]
fn reduce(hi: u128, lo: u128) -> u128 {
    let (x3, x2) = split(hi);

    // Fold x^192 terms into x^64..x^192
    let t = clmul64(x3, POLY);
    let (t1, t0) = split(t);
    let x2 = x2 ^ t1;
    let lo = lo ^ (u128::from(t0) << 64);

    // Fold x^128 terms into x^0..x^128
    lo ^ clmul64(x2, POLY)
}

/// Split into `(high, low)` 64-bit halves.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn split(x: u128) -> (u64, u64) {
    ((x >> 64) as u64, x as u64)
}

/// Multiplication in GF(2)[X], implemented generically and wrapped as `bmul32` and `bmul64`.
///
/// Uses "holes" (sequences of zeroes) to avoid carry spilling, as specified in the mask operand
/// `m0` which should have a full-width value with the following bit pattern:
///
/// `0b100010001...0001` (e.g. `0x1111_1111u32`)
///
/// When carries do occur, they wind up in a "hole" and are subsequently masked out of the result.
#[inline]
fn bmul<T>(x: T, y: T, m0: T) -> T
where
    T: BitAnd<Output = T> + BitOr<Output = T> + Copy + Shl<u32, Output = T>,
    Wrapping<T>: BitXor<Output = Wrapping<T>> + Mul<Output = Wrapping<T>>,
{
    let m1 = m0 << 1;
    let m2 = m1 << 1;
    let m3 = m2 << 1;

    let x0 = Wrapping(x & m0);
    let x1 = Wrapping(x & m1);
    let x2 = Wrapping(x & m2);
    let x3 = Wrapping(x & m3);

    let y0 = Wrapping(y & m0);
    let y1 = Wrapping(y & m1);
    let y2 = Wrapping(y & m2);
    let y3 = Wrapping(y & m3);

    let z0 = (x0 * y0) ^ (x1 * y3) ^ (x2 * y2) ^ (x3 * y1);
    let z1 = (x0 * y1) ^ (x1 * y0) ^ (x2 * y3) ^ (x3 * y2);
    let z2 = (x0 * y2) ^ (x1 * y1) ^ (x2 * y0) ^ (x3 * y3);
    let z3 = (x0 * y3) ^ (x1 * y2) ^ (x2 * y1) ^ (x3 * y0);

    (z0.0 & m0) | (z1.0 & m1) | (z2.0 & m2) | (z3.0 & m3)
}

#[cfg(test)]
mod tests {
    use super::{clmul64, multiply, reflect};
    use hex_literal::hex;

    /// Schoolbook shift-and-xor carryless multiply.
    fn clmul64_reference(x: u64, y: u64) -> u128 {
        (0..64)
            .filter(|i| (y >> i) & 1 == 1)
            .fold(0u128, |acc, i| acc ^ (u128::from(x) << i))
    }

    #[test]
    fn clmul64_matches_schoolbook() {
        let cases = [
            (0, 0),
            (1, u64::MAX),
            (u64::MAX, u64::MAX),
            (0x87, 1 << 63),
            (0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210),
            (0x8000_0000_0000_0001, 0x8000_0000_0000_0001),
        ];

        for (x, y) in cases {
            assert_eq!(clmul64(x, y), clmul64_reference(x, y), "{x:#x} * {y:#x}");
        }
    }

    #[test]
    fn reflect_reverses_each_byte() {
        let block = hex!("80000000000000000000000000000001");
        assert_eq!(reflect(&block), 1u128 | (1u128 << 127));
    }

    #[test]
    fn x127_times_x_reduces() {
        let x127 = hex!("00000000000000000000000000000001");
        let x = hex!("40000000000000000000000000000000");
        assert_eq!(multiply(&x127, &x), hex!("e1000000000000000000000000000000"));
    }
}
