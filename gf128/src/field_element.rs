//! GF(2^128) field element type.

use crate::{BLOCK_SIZE, Block, multiply};
use core::{
    fmt::{self, Debug},
    ops::{Add, AddAssign, Mul, MulAssign},
};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// An element of GF(2^128) modulo `x^128 + x^7 + x^2 + x + 1`.
///
/// # Representation
///
/// The element is stored as the 16-byte GHASH block encoding: the coefficient of `x^i` is bit
/// `7 - (i % 8)` of byte `i / 8`, so `x^0` is the most significant bit of the first byte.
///
/// - Addition is XOR.
/// - Multiplication is carryless and reduced, using the fastest implementation available on the
///   running CPU (see [`crate::Backend::detect`]).
#[derive(Clone, Copy, Default, Eq, PartialEq)]
#[repr(C, align(16))] // Make ABI and alignment compatible with SIMD registers
pub struct FieldElement([u8; BLOCK_SIZE]);

impl FieldElement {
    /// Multiplicative identity (`x^0`).
    pub const ONE: Self = {
        let mut bytes = [0u8; BLOCK_SIZE];
        bytes[0] = 0x80;
        Self(bytes)
    };

    /// Borrow the GHASH block encoding of this element.
    #[must_use]
    pub fn as_bytes(&self) -> &Block {
        &self.0
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(")?;
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl From<Block> for FieldElement {
    #[inline]
    fn from(block: Block) -> Self {
        Self(block)
    }
}

impl From<&Block> for FieldElement {
    #[inline]
    fn from(block: &Block) -> Self {
        Self::from(*block)
    }
}

impl From<FieldElement> for Block {
    #[inline]
    fn from(fe: FieldElement) -> Self {
        fe.0
    }
}

impl Add for FieldElement {
    type Output = Self;

    /// Adds two GF(2^128) field elements, i.e. XOR.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(rhs.0) {
            *a ^= b;
        }
        Self(out)
    }
}

impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(multiply(&self.0, &rhs.0))
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
