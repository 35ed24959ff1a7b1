//! Multiplication in GF(2^128) modulo `x^128 + x^7 + x^2 + x + 1`, using the bit-reflected
//! convention of GHASH ([NIST SP 800-38D §6.3]).
//!
//! Three implementations are provided behind one interface:
//!
//! - [`Backend::Soft`]: portable constant-time arithmetic, selecting 32-bit or 64-bit limbs with
//!   [`cpubits`].
//! - [`Backend::Clmul`]: Intel/AMD `PCLMULQDQ` (x86/x86_64).
//! - [`Backend::Pmull`]: ARMv8 `PMULL` (aarch64).
//!
//! All of them compute the same function: reflect the bits of every byte, take the 256-bit
//! carryless product, fold the upper half back in twice with the constant `0x87`, and reflect
//! the result back.
//!
//! # Usage
//!
//! ```
//! use hex_literal::hex;
//!
//! let a = hex!("1f1e1d1c1b1a18181716151413121110");
//! let b = hex!("2f2e2d2c2b2a28282726252423222120");
//!
//! assert_eq!(gf128::multiply(&a, &b)[..8], hex!("4a83363bda2626b6"));
//! ```
//!
//! # Configuration
//!
//! The portable implementation can be forced by building with
//! `RUSTFLAGS='--cfg gf128_backend="soft"'`, which compiles out every intrinsic.
//!
//! [NIST SP 800-38D §6.3]: https://nvlpubs.nist.gov/nistpubs/Legacy/SP/nistspecialpublication800-38d.pdf

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

mod backend;
mod field_element;

pub use crate::{backend::Backend, field_element::FieldElement};

/// Size of a GF(2^128) element in bytes.
pub const BLOCK_SIZE: usize = 16;

/// GF(2^128) element as a byte string (16-bytes).
pub type Block = [u8; BLOCK_SIZE];

/// Low-order terms `x^7 + x^2 + x + 1` of the field polynomial.
pub(crate) const POLY: u64 = 0x87;

/// Multiply `a` by `b` in GF(2^128) using the fastest implementation supported by the CPU.
#[inline]
#[must_use]
pub fn multiply(a: &Block, b: &Block) -> Block {
    Backend::detect().multiply(a, b)
}
