//! SHA-256 and SHA-512 compression functions ([FIPS 180-4 §6.2.2, §6.4.2]).
//!
//! Only the per-block transforms are provided: callers own the 8-word state, supply whole blocks
//! (64 bytes for [`compress256`], 128 bytes for [`compress512`]) and handle padding, length
//! encoding and output truncation themselves. The truncated variants (SHA-224, SHA-384,
//! SHA-512/224, SHA-512/256) use the same transforms from their own initial values in
//! [`consts`].
//!
//! # Usage
//!
//! ```
//! use hex_literal::hex;
//! use sha2_compress::{compress256, consts::H256};
//!
//! // Padded empty message
//! let mut block = [0u8; 64];
//! block[0] = 0x80;
//!
//! let mut state = H256;
//! compress256(&mut state, &block);
//! assert_eq!(state[0].to_be_bytes(), hex!("e3b0c442"));
//! ```
//!
//! # Backends
//!
//! | Width   | x86/x86_64 | aarch64             |
//! |---------|------------|---------------------|
//! | SHA-256 | SHA-NI     | ARMv8 `sha2`        |
//! | SHA-512 | portable   | ARMv8.2 `sha3`      |
//!
//! The portable implementations can be forced by building with
//! `RUSTFLAGS='--cfg sha2_backend="soft"'`.
//!
//! [FIPS 180-4 §6.2.2, §6.4.2]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

pub mod consts;
pub mod sha256;
pub mod sha512;

/// Process every whole 64-byte block in `data` with SHA-256, updating `state` in place.
///
/// Trailing bytes which do not form a whole block are ignored. An empty `data` leaves `state`
/// unchanged.
#[inline]
pub fn compress256(state: &mut sha256::State, data: &[u8]) {
    sha256::Backend::detect().compress(state, data);
}

/// Process every whole 128-byte block in `data` with SHA-512, updating `state` in place.
///
/// Trailing bytes which do not form a whole block are ignored. An empty `data` leaves `state`
/// unchanged.
#[inline]
pub fn compress512(state: &mut sha512::State, data: &[u8]) {
    sha512::Backend::detect().compress(state, data);
}
