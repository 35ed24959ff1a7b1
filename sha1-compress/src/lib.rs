//! SHA-1 compression function ([FIPS 180-4 §6.1.2]).
//!
//! This crate provides only the per-block transform: callers own the 5-word state, supply whole
//! 64-byte blocks, and handle padding and length encoding themselves.
//!
//! # Usage
//!
//! ```
//! use hex_literal::hex;
//! use sha1_compress::{BLOCK_SIZE, H0, compress};
//!
//! // Padded empty message
//! let mut block = [0u8; BLOCK_SIZE];
//! block[0] = 0x80;
//!
//! let mut state = H0;
//! compress(&mut state, &block);
//! assert_eq!(state[0].to_be_bytes(), hex!("da39a3ee"));
//! ```
//!
//! # Backends
//!
//! [`compress`] runs the fastest [`Backend`] supported by the CPU. The portable one can be forced
//! by building with `RUSTFLAGS='--cfg sha1_backend="soft"'`.
//!
//! [FIPS 180-4 §6.1.2]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

mod backend;
mod consts;

pub use crate::{backend::Backend, consts::H0};

/// Size of a SHA-1 block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// SHA-1 chaining state.
pub type State = [u32; 5];

/// Process every whole 64-byte block in `data`, updating `state` in place.
///
/// Trailing bytes which do not form a whole block are ignored. An empty `data` leaves `state`
/// unchanged.
#[inline]
pub fn compress(state: &mut State, data: &[u8]) {
    Backend::detect().compress(state, data);
}
