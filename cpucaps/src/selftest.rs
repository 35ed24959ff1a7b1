//! Known-answer checks run against every form the running CPU can execute.
//!
//! Each hash case compresses the single padded block of the empty message
//! from the standard initial state; the field case multiplies two fixed
//! operands. Only the leading eight bytes of each result are compared.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use hex_literal::hex;
use sha2_compress::{consts, sha256, sha512};
use tracing::{debug, error, info};

/// Which primitives to exercise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Primitive {
    /// Every primitive
    #[default]
    All,
    /// SHA-1 compression
    Sha1,
    /// SHA-256 compression
    Sha256,
    /// SHA-512 compression
    Sha512,
    /// GF(2^128) multiplication
    Gf128,
}

impl Primitive {
    fn includes(self, other: Primitive) -> bool {
        self == Primitive::All || self == other
    }
}

const SHA1_EMPTY: [u8; 8] = hex!("da39a3ee5e6b4b0d");
const SHA256_EMPTY: [u8; 8] = hex!("e3b0c44298fc1c14");
const SHA512_EMPTY: [u8; 8] = hex!("cf83e1357eefb8bd");

const GF128_A: gf128::Block = hex!("1f1e1d1c1b1a18181716151413121110");
const GF128_B: gf128::Block = hex!("2f2e2d2c2b2a28282726252423222120");
const GF128_PRODUCT: [u8; 8] = hex!("4a83363bda2626b6");

/// Result of one known-answer case on one backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub primitive: &'static str,
    pub backend: &'static str,
    pub expected: [u8; 8],
    pub actual: [u8; 8],
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// First eight bytes of `bytes`, zero-filled if shorter.
fn prefix(bytes: impl IntoIterator<Item = u8>) -> [u8; 8] {
    let mut out = [0u8; 8];
    for (dst, src) in out.iter_mut().zip(bytes) {
        *dst = src;
    }
    out
}

/// Padded empty message: a lone `0x80` marker and a zero length field.
fn empty_block<const N: usize>() -> [u8; N] {
    let mut block = [0u8; N];
    block[0] = 0x80;
    block
}

fn sha1_cases(outcomes: &mut Vec<Outcome>) {
    debug!(
        primitive = "sha1",
        backend = sha1_compress::Backend::detect().name(),
        "dispatcher choice"
    );

    let block = empty_block::<{ sha1_compress::BLOCK_SIZE }>();

    for backend in sha1_compress::Backend::ALL {
        if !backend.is_available() {
            continue;
        }

        let mut state = sha1_compress::H0;
        backend.compress(&mut state, &block);
        outcomes.push(Outcome {
            primitive: "sha1",
            backend: backend.name(),
            expected: SHA1_EMPTY,
            actual: prefix(state.iter().flat_map(|word| word.to_be_bytes())),
        });
    }
}

fn sha256_cases(outcomes: &mut Vec<Outcome>) {
    debug!(
        primitive = "sha256",
        backend = sha256::Backend::detect().name(),
        "dispatcher choice"
    );

    let block = empty_block::<{ sha256::BLOCK_SIZE }>();

    for backend in sha256::Backend::ALL {
        if !backend.is_available() {
            continue;
        }

        let mut state = consts::H256;
        backend.compress(&mut state, &block);
        outcomes.push(Outcome {
            primitive: "sha256",
            backend: backend.name(),
            expected: SHA256_EMPTY,
            actual: prefix(state.iter().flat_map(|word| word.to_be_bytes())),
        });
    }
}

fn sha512_cases(outcomes: &mut Vec<Outcome>) {
    debug!(
        primitive = "sha512",
        backend = sha512::Backend::detect().name(),
        "dispatcher choice"
    );

    let block = empty_block::<{ sha512::BLOCK_SIZE }>();

    for backend in sha512::Backend::ALL {
        if !backend.is_available() {
            continue;
        }

        let mut state = consts::H512;
        backend.compress(&mut state, &block);
        outcomes.push(Outcome {
            primitive: "sha512",
            backend: backend.name(),
            expected: SHA512_EMPTY,
            actual: prefix(state.iter().flat_map(|word| word.to_be_bytes())),
        });
    }
}

fn gf128_cases(outcomes: &mut Vec<Outcome>) {
    debug!(
        primitive = "gf128",
        backend = gf128::Backend::detect().name(),
        "dispatcher choice"
    );

    for backend in gf128::Backend::ALL {
        if !backend.is_available() {
            continue;
        }

        let product = backend.multiply(&GF128_A, &GF128_B);
        outcomes.push(Outcome {
            primitive: "gf128",
            backend: backend.name(),
            expected: GF128_PRODUCT,
            actual: prefix(product),
        });
    }
}

/// Run every case selected by `primitive` on every available backend.
pub fn cases(primitive: Primitive) -> Vec<Outcome> {
    let mut outcomes = Vec::new();

    if primitive.includes(Primitive::Sha1) {
        sha1_cases(&mut outcomes);
    }
    if primitive.includes(Primitive::Sha256) {
        sha256_cases(&mut outcomes);
    }
    if primitive.includes(Primitive::Sha512) {
        sha512_cases(&mut outcomes);
    }
    if primitive.includes(Primitive::Gf128) {
        gf128_cases(&mut outcomes);
    }

    outcomes
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Print one line per case. Returns `true` if every case passed.
pub fn run(out: &mut impl Write, primitive: Primitive) -> Result<bool> {
    let outcomes = cases(primitive);
    let mut failures = 0usize;

    for outcome in &outcomes {
        let actual = hex(&outcome.actual);

        if outcome.passed() {
            info!(primitive = outcome.primitive, backend = outcome.backend, "pass");
            writeln!(out, "PASS {:<6} {:<12} {actual}", outcome.primitive, outcome.backend)?;
        } else {
            let expected = hex(&outcome.expected);
            error!(
                primitive = outcome.primitive,
                backend = outcome.backend,
                %expected,
                %actual,
                "known-answer mismatch"
            );
            writeln!(
                out,
                "FAIL {:<6} {:<12} {actual} (expected {expected})",
                outcome.primitive, outcome.backend
            )?;
            failures += 1;
        }
    }

    writeln!(out, "{} passed, {failures} failed", outcomes.len() - failures)?;
    Ok(failures == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_case_passes() {
        let outcomes = cases(Primitive::All);

        // The reference form of each primitive always runs.
        assert!(outcomes.len() >= 4);
        for outcome in &outcomes {
            assert!(outcome.passed(), "{outcome:?}");
        }
    }

    #[test]
    fn selection_filters_primitives() {
        let outcomes = cases(Primitive::Gf128);
        assert!(!outcomes.is_empty());
        assert!(outcomes.iter().all(|o| o.primitive == "gf128"));
    }

    #[test]
    fn prefix_truncates_and_pads() {
        assert_eq!(prefix(0u8..16), [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(prefix([9u8, 9]), [9, 9, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn report_ends_with_summary() {
        let mut out = Vec::new();
        assert!(run(&mut out, Primitive::Sha1).unwrap());

        let report = String::from_utf8(out).unwrap();
        assert!(report.starts_with("PASS sha1   soft"));
        assert!(report.ends_with(" passed, 0 failed\n"));
    }
}
