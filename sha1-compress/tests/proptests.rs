//! Property-based tests.

#![cfg(any(unix, windows))]

use proptest::{collection::vec, prelude::*};
use sha1::{Digest, Sha1};
use sha1_compress::{BLOCK_SIZE, Backend, H0, State};

/// Whole blocks of random data.
fn blocks(max: usize) -> impl Strategy<Value = Vec<u8>> {
    (0..=max).prop_flat_map(|n| vec(any::<u8>(), n * BLOCK_SIZE))
}

proptest! {
    /// Every accelerated implementation available on this CPU must agree with `Backend::Soft`.
    #[test]
    fn accelerated_soft_equivalence(state in any::<State>(), data in blocks(8)) {
        let mut expected = state;
        Backend::Soft.compress(&mut expected, &data);

        for backend in Backend::ALL.into_iter().filter(|b| b.is_available()) {
            let mut actual = state;
            backend.compress(&mut actual, &data);
            prop_assert_eq!(actual, expected, "{}", backend.name());
        }
    }

    /// Many blocks in one call equal one block per call.
    #[test]
    fn incremental_consistency(state in any::<State>(), data in blocks(6)) {
        for backend in Backend::ALL.into_iter().filter(|b| b.is_available()) {
            let mut all = state;
            backend.compress(&mut all, &data);

            let mut each = state;
            for block in data.chunks_exact(BLOCK_SIZE) {
                backend.compress(&mut each, block);
            }

            prop_assert_eq!(all, each, "{}", backend.name());
        }
    }

    /// Padded messages hash to the same digest as the `sha1` crate.
    #[test]
    fn sha1_oracle(msg in vec(any::<u8>(), 0..300)) {
        let mut data = msg.clone();
        data.push(0x80);
        while data.len() % BLOCK_SIZE != BLOCK_SIZE - 8 {
            data.push(0);
        }
        data.extend_from_slice(&((msg.len() as u64) * 8).to_be_bytes());

        let mut state = H0;
        sha1_compress::compress(&mut state, &data);

        let expected = Sha1::digest(&msg);
        for (word, chunk) in state.iter().zip(expected.chunks_exact(4)) {
            prop_assert_eq!(&word.to_be_bytes()[..], chunk);
        }
    }
}
