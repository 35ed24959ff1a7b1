//! Portable implementation of the SHA-512 compression function.

use super::{BLOCK_SIZE, State};
use crate::consts::K64;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

pub(crate) fn compress(state: &mut State, data: &[u8]) {
    for block in data.chunks_exact(BLOCK_SIZE) {
        compress_block(state, block);
    }
}

fn compress_block(state: &mut State, block: &[u8]) {
    #[cfg_attr(not(feature = "zeroize"), allow(unused_mut))]
    let mut w = schedule(block);

    let mut v = *state;
    for (&k, &wi) in K64.iter().zip(w.iter()) {
        round(&mut v, k, wi);
    }

    for (s, v) in state.iter_mut().zip(v) {
        *s = s.wrapping_add(v);
    }

    #[cfg(feature = "zeroize")]
    w.zeroize();
}

/// Expand one block into the 80-word message schedule.
#[inline(always)]
fn schedule(block: &[u8]) -> [u64; 80] {
    let mut w = [0u64; 80];

    for (wi, bytes) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(bytes);
        *wi = u64::from_be_bytes(word);
    }

    for i in 16..80 {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    w
}

/// One round over the working registers `[a, b, c, d, e, f, g, h]`.
#[inline(always)]
fn round(v: &mut State, k: u64, w: u64) {
    let [a, b, c, d, e, f, g, h] = *v;
    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
    *v = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
}

#[inline(always)]
fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[cfg(test)]
mod tests {
    use super::{small_sigma0, small_sigma1};

    #[test]
    fn sigmas_of_top_bit() {
        let x = 1u64 << 63;
        assert_eq!(small_sigma0(x), (1 << 62) | (1 << 55) | (1 << 56));
        assert_eq!(small_sigma1(x), (1 << 44) | (1 << 2) | (1 << 57));
    }

    /// Wiping the schedule after each block leaves the state update intact.
    #[cfg(feature = "zeroize")]
    #[test]
    fn padded_empty_block_with_wipe() {
        let mut block = [0u8; 128];
        block[0] = 0x80;

        let mut state = crate::consts::H512;
        super::compress(&mut state, &block);
        assert_eq!(
            state,
            [
                0xcf83e1357eefb8bd,
                0xf1542850d66d8007,
                0xd620e4050b5715dc,
                0x83f4a921d36ce9ce,
                0x47d0d13c5d85f2b0,
                0xff8318d2877eec2f,
                0x63b931bd47417a81,
                0xa538327af927da3e
            ]
        );
    }
}
