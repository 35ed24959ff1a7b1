//! Portable implementation of the SHA-256 compression function.

use super::{BLOCK_SIZE, State};
use crate::consts::K32;

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
    for (&k, &wi) in K32.iter().zip(w.iter()) {
        round(&mut v, k, wi);
    }

    for (s, v) in state.iter_mut().zip(v) {
        *s = s.wrapping_add(v);
    }

    #[cfg(feature = "zeroize")]
    w.zeroize();
}

/// Expand one block into the 64-word message schedule.
#[inline(always)]
fn schedule(block: &[u8]) -> [u32; 64] {
    let mut w = [0u32; 64];

    for (wi, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *wi = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    for i in 16..64 {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    w
}

/// One round over the working registers `[a, b, c, d, e, f, g, h]`.
#[inline(always)]
fn round(v: &mut State, k: u32, w: u32) {
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
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}
