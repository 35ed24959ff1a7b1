//! Portable implementation of the SHA-1 compression function.

use crate::{BLOCK_SIZE, State, consts::K};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Non-linear function for each 20-round stage.
const F: [fn(u32, u32, u32) -> u32; 4] = [ch, parity, maj, parity];

pub(crate) fn compress(state: &mut State, data: &[u8]) {
    for block in data.chunks_exact(BLOCK_SIZE) {
        compress_block(state, block);
    }
}

fn compress_block(state: &mut State, block: &[u8]) {
    #[cfg_attr(not(feature = "zeroize"), allow(unused_mut))]
    let mut w = schedule(block);

    let mut v = *state;
    for (i, &wi) in w.iter().enumerate() {
        round(&mut v, i / 20, wi);
    }

    for (s, v) in state.iter_mut().zip(v) {
        *s = s.wrapping_add(v);
    }

    #[cfg(feature = "zeroize")]
    w.zeroize();
}

/// Expand one block into the 80-word message schedule.
#[inline(always)]
fn schedule(block: &[u8]) -> [u32; 80] {
    let mut w = [0u32; 80];

    for (wi, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *wi = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    w
}

/// One round over the working registers `[a, b, c, d, e]`.
#[inline(always)]
fn round(v: &mut State, stage: usize, w: u32) {
    let [a, b, c, d, e] = *v;
    let t = a
        .rotate_left(5)
        .wrapping_add(F[stage](b, c, d))
        .wrapping_add(e)
        .wrapping_add(K[stage])
        .wrapping_add(w);
    *v = [t, a, b.rotate_left(30), c, d];
}

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}
