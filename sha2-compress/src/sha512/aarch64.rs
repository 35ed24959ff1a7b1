//! ARMv8.2 SHA-512 using the `SHA512H`, `SHA512H2`, `SHA512SU0` and `SHA512SU1` instructions.
//!
//! The working registers live in four two-lane vectors. Each iteration performs two rounds, after
//! which the roles of the vectors rotate by one position instead of moving data between them.

#![allow(unsafe_op_in_unsafe_fn)]

use super::{BLOCK_SIZE, State};
use crate::consts::K64;
use core::arch::aarch64::*;

/// Load 16 bytes as two big-endian words.
#[inline]
#[target_feature(enable = "neon")]
unsafe fn load_be(bytes: *const u8) -> uint64x2_t {
    vreinterpretq_u64_u8(vrev64q_u8(vld1q_u8(bytes)))
}

/// Process every whole block in `data`.
///
/// # Safety
/// It is the caller's responsibility to ensure the host CPU supports the SHA512 instructions.
#[target_feature(enable = "sha3")]
pub(super) unsafe fn compress(state: &mut State, data: &[u8]) {
    // [ab, cd, ef, gh]
    let mut v = [
        vld1q_u64(state.as_ptr()),
        vld1q_u64(state.as_ptr().add(2)),
        vld1q_u64(state.as_ptr().add(4)),
        vld1q_u64(state.as_ptr().add(6)),
    ];

    for block in data.chunks_exact(BLOCK_SIZE) {
        let saved = v;

        let p = block.as_ptr();
        let mut s = [vdupq_n_u64(0); 8];
        for (i, si) in s.iter_mut().enumerate() {
            *si = load_be(p.add(16 * i));
        }

        for t in 0..40 {
            let i = t % 8;
            if t >= 8 {
                s[i] = vsha512su1q_u64(
                    vsha512su0q_u64(s[i], s[(i + 1) % 8]),
                    s[(i + 7) % 8],
                    vextq_u64(s[(i + 4) % 8], s[(i + 5) % 8], 1),
                );
            }

            let ab = (4 - t % 4) % 4;
            let cd = (ab + 1) % 4;
            let ef = (ab + 2) % 4;
            let gh = (ab + 3) % 4;

            let wk = vaddq_u64(s[i], vld1q_u64(K64.as_ptr().add(2 * t)));
            let sum = vaddq_u64(vextq_u64(wk, wk, 1), v[gh]);
            let inter = vsha512hq_u64(
                sum,
                vextq_u64(v[ef], v[gh], 1),
                vextq_u64(v[cd], v[ef], 1),
            );
            v[gh] = vsha512h2q_u64(inter, v[cd], v[ab]);
            v[cd] = vaddq_u64(v[cd], inter);
        }

        for (vi, si) in v.iter_mut().zip(saved) {
            *vi = vaddq_u64(*vi, si);
        }
    }

    for (i, vi) in v.into_iter().enumerate() {
        vst1q_u64(state.as_mut_ptr().add(2 * i), vi);
    }
}
