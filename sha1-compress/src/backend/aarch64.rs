//! ARMv8 SHA-1 using the cryptographic extension.
//!
//! Based on code from ARM, and by Johannes Schneiders and Barry O'Rourke for the mbedTLS
//! project, as collected by Jeffrey Walton:
//! <https://github.com/noloader/SHA-Intrinsics/blob/master/sha1-arm.c>

#![allow(unsafe_op_in_unsafe_fn)]

use crate::{BLOCK_SIZE, State, consts::K};
use core::arch::aarch64::*;

/// Four rounds: derive the next `E` from the current `A`, then run `$op`.
macro_rules! rounds4 {
    ($op:ident, $abcd:ident, $e_next:ident, $e:ident, $wk:expr) => {
        $e_next = vsha1h_u32(vgetq_lane_u32($abcd, 0));
        $abcd = $op($abcd, $e, $wk);
    };
}

/// Load 16 bytes as four big-endian words.
#[inline]
#[target_feature(enable = "neon")]
unsafe fn load_be(bytes: *const u8) -> uint32x4_t {
    vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(bytes)))
}

/// Process every whole block in `data`.
///
/// # Safety
/// It is the caller's responsibility to ensure the host CPU supports the SHA1 instructions.
#[target_feature(enable = "sha2")]
pub(super) unsafe fn compress(state: &mut State, data: &[u8]) {
    let k0 = vdupq_n_u32(K[0]);
    let k1 = vdupq_n_u32(K[1]);
    let k2 = vdupq_n_u32(K[2]);
    let k3 = vdupq_n_u32(K[3]);

    let mut abcd = vld1q_u32(state.as_ptr());
    let mut e0 = state[4];

    for block in data.chunks_exact(BLOCK_SIZE) {
        let abcd_save = abcd;
        let e0_save = e0;
        let mut e1;

        let p = block.as_ptr();
        let mut msg0 = load_be(p);
        let mut msg1 = load_be(p.add(16));
        let mut msg2 = load_be(p.add(32));
        let mut msg3 = load_be(p.add(48));

        let mut tmp0 = vaddq_u32(msg0, k0);
        let mut tmp1 = vaddq_u32(msg1, k0);

        // Rounds 0-3
        rounds4!(vsha1cq_u32, abcd, e1, e0, tmp0);
        tmp0 = vaddq_u32(msg2, k0);
        msg0 = vsha1su0q_u32(msg0, msg1, msg2);

        // Rounds 4-7
        rounds4!(vsha1cq_u32, abcd, e0, e1, tmp1);
        tmp1 = vaddq_u32(msg3, k0);
        msg0 = vsha1su1q_u32(msg0, msg3);
        msg1 = vsha1su0q_u32(msg1, msg2, msg3);

        // Rounds 8-11
        rounds4!(vsha1cq_u32, abcd, e1, e0, tmp0);
        tmp0 = vaddq_u32(msg0, k0);
        msg1 = vsha1su1q_u32(msg1, msg0);
        msg2 = vsha1su0q_u32(msg2, msg3, msg0);

        // Rounds 12-15
        rounds4!(vsha1cq_u32, abcd, e0, e1, tmp1);
        tmp1 = vaddq_u32(msg1, k1);
        msg2 = vsha1su1q_u32(msg2, msg1);
        msg3 = vsha1su0q_u32(msg3, msg0, msg1);

        // Rounds 16-19
        rounds4!(vsha1cq_u32, abcd, e1, e0, tmp0);
        tmp0 = vaddq_u32(msg2, k1);
        msg3 = vsha1su1q_u32(msg3, msg2);
        msg0 = vsha1su0q_u32(msg0, msg1, msg2);

        // Rounds 20-23
        rounds4!(vsha1pq_u32, abcd, e0, e1, tmp1);
        tmp1 = vaddq_u32(msg3, k1);
        msg0 = vsha1su1q_u32(msg0, msg3);
        msg1 = vsha1su0q_u32(msg1, msg2, msg3);

        // Rounds 24-27
        rounds4!(vsha1pq_u32, abcd, e1, e0, tmp0);
        tmp0 = vaddq_u32(msg0, k1);
        msg1 = vsha1su1q_u32(msg1, msg0);
        msg2 = vsha1su0q_u32(msg2, msg3, msg0);

        // Rounds 28-31
        rounds4!(vsha1pq_u32, abcd, e0, e1, tmp1);
        tmp1 = vaddq_u32(msg1, k1);
        msg2 = vsha1su1q_u32(msg2, msg1);
        msg3 = vsha1su0q_u32(msg3, msg0, msg1);

        // Rounds 32-35
        rounds4!(vsha1pq_u32, abcd, e1, e0, tmp0);
        tmp0 = vaddq_u32(msg2, k2);
        msg3 = vsha1su1q_u32(msg3, msg2);
        msg0 = vsha1su0q_u32(msg0, msg1, msg2);

        // Rounds 36-39
        rounds4!(vsha1pq_u32, abcd, e0, e1, tmp1);
        tmp1 = vaddq_u32(msg3, k2);
        msg0 = vsha1su1q_u32(msg0, msg3);
        msg1 = vsha1su0q_u32(msg1, msg2, msg3);

        // Rounds 40-43
        rounds4!(vsha1mq_u32, abcd, e1, e0, tmp0);
        tmp0 = vaddq_u32(msg0, k2);
        msg1 = vsha1su1q_u32(msg1, msg0);
        msg2 = vsha1su0q_u32(msg2, msg3, msg0);

        // Rounds 44-47
        rounds4!(vsha1mq_u32, abcd, e0, e1, tmp1);
        tmp1 = vaddq_u32(msg1, k2);
        msg2 = vsha1su1q_u32(msg2, msg1);
        msg3 = vsha1su0q_u32(msg3, msg0, msg1);

        // Rounds 48-51
        rounds4!(vsha1mq_u32, abcd, e1, e0, tmp0);
        tmp0 = vaddq_u32(msg2, k2);
        msg3 = vsha1su1q_u32(msg3, msg2);
        msg0 = vsha1su0q_u32(msg0, msg1, msg2);

        // Rounds 52-55
        rounds4!(vsha1mq_u32, abcd, e0, e1, tmp1);
        tmp1 = vaddq_u32(msg3, k3);
        msg0 = vsha1su1q_u32(msg0, msg3);
        msg1 = vsha1su0q_u32(msg1, msg2, msg3);

        // Rounds 56-59
        rounds4!(vsha1mq_u32, abcd, e1, e0, tmp0);
        tmp0 = vaddq_u32(msg0, k3);
        msg1 = vsha1su1q_u32(msg1, msg0);
        msg2 = vsha1su0q_u32(msg2, msg3, msg0);

        // Rounds 60-63
        rounds4!(vsha1pq_u32, abcd, e0, e1, tmp1);
        tmp1 = vaddq_u32(msg1, k3);
        msg2 = vsha1su1q_u32(msg2, msg1);
        msg3 = vsha1su0q_u32(msg3, msg0, msg1);

        // Rounds 64-67
        rounds4!(vsha1pq_u32, abcd, e1, e0, tmp0);
        tmp0 = vaddq_u32(msg2, k3);
        msg3 = vsha1su1q_u32(msg3, msg2);

        // Rounds 68-71
        rounds4!(vsha1pq_u32, abcd, e0, e1, tmp1);
        tmp1 = vaddq_u32(msg3, k3);

        // Rounds 72-75
        rounds4!(vsha1pq_u32, abcd, e1, e0, tmp0);

        // Rounds 76-79
        rounds4!(vsha1pq_u32, abcd, e0, e1, tmp1);

        e0 = e0.wrapping_add(e0_save);
        abcd = vaddq_u32(abcd_save, abcd);
    }

    vst1q_u32(state.as_mut_ptr(), abcd);
    state[4] = e0;
}
