//! ARMv8 SHA-256 using the cryptographic extension.

#![allow(unsafe_op_in_unsafe_fn)]

use super::{BLOCK_SIZE, State};
use crate::consts::K32;
use core::arch::aarch64::*;

/// Load 16 bytes as four big-endian words.
#[inline]
#[target_feature(enable = "neon")]
unsafe fn load_be(bytes: *const u8) -> uint32x4_t {
    vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(bytes)))
}

/// Process every whole block in `data`.
///
/// # Safety
/// It is the caller's responsibility to ensure the host CPU supports the SHA256 instructions.
#[target_feature(enable = "sha2")]
pub(super) unsafe fn compress(state: &mut State, data: &[u8]) {
    let mut abcd = vld1q_u32(state.as_ptr());
    let mut efgh = vld1q_u32(state.as_ptr().add(4));

    for block in data.chunks_exact(BLOCK_SIZE) {
        let abcd_save = abcd;
        let efgh_save = efgh;

        let p = block.as_ptr();
        let mut msg = [
            load_be(p),
            load_be(p.add(16)),
            load_be(p.add(32)),
            load_be(p.add(48)),
        ];

        // Four rounds per iteration; `msg[i]` is replaced by the words for four iterations later
        for g in 0..16 {
            let i = g % 4;
            let wk = vaddq_u32(msg[i], vld1q_u32(K32.as_ptr().add(4 * g)));

            let abcd_prev = abcd;
            abcd = vsha256hq_u32(abcd, efgh, wk);
            efgh = vsha256h2q_u32(efgh, abcd_prev, wk);

            if g < 12 {
                msg[i] = vsha256su1q_u32(
                    vsha256su0q_u32(msg[i], msg[(i + 1) % 4]),
                    msg[(i + 2) % 4],
                    msg[(i + 3) % 4],
                );
            }
        }

        abcd = vaddq_u32(abcd, abcd_save);
        efgh = vaddq_u32(efgh, efgh_save);
    }

    vst1q_u32(state.as_mut_ptr(), abcd);
    vst1q_u32(state.as_mut_ptr().add(4), efgh);
}
