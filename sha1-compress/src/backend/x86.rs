//! SHA-NI accelerated SHA-1 for x86/x86_64.
//!
//! Each `SHA1RNDS4` performs four rounds. `SHA1NEXTE` derives the next `E` from the previous
//! `A` and adds it to four schedule words; `SHA1MSG1`/`SHA1MSG2` extend the schedule four words
//! at a time.

#![allow(unsafe_op_in_unsafe_fn, unused_unsafe)]

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::{BLOCK_SIZE, State};

/// Four rounds with stage function `$f`, consuming schedule words `$w`.
macro_rules! rounds4 {
    ($abcd:ident, $e:ident, $w:expr, $f:literal) => {
        _mm_sha1rnds4_epu32($abcd, _mm_sha1nexte_epu32($e, $w), $f)
    };
}

/// Next four schedule words from the previous sixteen.
macro_rules! schedule {
    ($v0:expr, $v1:expr, $v2:expr, $v3:expr) => {
        _mm_sha1msg2_epu32(_mm_xor_si128(_mm_sha1msg1_epu32($v0, $v1), $v2), $v3)
    };
}

/// Process every whole block in `data`.
///
/// # Safety
///
/// The `sha`, `sse2`, `ssse3` and `sse4.1` target features must be enabled.
#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
pub(super) unsafe fn compress(state: &mut State, data: &[u8]) {
    // Big-endian word load, with word order reversed so `W[0]` is the top lane
    let mask = _mm_set_epi64x(0x0001_0203_0405_0607, 0x0809_0A0B_0C0D_0E0F);

    let mut abcd = _mm_shuffle_epi32(_mm_loadu_si128(state.as_ptr().cast()), 0x1B);
    #[allow(clippy::cast_possible_wrap)]
    let mut e = _mm_set_epi32(state[4] as i32, 0, 0, 0);

    for block in data.chunks_exact(BLOCK_SIZE) {
        let p = block.as_ptr().cast::<__m128i>();
        let mut w0 = _mm_shuffle_epi8(_mm_loadu_si128(p), mask);
        let mut w1 = _mm_shuffle_epi8(_mm_loadu_si128(p.add(1)), mask);
        let mut w2 = _mm_shuffle_epi8(_mm_loadu_si128(p.add(2)), mask);
        let mut w3 = _mm_shuffle_epi8(_mm_loadu_si128(p.add(3)), mask);

        let abcd_save = abcd;
        let e_save = e;

        // Rounds 0..16
        let mut h0 = abcd;
        let mut h1 = _mm_sha1rnds4_epu32(h0, _mm_add_epi32(e, w0), 0);
        h0 = rounds4!(h1, h0, w1, 0);
        h1 = rounds4!(h0, h1, w2, 0);
        h0 = rounds4!(h1, h0, w3, 0);

        // Rounds 16..80
        let mut w4 = schedule!(w0, w1, w2, w3);
        h1 = rounds4!(h0, h1, w4, 0);
        w0 = schedule!(w1, w2, w3, w4);
        h0 = rounds4!(h1, h0, w0, 1);
        w1 = schedule!(w2, w3, w4, w0);
        h1 = rounds4!(h0, h1, w1, 1);
        w2 = schedule!(w3, w4, w0, w1);
        h0 = rounds4!(h1, h0, w2, 1);
        w3 = schedule!(w4, w0, w1, w2);
        h1 = rounds4!(h0, h1, w3, 1);
        w4 = schedule!(w0, w1, w2, w3);
        h0 = rounds4!(h1, h0, w4, 1);
        w0 = schedule!(w1, w2, w3, w4);
        h1 = rounds4!(h0, h1, w0, 2);
        w1 = schedule!(w2, w3, w4, w0);
        h0 = rounds4!(h1, h0, w1, 2);
        w2 = schedule!(w3, w4, w0, w1);
        h1 = rounds4!(h0, h1, w2, 2);
        w3 = schedule!(w4, w0, w1, w2);
        h0 = rounds4!(h1, h0, w3, 2);
        w4 = schedule!(w0, w1, w2, w3);
        h1 = rounds4!(h0, h1, w4, 2);
        w0 = schedule!(w1, w2, w3, w4);
        h0 = rounds4!(h1, h0, w0, 3);
        w1 = schedule!(w2, w3, w4, w0);
        h1 = rounds4!(h0, h1, w1, 3);
        w2 = schedule!(w3, w4, w0, w1);
        h0 = rounds4!(h1, h0, w2, 3);
        w3 = schedule!(w4, w0, w1, w2);
        h1 = rounds4!(h0, h1, w3, 3);
        w4 = schedule!(w0, w1, w2, w3);
        h0 = rounds4!(h1, h0, w4, 3);

        abcd = _mm_add_epi32(h0, abcd_save);
        e = _mm_sha1nexte_epu32(h1, e_save);
    }

    _mm_storeu_si128(state.as_mut_ptr().cast(), _mm_shuffle_epi32(abcd, 0x1B));
    #[allow(clippy::cast_sign_loss)]
    let e = _mm_extract_epi32(e, 3) as u32;
    state[4] = e;
}
