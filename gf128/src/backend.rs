//! Capability-indexed implementations of GF(2^128) multiplication.

pub(crate) mod soft;

use crate::Block;
use cpubits::cfg_if;

cfg_if! {
    if #[cfg(all(target_arch = "aarch64", not(gf128_backend = "soft")))] {
        mod pmull;

        cpufeatures::new!(pmull_cpuid, "aes"); // `aes` implies PMULL

        fn supported(backend: Backend) -> bool {
            backend == Backend::Pmull && pmull_cpuid::get()
        }

        fn accelerated(backend: Backend, a: &Block, b: &Block) -> Option<Block> {
            if supported(backend) {
                // SAFETY: we have checked the CPU has the necessary intrinsics above
                Some(unsafe { pmull::multiply(a, b) })
            } else {
                None
            }
        }
    } else if #[cfg(all(
        any(target_arch = "x86_64", target_arch = "x86"),
        not(gf128_backend = "soft")
    ))] {
        mod clmul;

        cpufeatures::new!(clmul_cpuid, "pclmulqdq", "sse2", "ssse3");

        fn supported(backend: Backend) -> bool {
            backend == Backend::Clmul && clmul_cpuid::get()
        }

        fn accelerated(backend: Backend, a: &Block, b: &Block) -> Option<Block> {
            if supported(backend) {
                // SAFETY: we have checked the CPU has the necessary intrinsics above
                Some(unsafe { clmul::multiply(a, b) })
            } else {
                None
            }
        }
    } else {
        // "soft" only targets, or intrinsics disabled by `gf128_backend = "soft"`
        fn supported(_backend: Backend) -> bool {
            false
        }

        fn accelerated(_backend: Backend, _a: &Block, _b: &Block) -> Option<Block> {
            None
        }
    }
}

/// Implementation of GF(2^128) multiplication.
///
/// Every variant computes the identical function. Asking a variant which is not available on the
/// running CPU (or which was compiled out) to multiply falls back to [`Backend::Soft`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Backend {
    /// Portable implementation in pure Rust.
    Soft,

    /// x86/x86_64 carryless multiply (`PCLMULQDQ`).
    Clmul,

    /// ARMv8 polynomial multiply long (`PMULL`).
    Pmull,
}

impl Backend {
    /// All implementations, portable one first.
    pub const ALL: [Backend; 3] = [Backend::Soft, Backend::Clmul, Backend::Pmull];

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Soft => "soft",
            Backend::Clmul => "clmul",
            Backend::Pmull => "pmull",
        }
    }

    /// Target features this implementation is compiled with.
    #[must_use]
    pub const fn required_features(self) -> &'static [&'static str] {
        match self {
            Backend::Soft => &[],
            Backend::Clmul => &["pclmulqdq", "sse2", "ssse3"],
            Backend::Pmull => &["aes", "neon"],
        }
    }

    /// Can this implementation run on the current CPU in this build?
    #[must_use]
    pub fn is_available(self) -> bool {
        self == Backend::Soft || supported(self)
    }

    /// Fastest available implementation.
    #[must_use]
    pub fn detect() -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|backend| backend.is_available())
            .unwrap_or(Backend::Soft)
    }

    /// Multiply `a` by `b` with this implementation.
    #[inline]
    #[must_use]
    pub fn multiply(self, a: &Block, b: &Block) -> Block {
        accelerated(self, a, b).unwrap_or_else(|| soft::multiply(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::Backend;

    #[test]
    fn soft_always_available() {
        assert!(Backend::Soft.is_available());
        assert!(Backend::Soft.required_features().is_empty());
    }

    #[test]
    fn at_most_one_accelerated_backend() {
        let n = Backend::ALL
            .into_iter()
            .filter(|&backend| backend != Backend::Soft && backend.is_available())
            .count();
        assert!(n <= 1);
    }

    #[test]
    fn detect_prefers_accelerated() {
        let detected = Backend::detect();
        assert!(detected.is_available());
        if Backend::Clmul.is_available() {
            assert_eq!(detected, Backend::Clmul);
        }
        if Backend::Pmull.is_available() {
            assert_eq!(detected, Backend::Pmull);
        }
    }
}
