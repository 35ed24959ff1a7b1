//! SHA-512 compression implementations.

pub(crate) mod soft;

use cfg_if::cfg_if;

/// Size of a SHA-512 block in bytes.
pub const BLOCK_SIZE: usize = 128;

/// SHA-512 chaining state.
pub type State = [u64; 8];

cfg_if! {
    if #[cfg(all(target_arch = "aarch64", not(sha2_backend = "soft")))] {
        mod aarch64;

        cpufeatures::new!(sha512_cpuid, "sha3"); // `sha3` covers the SHA512 instructions

        fn supported(backend: Backend) -> bool {
            backend == Backend::ArmSha3 && sha512_cpuid::get()
        }

        fn accelerated(backend: Backend, state: &mut State, data: &[u8]) -> bool {
            if supported(backend) {
                // SAFETY: we have checked the CPU has the necessary intrinsics above
                unsafe { aarch64::compress(state, data) };
                true
            } else {
                false
            }
        }
    } else {
        fn supported(_backend: Backend) -> bool {
            false
        }

        fn accelerated(_backend: Backend, _state: &mut State, _data: &[u8]) -> bool {
            false
        }
    }
}

/// Implementation of the SHA-512 compression function.
///
/// Every variant produces identical state updates. Asking a variant which is not available on
/// the running CPU (or which was compiled out) to compress falls back to [`Backend::Soft`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Backend {
    /// Portable implementation in pure Rust.
    Soft,

    /// ARMv8.2 SHA-512 instructions (`SHA512H`, `SHA512H2`, ...).
    ArmSha3,
}

impl Backend {
    /// All implementations, portable one first.
    pub const ALL: [Backend; 2] = [Backend::Soft, Backend::ArmSha3];

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Soft => "soft",
            Backend::ArmSha3 => "armv8-sha512",
        }
    }

    /// Target features this implementation is compiled with.
    #[must_use]
    pub const fn required_features(self) -> &'static [&'static str] {
        match self {
            Backend::Soft => &[],
            Backend::ArmSha3 => &["sha3"],
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

    /// Process every whole 128-byte block in `data` with this implementation.
    #[inline]
    pub fn compress(self, state: &mut State, data: &[u8]) {
        if !accelerated(self, state, data) {
            soft::compress(state, data);
        }
    }
}
