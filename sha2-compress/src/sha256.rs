//! SHA-256 compression implementations.

pub(crate) mod soft;

use cfg_if::cfg_if;

/// Size of a SHA-256 block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// SHA-256 chaining state.
pub type State = [u32; 8];

cfg_if! {
    if #[cfg(all(target_arch = "aarch64", not(sha2_backend = "soft")))] {
        mod aarch64;

        cpufeatures::new!(sha256_cpuid, "sha2");

        fn supported(backend: Backend) -> bool {
            backend == Backend::ArmSha2 && sha256_cpuid::get()
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
    } else if #[cfg(all(
        any(target_arch = "x86_64", target_arch = "x86"),
        not(sha2_backend = "soft")
    ))] {
        mod x86;

        cpufeatures::new!(shani_cpuid, "sha", "sse2", "ssse3", "sse4.1");

        fn supported(backend: Backend) -> bool {
            backend == Backend::ShaNi && shani_cpuid::get()
        }

        fn accelerated(backend: Backend, state: &mut State, data: &[u8]) -> bool {
            if supported(backend) {
                // SAFETY: we have checked the CPU has the necessary intrinsics above
                unsafe { x86::compress(state, data) };
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

/// Implementation of the SHA-256 compression function.
///
/// Every variant produces identical state updates. Asking a variant which is not available on
/// the running CPU (or which was compiled out) to compress falls back to [`Backend::Soft`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Backend {
    /// Portable implementation in pure Rust.
    Soft,

    /// x86/x86_64 SHA extensions (SHA-NI).
    ShaNi,

    /// ARMv8 cryptographic extensions (`SHA256H`, `SHA256H2`, ...).
    ArmSha2,
}

impl Backend {
    /// All implementations, portable one first.
    pub const ALL: [Backend; 3] = [Backend::Soft, Backend::ShaNi, Backend::ArmSha2];

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Soft => "soft",
            Backend::ShaNi => "sha-ni",
            Backend::ArmSha2 => "armv8-sha2",
        }
    }

    /// Target features this implementation is compiled with.
    #[must_use]
    pub const fn required_features(self) -> &'static [&'static str] {
        match self {
            Backend::Soft => &[],
            Backend::ShaNi => &["sha", "sse2", "ssse3", "sse4.1"],
            Backend::ArmSha2 => &["sha2"],
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

    /// Process every whole 64-byte block in `data` with this implementation.
    #[inline]
    pub fn compress(self, state: &mut State, data: &[u8]) {
        if !accelerated(self, state, data) {
            soft::compress(state, data);
        }
    }
}
