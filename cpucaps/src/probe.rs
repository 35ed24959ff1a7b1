//! Runtime detection of individual instruction set extensions.
//!
//! Detection goes straight to `cpufeatures`, so the answer reflects the
//! CPU even when a library was built with its backend forced to `soft`.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use tracing::debug;

/// An instruction set extension used by one of the accelerated backends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Extension {
    /// x86 SHA extensions (SHA-1 and SHA-256)
    #[default]
    ShaNi,

    /// x86 carry-less multiply
    Pclmulqdq,

    /// ARMv8 SHA-1 and SHA-256 instructions
    ArmSha2,

    /// ARMv8.2 SHA-512 instructions
    ArmSha3,

    /// ARMv8 polynomial multiply (shipped with the AES extension)
    ArmPmull,
}

impl Extension {
    pub const ALL: [Extension; 5] = [
        Extension::ShaNi,
        Extension::Pclmulqdq,
        Extension::ArmSha2,
        Extension::ArmSha3,
        Extension::ArmPmull,
    ];

    /// Name used in the probe report.
    pub const fn label(self) -> &'static str {
        match self {
            Extension::ShaNi => "SHA-NI",
            Extension::Pclmulqdq => "PCLMULQDQ",
            Extension::ArmSha2 => "ARMv8 SHA2",
            Extension::ArmSha3 => "ARMv8 SHA3",
            Extension::ArmPmull => "ARMv8 PMULL",
        }
    }

    /// Is this extension present on the running CPU?
    ///
    /// Always `false` for extensions of a different architecture.
    pub fn is_supported(self) -> bool {
        supported(self)
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        cpufeatures::new!(sha_cpuid, "sha");
        cpufeatures::new!(clmul_cpuid, "pclmulqdq");

        fn supported(extension: Extension) -> bool {
            match extension {
                Extension::ShaNi => sha_cpuid::get(),
                Extension::Pclmulqdq => clmul_cpuid::get(),
                _ => false,
            }
        }
    } else if #[cfg(target_arch = "aarch64")] {
        cpufeatures::new!(sha2_cpuid, "sha2");
        cpufeatures::new!(sha3_cpuid, "sha3");
        cpufeatures::new!(pmull_cpuid, "aes");

        fn supported(extension: Extension) -> bool {
            match extension {
                Extension::ArmSha2 => sha2_cpuid::get(),
                Extension::ArmSha3 => sha3_cpuid::get(),
                Extension::ArmPmull => pmull_cpuid::get(),
                _ => false,
            }
        }
    } else {
        fn supported(_extension: Extension) -> bool {
            false
        }
    }
}

/// Report whether `extension` is present. Returns `true` if it is.
pub fn run(out: &mut impl Write, extension: Extension, quiet: bool) -> Result<bool> {
    let present = extension.is_supported();
    debug!(?extension, present, "probed extension");

    if !quiet {
        let verdict = if present { "supports" } else { "does not support" };
        writeln!(out, "This CPU {verdict} {}", extension.label())?;
    }

    Ok(present)
}
