use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Environment variable carrying the release version.
pub const ENV_VERSION: &str = "VERSION";
/// Environment variable carrying the ARM64 checksum.
pub const ENV_SHA_ARM: &str = "SHA_ARM";
/// Environment variable carrying the x86-64 checksum.
pub const ENV_SHA_INTEL: &str = "SHA_INTEL";

/// Shape of the rendered cask.
///
/// `Dual` ships one download per architecture and is the current layout.
/// `Single` is the older Apple Silicon only cask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaskVariant {
    Single,
    #[default]
    Dual,
}

impl CaskVariant {
    pub const ALL: [CaskVariant; 2] = [CaskVariant::Dual, CaskVariant::Single];

    pub fn name(&self) -> &'static str {
        match self {
            CaskVariant::Single => "single",
            CaskVariant::Dual => "dual",
        }
    }

    /// Environment variables that must be present for this variant.
    pub fn required_env(&self) -> &'static [&'static str] {
        match self {
            CaskVariant::Single => &[ENV_VERSION, ENV_SHA_ARM],
            CaskVariant::Dual => &[ENV_VERSION, ENV_SHA_ARM, ENV_SHA_INTEL],
        }
    }

    /// Name of the embedded template rendering this variant.
    pub fn template_name(&self) -> &'static str {
        match self {
            CaskVariant::Single => "single.rb.j2",
            CaskVariant::Dual => "dual.rb.j2",
        }
    }
}

impl fmt::Display for CaskVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaskVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidVariant(s.to_string()))
    }
}
