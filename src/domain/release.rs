use std::collections::HashMap;

use super::AppError;
use super::variant::{CaskVariant, ENV_SHA_ARM, ENV_SHA_INTEL, ENV_VERSION};

/// Checksums for the release DMGs, keyed by architecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checksums {
    Single { arm: String },
    Dual { arm: String, intel: String },
}

impl Checksums {
    pub fn arm(&self) -> &str {
        match self {
            Checksums::Single { arm } | Checksums::Dual { arm, .. } => arm.as_str(),
        }
    }

    pub fn intel(&self) -> Option<&str> {
        match self {
            Checksums::Single { .. } => None,
            Checksums::Dual { intel, .. } => Some(intel.as_str()),
        }
    }

    pub fn variant(&self) -> CaskVariant {
        match self {
            Checksums::Single { .. } => CaskVariant::Single,
            Checksums::Dual { .. } => CaskVariant::Dual,
        }
    }
}

/// Values a release supplies to the cask. Opaque strings, never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInputs {
    pub version: String,
    pub checksums: Checksums,
}

impl ReleaseInputs {
    /// Collect the inputs `variant` needs through `lookup`.
    ///
    /// Keys are resolved in `variant.required_env()` order. Absent and empty
    /// values both count as missing.
    pub fn from_lookup<F>(variant: CaskVariant, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut resolved = HashMap::new();
        for &key in variant.required_env() {
            let value = lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::missing_env(key))?;
            resolved.insert(key, value);
        }

        let mut take =
            |key: &str| resolved.remove(key).ok_or_else(|| AppError::missing_env(key));

        let version = take(ENV_VERSION)?;
        let arm = take(ENV_SHA_ARM)?;
        let checksums = match variant {
            CaskVariant::Single => Checksums::Single { arm },
            CaskVariant::Dual => Checksums::Dual { arm, intel: take(ENV_SHA_INTEL)? },
        };

        Ok(Self { version, checksums })
    }
}
