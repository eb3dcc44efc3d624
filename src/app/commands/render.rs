use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, CaskProfile, CaskVariant, ReleaseInputs, cask_path};
use crate::ports::{CaskStore, EnvSource};

/// What to do with the rendered manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Overwrite the cask file.
    #[default]
    Write,
    /// Hand the manifest back without touching the filesystem.
    Stdout,
    /// Compare against the cask file and fail if it differs.
    Check,
}

/// Options for the render command.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub variant: CaskVariant,
    /// Overrides `Casks/<token>.rb`.
    pub output: Option<PathBuf>,
    pub mode: RenderMode,
}

/// Result of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub version: String,
    pub path: PathBuf,
    pub manifest: String,
    pub action: RenderAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderAction {
    Written,
    Printed,
    UpToDate,
}

/// Render the cask for `profile` from the environment and apply `options.mode`.
///
/// Every input is resolved and rendered before the store is touched, so a
/// missing variable never leaves a partial file behind.
pub fn execute<E: EnvSource, S: CaskStore>(
    ctx: &AppContext<E, S>,
    profile: &CaskProfile,
    options: &RenderOptions,
) -> Result<RenderOutcome, AppError> {
    let inputs = ReleaseInputs::from_lookup(options.variant, |key| ctx.env().var(key))?;
    let manifest = ctx.renderer().render(profile, &inputs)?;
    let path = options.output.clone().unwrap_or_else(|| cask_path(profile.token));

    let action = match options.mode {
        RenderMode::Write => {
            ctx.store().write_cask(&path, &manifest)?;
            RenderAction::Written
        }
        RenderMode::Stdout => RenderAction::Printed,
        RenderMode::Check => {
            let current = ctx.store().read_cask(&path)?;
            if current.as_deref() != Some(manifest.as_str()) {
                return Err(AppError::CaskOutOfDate { path: path.display().to_string() });
            }
            RenderAction::UpToDate
        }
    };

    Ok(RenderOutcome { version: inputs.version, path, manifest, action })
}
