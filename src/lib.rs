//! update-cask: Render the ai-review Homebrew cask from release inputs.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{FilesystemCaskStore, ProcessEnv};
use app::{
    AppContext,
    commands::{digest, render},
};
use domain::AI_REVIEW;

pub use app::commands::digest::FileDigest;
pub use app::commands::render::{RenderAction, RenderMode, RenderOptions, RenderOutcome};
pub use domain::{AppError, CaskVariant};

/// Render the cask from the process environment into the current directory.
///
/// Reads `VERSION`, `SHA_ARM` and, for the dual variant, `SHA_INTEL`.
pub fn render(options: RenderOptions) -> Result<RenderOutcome, AppError> {
    let store = FilesystemCaskStore::current()?;
    let ctx = AppContext::new(ProcessEnv, store);

    let outcome = render::execute(&ctx, &AI_REVIEW, &options)?;
    match outcome.action {
        RenderAction::Written => println!("Updated cask to {}", outcome.version),
        RenderAction::Printed => print!("{}", outcome.manifest),
        RenderAction::UpToDate => println!("Cask is up to date for {}", outcome.version),
    }
    Ok(outcome)
}

/// Print the SHA-256 of each release artifact.
pub fn digest<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<FileDigest>, AppError> {
    let digests = digest::execute(paths)?;
    for entry in &digests {
        println!("{}", entry.line());
    }
    Ok(digests)
}
