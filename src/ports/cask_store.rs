use std::path::Path;

use crate::domain::AppError;

/// Port for persisting rendered casks.
pub trait CaskStore {
    /// Replace the file at `path` with `content`, creating parent directories.
    fn write_cask(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Current content at `path`, or `None` if no file exists there.
    fn read_cask(&self, path: &Path) -> Result<Option<String>, AppError>;
}
