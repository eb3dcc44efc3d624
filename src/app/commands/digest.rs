use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, sha256_hex};

/// SHA-256 of one release artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigest {
    pub path: PathBuf,
    pub sha256: String,
}

impl FileDigest {
    /// `shasum -a 256` style line.
    pub fn line(&self) -> String {
        format!("{}  {}", self.sha256, self.path.display())
    }
}

/// Hash each file in order, stopping at the first unreadable one.
pub fn execute<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<FileDigest>, AppError> {
    paths
        .iter()
        .map(|path| -> Result<FileDigest, AppError> {
            let path = path.as_ref();
            let bytes = fs::read(path)?;
            Ok(FileDigest { path: path.to_path_buf(), sha256: sha256_hex(&bytes) })
        })
        .collect()
}
