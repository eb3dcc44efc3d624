use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::CaskStore;

/// In-memory cask store for testing.
#[derive(Debug, Default)]
pub struct MemoryCaskStore {
    files: RefCell<HashMap<PathBuf, String>>,
    writes: RefCell<usize>,
}

impl MemoryCaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl CaskStore for MemoryCaskStore {
    fn write_cask(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn read_cask(&self, path: &Path) -> Result<Option<String>, AppError> {
        Ok(self.files.borrow().get(path).cloned())
    }
}
