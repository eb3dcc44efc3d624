mod cask_filesystem;
mod cask_template;
mod process_env;

pub use cask_filesystem::FilesystemCaskStore;
pub use cask_template::{CaskContext, CaskTemplateRenderer};
pub use process_env::ProcessEnv;
