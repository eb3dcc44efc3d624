mod cask_store;
mod env_source;

pub use cask_store::CaskStore;
pub use env_source::EnvSource;
