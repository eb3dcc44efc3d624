mod map_env;
mod memory_cask_store;

pub use map_env::MapEnv;
pub use memory_cask_store::MemoryCaskStore;
