pub mod cask;
pub mod digest;
pub mod error;
pub mod paths;
pub mod release;
pub mod variant;

pub use cask::{AI_REVIEW, Arch, CaskProfile};
pub use digest::sha256_hex;
pub use error::AppError;
pub use paths::{CASKS_DIR, cask_path};
pub use release::{Checksums, ReleaseInputs};
pub use variant::{CaskVariant, ENV_SHA_ARM, ENV_SHA_INTEL, ENV_VERSION};
