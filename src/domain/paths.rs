use std::path::PathBuf;

/// Directory holding cask definitions, relative to the tap root.
pub const CASKS_DIR: &str = "Casks";

/// Relative path of the cask file for `token`.
pub fn cask_path(token: &str) -> PathBuf {
    PathBuf::from(CASKS_DIR).join(format!("{}.rb", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cask_path_lives_under_casks_dir() {
        assert_eq!(cask_path("ai-review"), PathBuf::from("Casks/ai-review.rb"));
    }
}
