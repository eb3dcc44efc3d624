use url::Url;

use super::AppError;

/// CPU architecture a release DMG is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Arm64,
    Intel,
}

impl Arch {
    /// Suffix the bundler gives the DMG for this architecture.
    pub fn dmg_suffix(&self) -> &'static str {
        match self {
            Arch::Arm64 => "aarch64",
            Arch::Intel => "x64",
        }
    }
}

/// Static description of the cask being published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaskProfile {
    pub token: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub homepage: &'static str,
    pub bundle_id: &'static str,
    pub app: &'static str,
    pub binary_target: &'static str,
    /// Prefix of the DMG file name, before `_<version>_<arch>.dmg`.
    pub dmg_prefix: &'static str,
}

/// The AI Review desktop app.
pub const AI_REVIEW: CaskProfile = CaskProfile {
    token: "ai-review",
    name: "AI Review",
    desc: "Desktop code review tool for AI-generated diffs",
    homepage: "https://github.com/mrmans0n/ai-review",
    bundle_id: "com.nacholopez.ai-review",
    app: "AI Review.app",
    binary_target: "air",
    dmg_prefix: "AI.Review",
};

impl CaskProfile {
    /// Base URL release assets are downloaded from, without a trailing slash.
    pub fn release_download_base(&self) -> Result<String, AppError> {
        let mut url = Url::parse(self.homepage).map_err(|e| {
            AppError::Template(format!("Invalid homepage '{}': {}", self.homepage, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Template(format!("Homepage '{}' cannot be a base URL", self.homepage))
            })?
            .pop_if_empty()
            .extend(["releases", "download"]);
        Ok(url.as_str().trim_end_matches('/').to_string())
    }

    /// Download URL for `arch`, using the cask's own `#{version}` interpolation.
    ///
    /// The version is left to Homebrew so the URL line never changes between releases.
    pub fn download_url(&self, arch: Arch) -> Result<String, AppError> {
        Ok(format!(
            "{}/v#{{version}}/{}_#{{version}}_{}.dmg",
            self.release_download_base()?,
            self.dmg_prefix,
            arch.dmg_suffix()
        ))
    }

    /// Path of the CLI shim inside the installed app bundle.
    pub fn binary_source(&self) -> String {
        let exe = self.app.trim_end_matches(".app");
        format!("#{{appdir}}/{}/Contents/MacOS/{}", self.app, exe)
    }

    /// User data removed by `brew uninstall --zap`.
    pub fn zap_paths(&self) -> Vec<String> {
        vec![
            format!("~/Library/Application Support/{}", self.bundle_id),
            format!("~/Library/Caches/{}", self.bundle_id),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_base_extends_homepage() {
        assert_eq!(
            AI_REVIEW.release_download_base().unwrap(),
            "https://github.com/mrmans0n/ai-review/releases/download"
        );
    }

    #[test]
    fn download_urls_differ_per_arch() {
        let arm = AI_REVIEW.download_url(Arch::Arm64).unwrap();
        let intel = AI_REVIEW.download_url(Arch::Intel).unwrap();

        assert_eq!(
            arm,
            "https://github.com/mrmans0n/ai-review/releases/download/v#{version}/AI.Review_#{version}_aarch64.dmg"
        );
        assert!(intel.ends_with("AI.Review_#{version}_x64.dmg"));
    }

    #[test]
    fn binary_source_points_into_bundle() {
        assert_eq!(
            AI_REVIEW.binary_source(),
            "#{appdir}/AI Review.app/Contents/MacOS/AI Review"
        );
    }

    #[test]
    fn zap_paths_use_bundle_id() {
        let paths = AI_REVIEW.zap_paths();
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.ends_with("com.nacholopez.ai-review")));
    }
}
