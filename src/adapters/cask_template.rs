use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::{AppError, Arch, CaskProfile, CaskVariant, ReleaseInputs};

static CASK_TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/casks");

static ENV: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();

/// Values substituted into a cask template.
#[derive(Debug, Clone, Serialize)]
pub struct CaskContext {
    pub token: String,
    pub name: String,
    pub desc: String,
    pub homepage: String,
    pub app: String,
    pub binary_source: String,
    pub binary_target: String,
    pub zap_paths: Vec<String>,
    pub version: String,
    pub sha_arm: String,
    pub sha_intel: Option<String>,
    pub url_arm: String,
    pub url_intel: String,
}

impl CaskContext {
    pub fn new(profile: &CaskProfile, inputs: &ReleaseInputs) -> Result<Self, AppError> {
        Ok(Self {
            token: profile.token.to_string(),
            name: profile.name.to_string(),
            desc: profile.desc.to_string(),
            homepage: profile.homepage.to_string(),
            app: profile.app.to_string(),
            binary_source: profile.binary_source(),
            binary_target: profile.binary_target.to_string(),
            zap_paths: profile.zap_paths(),
            version: inputs.version.clone(),
            sha_arm: inputs.checksums.arm().to_string(),
            sha_intel: inputs.checksums.intel().map(str::to_string),
            url_arm: profile.download_url(Arch::Arm64)?,
            url_intel: profile.download_url(Arch::Intel)?,
        })
    }
}

/// Renders casks from the templates embedded in the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaskTemplateRenderer;

impl CaskTemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the template matching the shape of `inputs.checksums`.
    pub fn render(
        &self,
        profile: &CaskProfile,
        inputs: &ReleaseInputs,
    ) -> Result<String, AppError> {
        let variant = inputs.checksums.variant();
        let context = CaskContext::new(profile, inputs)?;
        self.render_variant(variant, &context)
    }

    fn render_variant(
        &self,
        variant: CaskVariant,
        context: &CaskContext,
    ) -> Result<String, AppError> {
        let env = ENV
            .get_or_init(build_environment)
            .as_ref()
            .map_err(|e| AppError::Template(e.clone()))?;
        let name = variant.template_name();

        let template = env
            .get_template(name)
            .map_err(|e| AppError::Template(format!("Failed to load template '{}': {}", name, e)))?;

        template
            .render(context)
            .map_err(|e| AppError::Template(format!("Failed to render template '{}': {}", name, e)))
    }
}

fn build_environment() -> Result<Environment<'static>, String> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    for file in CASK_TEMPLATES.files() {
        let name = file
            .path()
            .to_str()
            .ok_or_else(|| format!("Template path {} is not valid UTF-8", file.path().display()))?;
        let source = file
            .contents_utf8()
            .ok_or_else(|| format!("Template '{}' is not valid UTF-8", name))?;
        env.add_template(name, source)
            .map_err(|e| format!("Failed to register template '{}': {}", name, e))?;
    }

    Ok(env)
}
