use crate::adapters::CaskTemplateRenderer;
use crate::ports::{CaskStore, EnvSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<E: EnvSource, S: CaskStore> {
    env: E,
    store: S,
    renderer: CaskTemplateRenderer,
}

impl<E: EnvSource, S: CaskStore> AppContext<E, S> {
    /// Create a new application context.
    pub fn new(env: E, store: S) -> Self {
        Self { env, store, renderer: CaskTemplateRenderer::new() }
    }

    /// Get a reference to the environment source.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Get a reference to the cask store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the cask template renderer.
    pub fn renderer(&self) -> &CaskTemplateRenderer {
        &self.renderer
    }
}
