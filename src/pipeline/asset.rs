/// Pipeline asset (factory) and named-asset registry.
///
/// The host's asset system owns `PipelineAsset`s; when one is selected
/// as active, the host calls `create_pipeline()` to obtain the per-frame
/// orchestrator. Assets carry configuration only — no per-frame state.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::pipeline_bail;
use super::forward::ForwardPipeline;

/// Configuration object producing one pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineAsset {
    name: String,
    pass_tag: String,
}

impl PipelineAsset {
    /// Create an asset.
    ///
    /// `pass_tag` is the shader pass tag submitted with every draw; the
    /// host matches it against material passes.
    pub fn new(name: impl Into<String>, pass_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass_tag: pass_tag.into(),
        }
    }

    /// Asset name (unique within a registry).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shader pass tag this pipeline submits draws under.
    pub fn pass_tag(&self) -> &str {
        &self.pass_tag
    }

    /// Produce a new pipeline instance.
    ///
    /// No error conditions; the only side effect is allocation of a new
    /// orchestrator. Invoked by the host whenever this asset becomes the
    /// active pipeline.
    pub fn create_pipeline(&self) -> ForwardPipeline {
        ForwardPipeline::new(self.pass_tag.clone())
    }
}

/// Named store of pipeline assets (managed by the host's asset system).
///
/// Multiple assets can coexist (e.g. different rendering
/// configurations); the host picks which one is active.
pub struct PipelineRegistry {
    assets: FxHashMap<String, PipelineAsset>,
}

impl PipelineRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            assets: FxHashMap::default(),
        }
    }

    /// Register an asset under its own name.
    ///
    /// # Errors
    ///
    /// Returns an error if an asset with the same name already exists.
    pub fn register(&mut self, asset: PipelineAsset) -> Result<()> {
        if self.assets.contains_key(asset.name()) {
            pipeline_bail!("nova::PipelineRegistry", InitializationFailed,
                "pipeline asset '{}' already registered", asset.name());
        }

        self.assets.insert(asset.name().to_string(), asset);
        Ok(())
    }

    /// Get an asset by name.
    pub fn asset(&self, name: &str) -> Option<&PipelineAsset> {
        self.assets.get(name)
    }

    /// Instantiate the pipeline for a named asset.
    ///
    /// # Errors
    ///
    /// Returns an error if no asset with that name is registered.
    pub fn instantiate(&self, name: &str) -> Result<ForwardPipeline> {
        match self.assets.get(name) {
            Some(asset) => Ok(asset.create_pipeline()),
            None => {
                pipeline_bail!("nova::PipelineRegistry", InitializationFailed,
                    "no pipeline asset named '{}'", name);
            }
        }
    }

    /// Remove an asset by name.
    ///
    /// Returns the removed asset, or None if not found. Instances
    /// already created from it are unaffected.
    pub fn remove(&mut self, name: &str) -> Option<PipelineAsset> {
        self.assets.remove(name)
    }

    /// Number of registered assets.
    pub fn count(&self) -> usize {
        self.assets.len()
    }

    /// Names of all registered assets.
    pub fn names(&self) -> Vec<&str> {
        self.assets.keys().map(|k| k.as_str()).collect()
    }

    /// Remove all assets.
    pub fn clear(&mut self) {
        self.assets.clear();
    }
}

impl Default for PipelineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "asset_tests.rs"]
mod tests;
