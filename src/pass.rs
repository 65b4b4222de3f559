//! One render pass: global data, a fresh collector, and the resolvers
//! handed to template code.
//!
//! ```ignore
//! let pass = RenderPass::new(&tree, global);
//! let html = pass.render("layout.header", &props)?;
//! let artifacts = pass.finish(&config.components.bundle());
//! ```
//!
//! Passes never share a collector. Rendering pages in parallel means one
//! `RenderPass` per worker, with the caller merging the artifacts.

use anyhow::{Result, bail};

use crate::asset::{AssetCollector, BundleArtifact, BundleConfig, build_artifacts};
use crate::component::{Data, Namespace, Resolved, Resolver};

pub struct RenderPass<'t> {
    tree: &'t Namespace,
    global: Data,
    collector: AssetCollector,
}

impl<'t> RenderPass<'t> {
    pub fn new(tree: &'t Namespace, global: Data) -> Self {
        Self {
            tree,
            global,
            collector: AssetCollector::new(),
        }
    }

    /// Root resolver sharing this pass's collector.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.tree, &self.global, &self.collector)
    }

    /// Resolve a dotted component path and render it with `props`.
    pub fn render(&self, path: &str, props: &Data) -> Result<String> {
        match self.resolver().resolve_path(path)? {
            Resolved::Callable(call) => Ok(call.call(props)),
            Resolved::Namespace(_) => bail!("`{path}` is a namespace, not a component"),
        }
    }

    pub fn collector(&self) -> &AssetCollector {
        &self.collector
    }

    /// End the pass and turn the collected assets into bundle artifacts.
    pub fn finish(self, config: &BundleConfig) -> Vec<BundleArtifact> {
        build_artifacts(self.collector, config)
    }
}
