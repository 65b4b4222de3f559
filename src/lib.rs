//! Component resolution and asset bundling for static site templates.
//!
//! Templates call reusable components through a [`Resolver`] over a
//! namespace tree (`layout.header.nav`). Every call records the component's
//! style and script snippets in the pass's [`AssetCollector`]; when the pass
//! ends, the collected snippets become at most two bundle artifacts.
//!
//! ```ignore
//! let tree = loader::load_components(Path::new("_components"))?;
//! let pass = RenderPass::new(&tree, global_data);
//! let html = pass.render("button", &props)?;
//! let artifacts = pass.finish(&BundleConfig::default());
//! writer::write_artifacts(&artifacts, Path::new("public"))?;
//! ```

pub mod asset;
pub mod cli;
pub mod component;
pub mod config;
pub mod loader;
pub mod logger;
pub mod pass;
pub mod writer;

pub use asset::{AssetCollector, AssetRegistry, BundleArtifact, BundleConfig, build_artifacts};
pub use component::{BoundCall, Component, ComponentError, Data, Namespace, Resolved, Resolver};
pub use pass::RenderPass;
