//! Component asset collection and bundling.
//!
//! | Module      | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `kind`      | Style / script discriminator                    |
//! | `registry`  | Ordered, name-deduplicated snippet registry     |
//! | `collector` | Pass-scoped pair of registries                  |
//! | `bundle`    | Registry -> output artifact conversion          |

mod bundle;
mod collector;
mod kind;
mod registry;

pub use bundle::{
    BundleArtifact, BundleConfig, DEFAULT_CSS_FILE, DEFAULT_JS_FILE, Destination, build_artifacts,
};
pub use collector::AssetCollector;
pub use kind::AssetKind;
pub use registry::AssetRegistry;
