//! `[build]` section: where bundles are written.
//!
//! ```toml
//! [build]
//! output = "public"
//! ```

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory (relative to project root).
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
        }
    }
}
