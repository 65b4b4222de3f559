//! `[components]` section: component source and bundle destinations.
//!
//! # Example
//!
//! ```toml
//! [components]
//! dir = "_components"
//! css_file = "/components.css"
//! js_file = "/components.js"
//! ```

use crate::asset::{BundleConfig, DEFAULT_CSS_FILE, DEFAULT_JS_FILE, Destination};
use crate::config::ConfigError;
use crate::log;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    /// Components directory (relative to project root).
    pub dir: PathBuf,
    /// Destination of the style bundle.
    pub css_file: String,
    /// Destination of the script bundle.
    pub js_file: String,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            dir: "_components".into(),
            css_file: DEFAULT_CSS_FILE.into(),
            js_file: DEFAULT_JS_FILE.into(),
        }
    }
}

impl ComponentsConfig {
    /// Bundle destinations for the bundle builder.
    pub fn bundle(&self) -> BundleConfig {
        BundleConfig {
            css_file: self.css_file.clone(),
            js_file: self.js_file.clone(),
        }
    }

    /// Validate bundle destinations.
    ///
    /// # Checks
    /// - `css_file` and `js_file` must not be empty
    /// - neither may contain a `..` segment (bundles stay inside the output dir)
    /// - a destination without extension is allowed, with a warning
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, file) in [("css_file", &self.css_file), ("js_file", &self.js_file)] {
            if file.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "components.{field} must not be empty"
                )));
            }
            if Path::new(file)
                .components()
                .any(|c| matches!(c, Component::ParentDir))
            {
                return Err(ConfigError::Validation(format!(
                    "components.{field} `{file}` must not contain `..`"
                )));
            }
            if Destination::from_file(file).ext.is_empty() {
                log!("warning"; "components.{} `{}` has no file extension", field, file);
            }
        }
        Ok(())
    }
}
