//! Bundle artifacts built from a finished collector.
//!
//! Each non-empty registry becomes one virtual page: the registry's values
//! joined with `\n`, destined for the configured css or js file. Styles are
//! always emitted before scripts.

use super::{AssetCollector, AssetKind, AssetRegistry};
use crate::debug;

/// Default destination of the style bundle.
pub const DEFAULT_CSS_FILE: &str = "/components.css";
/// Default destination of the script bundle.
pub const DEFAULT_JS_FILE: &str = "/components.js";

/// Destination paths for the two possible bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    pub css_file: String,
    pub js_file: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            css_file: DEFAULT_CSS_FILE.into(),
            js_file: DEFAULT_JS_FILE.into(),
        }
    }
}

impl BundleConfig {
    fn file_for(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Style => &self.css_file,
            AssetKind::Script => &self.js_file,
        }
    }
}

// ============================================================================
// Destination
// ============================================================================

/// Output location split into path-without-extension and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Path without extension (e.g. `/components`).
    pub path: String,
    /// Extension including the dot (e.g. `.css`), or empty.
    pub ext: String,
}

impl Destination {
    /// Split `file` at the final `.` of its last path segment.
    ///
    /// `/assets/bundle.min.css` -> (`/assets/bundle.min`, `.css`)
    /// `/dir.v/bundle`          -> (`/dir.v/bundle`, ``)
    pub fn from_file(file: &str) -> Self {
        let name_start = file.rfind('/').map_or(0, |pos| pos + 1);
        match file[name_start..].rfind('.') {
            Some(dot) => {
                let split = name_start + dot;
                Self {
                    path: file[..split].to_string(),
                    ext: file[split..].to_string(),
                }
            }
            None => Self {
                path: file.to_string(),
                ext: String::new(),
            },
        }
    }

    /// Reassembled file path (`path` + `ext`).
    pub fn file_name(&self) -> String {
        format!("{}{}", self.path, self.ext)
    }
}

// ============================================================================
// BundleArtifact
// ============================================================================

/// One output unit: destination plus concatenated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleArtifact {
    pub kind: AssetKind,
    pub dest: Destination,
    pub content: String,
}

impl BundleArtifact {
    fn from_registry(kind: AssetKind, registry: &AssetRegistry, file: &str) -> Self {
        Self {
            kind,
            dest: Destination::from_file(file),
            content: registry.join(),
        }
    }
}

/// Consume a pass's collector into zero, one or two artifacts.
///
/// Empty registries produce nothing; the style bundle precedes the script
/// bundle.
pub fn build_artifacts(collector: AssetCollector, config: &BundleConfig) -> Vec<BundleArtifact> {
    let (styles, scripts) = collector.into_registries();

    let mut artifacts = Vec::with_capacity(2);
    for (kind, registry) in AssetKind::ALL.into_iter().zip([styles, scripts]) {
        if registry.is_empty() {
            continue;
        }
        debug!("bundle"; "{} {} snippet(s) -> {}", registry.len(), kind, config.file_for(kind));
        artifacts.push(BundleArtifact::from_registry(kind, &registry, config.file_for(kind)));
    }
    artifacts
}
