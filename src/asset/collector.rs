//! Pass-scoped collector for component styles and scripts.

use std::cell::RefCell;

use super::{AssetKind, AssetRegistry};
use crate::debug;

/// Two independent registries filled while a render pass runs.
///
/// Interior mutability lets every resolver of a pass share one collector by
/// reference. The collector is `!Sync`: each pass owns its own.
#[derive(Debug, Default)]
pub struct AssetCollector {
    styles: RefCell<AssetRegistry>,
    scripts: RefCell<AssetRegistry>,
}

impl AssetCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, kind: AssetKind, name: &str, text: &str) {
        debug!("asset"; "register {} for {}", kind, name);
        self.registry(kind).borrow_mut().register(name, text);
    }

    #[inline]
    pub fn register_style(&self, name: &str, css: &str) {
        self.register(AssetKind::Style, name, css);
    }

    #[inline]
    pub fn register_script(&self, name: &str, js: &str) {
        self.register(AssetKind::Script, name, js);
    }

    /// Copy of the style registry as it stands now. No borrow outlives the call.
    pub fn styles(&self) -> AssetRegistry {
        self.styles.borrow().clone()
    }

    /// Copy of the script registry as it stands now.
    pub fn scripts(&self) -> AssetRegistry {
        self.scripts.borrow().clone()
    }

    /// True when neither registry has entries.
    pub fn is_empty(&self) -> bool {
        self.styles.borrow().is_empty() && self.scripts.borrow().is_empty()
    }

    /// Release the registries, ending the collection phase.
    pub fn into_registries(self) -> (AssetRegistry, AssetRegistry) {
        (self.styles.into_inner(), self.scripts.into_inner())
    }

    fn registry(&self, kind: AssetKind) -> &RefCell<AssetRegistry> {
        match kind {
            AssetKind::Style => &self.styles,
            AssetKind::Script => &self.scripts,
        }
    }
}
