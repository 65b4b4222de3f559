//! Components and the namespace tree they live in.
//!
//! # Module Structure
//!
//! ```text
//! component/
//! ├── error.rs     # ComponentError
//! ├── resolver.rs  # Resolver, Resolved, BoundCall
//! └── mod.rs       # Component, Render, Namespace (this file)
//! ```
//!
//! A [`Namespace`] maps lowercase names to either a [`Component`] or a
//! nested [`Namespace`]. It is built once by a loader and only read while
//! rendering; all asset bookkeeping happens in the [`Resolver`].

mod error;
mod resolver;

pub use error::ComponentError;
pub use resolver::{BoundCall, Resolved, Resolver};

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Render-time data: global data merged with call properties.
pub type Data = serde_json::Map<String, serde_json::Value>;

/// Merge `props` over `global`. Properties win on key collision.
pub fn merge_data(global: &Data, props: &Data) -> Data {
    let mut merged = global.clone();
    for (key, value) in props {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

// ============================================================================
// Render
// ============================================================================

/// A render capability: merged data in, rendered text out.
pub trait Render: Send + Sync {
    fn render(&self, data: &Data) -> String;
}

impl<F> Render for F
where
    F: Fn(&Data) -> String + Send + Sync,
{
    fn render(&self, data: &Data) -> String {
        self(data)
    }
}

// ============================================================================
// Component
// ============================================================================

/// A render capability plus optional companion style and script text.
#[derive(Clone)]
pub struct Component {
    renderer: Arc<dyn Render>,
    css: Option<String>,
    js: Option<String>,
}

impl Component {
    pub fn new(render: impl Render + 'static) -> Self {
        Self {
            renderer: Arc::new(render),
            css: None,
            js: None,
        }
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    pub fn with_js(mut self, js: impl Into<String>) -> Self {
        self.js = Some(js.into());
        self
    }

    /// Style snippet, if present and non-empty.
    pub fn css(&self) -> Option<&str> {
        self.css.as_deref().filter(|css| !css.is_empty())
    }

    /// Script snippet, if present and non-empty.
    pub fn js(&self) -> Option<&str> {
        self.js.as_deref().filter(|js| !js.is_empty())
    }

    #[inline]
    pub fn render(&self, data: &Data) -> String {
        self.renderer.render(data)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("css", &self.css.is_some())
            .field("js", &self.js.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Namespace
// ============================================================================

/// A namespace entry: a leaf component or a nested namespace.
#[derive(Debug, Clone)]
pub enum Entry {
    Component(Component),
    Namespace(Namespace),
}

/// Nested, case-normalized mapping from names to entries.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    entries: FxHashMap<String, Entry>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component under the lowercased `name`, replacing any entry.
    pub fn insert_component(&mut self, name: &str, component: Component) {
        self.entries
            .insert(normalize(name), Entry::Component(component));
    }

    /// Insert a nested namespace under the lowercased `name`, replacing any entry.
    pub fn insert_namespace(&mut self, name: &str, namespace: Namespace) {
        self.entries
            .insert(normalize(name), Entry::Namespace(namespace));
    }

    /// Builder-style [`Self::insert_component`].
    pub fn with_component(mut self, name: &str, component: Component) -> Self {
        self.insert_component(name, component);
        self
    }

    /// Builder-style [`Self::insert_namespace`].
    pub fn with_namespace(mut self, name: &str, namespace: Namespace) -> Self {
        self.insert_namespace(name, namespace);
        self
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name (stable output for listings).
    pub fn sorted_entries(&self) -> Vec<(&str, &Entry)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Total number of components at any depth.
    pub fn component_count(&self) -> usize {
        self.entries
            .values()
            .map(|entry| match entry {
                Entry::Component(_) => 1,
                Entry::Namespace(ns) => ns.component_count(),
            })
            .sum()
    }
}

/// Registry and lookup key for a requested name.
#[inline]
pub(crate) fn normalize(name: &str) -> String {
    name.to_lowercase()
}
