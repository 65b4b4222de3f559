//! Path-based component lookup instrumented for asset collection.
//!
//! A [`Resolver`] wraps one namespace node for the duration of a render
//! pass. Resolving a name yields either a [`BoundCall`] (leaf) or another
//! [`Resolver`] over the child namespace (branch). Every resolver in a pass
//! shares the same [`AssetCollector`], so usage anywhere in the tree lands
//! in one place.
//!
//! # Example
//!
//! ```ignore
//! let resolver = Resolver::new(&tree, &global, &collector);
//! let html = match resolver.resolve_path("layout.header.nav")? {
//!     Resolved::Callable(call) => call.call(&props),
//!     Resolved::Namespace(_) => unreachable!(),
//! };
//! ```

use super::{Component, ComponentError, Data, Entry, Namespace, merge_data, normalize};
use crate::asset::AssetCollector;
use crate::debug;

/// Result of resolving a single name.
#[derive(Debug, Clone)]
pub enum Resolved<'a> {
    /// The name maps to a component.
    Callable(BoundCall<'a>),
    /// The name maps to a nested namespace.
    Namespace(Resolver<'a>),
}

impl<'a> Resolved<'a> {
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Callable(_))
    }

    pub fn into_callable(self) -> Option<BoundCall<'a>> {
        match self {
            Self::Callable(call) => Some(call),
            Self::Namespace(_) => None,
        }
    }

    pub fn into_namespace(self) -> Option<Resolver<'a>> {
        match self {
            Self::Namespace(resolver) => Some(resolver),
            Self::Callable(_) => None,
        }
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Lazy view over a namespace node, valid for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    node: &'a Namespace,
    global: &'a Data,
    collector: &'a AssetCollector,
}

impl<'a> Resolver<'a> {
    pub const fn new(node: &'a Namespace, global: &'a Data, collector: &'a AssetCollector) -> Self {
        Self {
            node,
            global,
            collector,
        }
    }

    /// Resolve `name` (case-insensitive) at this level.
    pub fn resolve(&self, name: &str) -> Result<Resolved<'a>, ComponentError> {
        match self.node.get(name) {
            Some(Entry::Component(component)) => Ok(Resolved::Callable(BoundCall {
                name: normalize(name),
                component,
                global: self.global,
                collector: self.collector,
            })),
            Some(Entry::Namespace(child)) => Ok(Resolved::Namespace(Self {
                node: child,
                ..*self
            })),
            None => Err(ComponentError::NotFound(name.to_string())),
        }
    }

    /// Resolve a dot-separated path such as `layout.header.nav`.
    ///
    /// Fails on the first segment that has no entry. A segment following a
    /// component has nothing to resolve against and is reported as not found.
    pub fn resolve_path(&self, path: &str) -> Result<Resolved<'a>, ComponentError> {
        let mut segments = path.split('.');
        // `split` always yields at least one segment
        let first = segments.next().unwrap_or_default();
        let mut current = self.resolve(first)?;

        for segment in segments {
            current = match current {
                Resolved::Namespace(resolver) => resolver.resolve(segment)?,
                Resolved::Callable(_) => {
                    return Err(ComponentError::NotFound(segment.to_string()));
                }
            };
        }

        Ok(current)
    }
}

// ============================================================================
// BoundCall
// ============================================================================

/// A resolved component, bound to the pass's global data and collector.
#[derive(Clone)]
pub struct BoundCall<'a> {
    name: String,
    component: &'a Component,
    global: &'a Data,
    collector: &'a AssetCollector,
}

impl BoundCall<'_> {
    /// Normalized (lowercase) component name; also its registry key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the component with `props` merged over the global data.
    ///
    /// Each call registers the component's non-empty style and script
    /// snippets under its normalized name.
    pub fn call(&self, props: &Data) -> String {
        if let Some(css) = self.component.css() {
            self.collector.register_style(&self.name, css);
        }
        if let Some(js) = self.component.js() {
            self.collector.register_script(&self.name, js);
        }

        debug!("component"; "render {}", self.name);
        self.component.render(&merge_data(self.global, props))
    }
}

impl std::fmt::Debug for BoundCall<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundCall")
            .field("name", &self.name)
            .field("component", self.component)
            .finish_non_exhaustive()
    }
}
