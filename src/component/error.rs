//! Component resolution errors.

use thiserror::Error;

/// Errors raised while resolving a component path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// No entry for the requested name. Carries the name as it was requested,
    /// not its normalized form.
    #[error("component not found: {0}")]
    NotFound(String),
}

impl ComponentError {
    /// The requested name that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound(name) => name,
        }
    }
}
