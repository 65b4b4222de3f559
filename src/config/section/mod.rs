//! Configuration sections of `components.toml`.

mod build;
mod components;

pub use build::BuildConfig;
pub use components::ComponentsConfig;
