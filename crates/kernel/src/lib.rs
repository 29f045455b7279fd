//! Module host for shelf: the `Module` trait, the registry that drives module
//! lifecycle, and layered settings.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
pub use settings::Settings;
