pub mod books;
pub mod greeting;

use std::sync::Arc;

use anyhow::bail;
use shelf_kernel::{settings::ModuleSettings, Module, ModuleRegistry};

/// Every module this application knows how to serve, in registration order
pub const KNOWN_MODULES: &[&str] = &["greeting", "books"];

fn create(name: &str) -> Option<Arc<dyn Module>> {
    match name {
        "greeting" => Some(greeting::create_module()),
        "books" => Some(books::create_module()),
        _ => None,
    }
}

/// Register the project modules enabled in `modules` with the registry
pub fn register_all(registry: &mut ModuleRegistry, modules: &ModuleSettings) -> anyhow::Result<()> {
    if let Some(unknown) = modules
        .enabled
        .iter()
        .find(|name| !KNOWN_MODULES.contains(&name.as_str()))
    {
        bail!(
            "unknown module '{}'; expected one of {:?}",
            unknown,
            KNOWN_MODULES
        );
    }

    for &name in KNOWN_MODULES {
        if !modules.is_enabled(name) {
            tracing::info!(module = name, "module disabled by configuration");
            continue;
        }
        if let Some(module) = create(name) {
            registry.register(module)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_module_by_default() {
        let mut registry = ModuleRegistry::new();
        register_all(&mut registry, &ModuleSettings::default()).unwrap();
        assert_eq!(registry.module_names(), vec!["greeting", "books"]);
    }

    #[test]
    fn registers_only_enabled_modules() {
        let mut registry = ModuleRegistry::new();
        let modules = ModuleSettings {
            enabled: vec!["books".to_string()],
        };
        register_all(&mut registry, &modules).unwrap();
        assert_eq!(registry.module_names(), vec!["books"]);
    }

    #[test]
    fn unknown_module_is_rejected() {
        let mut registry = ModuleRegistry::new();
        let modules = ModuleSettings {
            enabled: vec!["users".to_string()],
        };
        let err = register_all(&mut registry, &modules).unwrap_err();
        assert!(err.to_string().contains("unknown module 'users'"));
        assert!(registry.is_empty());
    }
}
