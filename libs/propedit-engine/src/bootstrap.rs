use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use crate::config::EngineConfig;
use crate::discovery::{BuiltinProviders, ProviderChain, ProviderSource};
use crate::error::EngineError;
use crate::plugin_host::PluginProviders;
use crate::registry::EditorRegistry;
use crate::resolver::EditorResolver;
use crate::types::TypeCatalog;

/// Build a resolver from configuration.
///
/// Registration order: builtin editors (if enabled), then each plugin library
/// in configuration order.
pub fn bootstrap(config: &EngineConfig) -> Result<EditorResolver, EngineError> {
    config.validate()?;

    let mut chain = ProviderChain::new();
    if config.builtin_editors {
        chain.push(BuiltinProviders);
    }
    if !config.plugins.is_empty() {
        chain.push(PluginProviders::new(
            config.plugins.iter().map(|p| PathBuf::from(&p.path)).collect(),
        ));
    }

    let mut types = TypeCatalog::new();
    for name in &config.types {
        types = types.with_class(name);
    }

    build_resolver(&chain, types)
}

/// Run discovery on `source` once and wire the registry into a resolver.
pub fn build_resolver(
    source: &dyn ProviderSource,
    types: TypeCatalog,
) -> Result<EditorResolver, EngineError> {
    let registry = EditorRegistry::discover(source)?;
    if !registry.rejections().is_empty() {
        tracing::warn!(
            rejected = registry.rejections().len(),
            "some editor providers were ignored during discovery"
        );
    }
    tracing::info!(
        editors = registry.len(),
        types = types.len(),
        "editor registry ready"
    );
    Ok(EditorResolver::new(Arc::new(registry), Arc::new(types)))
}

// ---------------------------------------------------------------------------
// Process-wide resolver
// ---------------------------------------------------------------------------

static SHARED: OnceLock<EditorResolver> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Initialise the process-wide resolver from `config`, or return the existing one.
///
/// Discovery runs at most once, even with concurrent first callers. Once
/// initialised, later calls ignore `config`. A failed bootstrap leaves the
/// shared resolver unset so a later call can retry.
pub fn init_shared(config: &EngineConfig) -> Result<&'static EditorResolver, EngineError> {
    if let Some(resolver) = SHARED.get() {
        return Ok(resolver);
    }

    let _guard = match INIT_LOCK.lock() {
        Ok(g) => g,
        Err(poisoned) => {
            tracing::warn!("editor resolver init lock was poisoned, recovering");
            poisoned.into_inner()
        }
    };
    if let Some(resolver) = SHARED.get() {
        return Ok(resolver);
    }

    let resolver = bootstrap(config)?;
    Ok(SHARED.get_or_init(|| resolver))
}

/// The process-wide resolver, if `init_shared` has succeeded.
pub fn shared() -> Option<&'static EditorResolver> {
    SHARED.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PluginConfig;

    #[test]
    fn default_config_registers_builtins() {
        let resolver = bootstrap(&EngineConfig::default()).unwrap();
        let registry = resolver.registry();
        assert_eq!(registry.len(), propedit_editors_builtin::editors().len());
        assert!(registry.contains("Float"));
        assert!(registry.contains("ByteArray"));
        assert!(registry.rejections().is_empty());
    }

    #[test]
    fn builtins_can_be_disabled() {
        let config = EngineConfig {
            builtin_editors: false,
            ..EngineConfig::default()
        };
        let resolver = bootstrap(&config).unwrap();
        assert!(resolver.registry().is_empty());
    }

    #[test]
    fn configured_types_are_loadable() {
        let config = EngineConfig {
            types: vec!["app.Money".into()],
            ..EngineConfig::default()
        };
        let resolver = bootstrap(&config).unwrap();
        assert!(resolver.resolve_by_name("app.Money").unwrap().is_none());
        assert!(matches!(
            resolver.resolve_by_name("app.Currency"),
            Err(EngineError::TypeNotFound(_))
        ));
    }

    #[test]
    fn unloadable_plugin_fails_bootstrap() {
        let config = EngineConfig {
            plugins: vec![PluginConfig {
                name: "ghost".into(),
                path: "/nonexistent/libghost.so".into(),
            }],
            ..EngineConfig::default()
        };
        assert!(matches!(bootstrap(&config), Err(EngineError::Config(_))));
    }
}
