use std::sync::Arc;

use propedit_api::PropertyEditor;

use crate::error::EngineError;

/// Source of editor providers for the registry.
///
/// The returned order is the registration order: when two providers map to the
/// same key, the one earlier in the list wins. Every implementation documents
/// its order.
pub trait ProviderSource: Send + Sync {
    fn providers(&self) -> Result<Vec<Arc<dyn PropertyEditor>>, EngineError>;
}

/// Fixed in-memory list, registered in the given order.
#[derive(Default)]
pub struct StaticProviders {
    editors: Vec<Arc<dyn PropertyEditor>>,
}

impl StaticProviders {
    pub fn with(mut self, editor: impl PropertyEditor + 'static) -> Self {
        self.editors.push(Arc::new(editor));
        self
    }
}

impl ProviderSource for StaticProviders {
    fn providers(&self) -> Result<Vec<Arc<dyn PropertyEditor>>, EngineError> {
        Ok(self.editors.clone())
    }
}

/// Builtin editors, in the order `propedit_editors_builtin::editors()` lists them.
pub struct BuiltinProviders;

impl ProviderSource for BuiltinProviders {
    fn providers(&self) -> Result<Vec<Arc<dyn PropertyEditor>>, EngineError> {
        Ok(propedit_editors_builtin::editors()
            .into_iter()
            .map(Arc::from)
            .collect())
    }
}

/// Concatenation of sources: all providers of the first source, then the second, …
#[derive(Default)]
pub struct ProviderChain {
    sources: Vec<Box<dyn ProviderSource>>,
}

impl ProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: impl ProviderSource + 'static) {
        self.sources.push(Box::new(source));
    }
}

impl ProviderSource for ProviderChain {
    fn providers(&self) -> Result<Vec<Arc<dyn PropertyEditor>>, EngineError> {
        let mut all = Vec::new();
        for source in &self.sources {
            all.extend(source.providers()?);
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl ProviderSource for Failing {
        fn providers(&self) -> Result<Vec<Arc<dyn PropertyEditor>>, EngineError> {
            Err(EngineError::Config("manifest unreadable".into()))
        }
    }

    fn names(editors: &[Arc<dyn PropertyEditor>]) -> Vec<String> {
        editors.iter().map(|e| e.provider_name().to_string()).collect()
    }

    #[test]
    fn chain_preserves_source_order() {
        let mut chain = ProviderChain::new();
        chain.push(StaticProviders::default().with(propedit_editors_builtin::StringEditor));
        chain.push(BuiltinProviders);

        let providers = chain.providers().unwrap();
        let names = names(&providers);
        assert_eq!(names[0], "propedit.editors.StringEditor");
        assert_eq!(names[1], "propedit.editors.BooleanEditor");
        assert_eq!(names.len(), 1 + propedit_editors_builtin::editors().len());
    }

    #[test]
    fn chain_fails_when_any_source_fails() {
        let mut chain = ProviderChain::new();
        chain.push(BuiltinProviders);
        chain.push(Failing);
        assert!(matches!(chain.providers(), Err(EngineError::Config(_))));
    }
}
