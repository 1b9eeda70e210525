use std::collections::HashMap;

use propedit_api::types::ARRAY_SUFFIX;
use propedit_api::TypeDescriptor;

use crate::error::EngineError;
use crate::primitives;

/// Resolves a qualified type name to a descriptor.
pub trait TypeLoader: Send + Sync {
    /// Fails with `EngineError::TypeNotFound` for unknown names.
    fn load(&self, qualified_name: &str) -> Result<TypeDescriptor, EngineError>;
}

/// Set of known class types.
///
/// Always knows the primitive wrappers, `lang.String` and `lang.Object`.
/// A name ending in `[]` loads as an array of its element, which may be a
/// primitive name (`int[]`) or another array (`lang.Float[][]`).
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    classes: HashMap<String, TypeDescriptor>,
}

impl Default for TypeCatalog {
    fn default() -> Self {
        let mut catalog = Self {
            classes: HashMap::new(),
        };
        for wrapper in primitives::wrapper_types() {
            catalog.register(wrapper);
        }
        catalog.register(TypeDescriptor::class("lang.String"));
        catalog.register(TypeDescriptor::class("lang.Object"));
        catalog
    }
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class type. Array and primitive descriptors are derived, not registered.
    pub fn register(&mut self, ty: TypeDescriptor) {
        self.classes.insert(ty.qualified_name().to_string(), ty);
    }

    pub fn with_class(mut self, qualified_name: &str) -> Self {
        self.register(TypeDescriptor::class(qualified_name));
        self
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TypeLoader for TypeCatalog {
    fn load(&self, qualified_name: &str) -> Result<TypeDescriptor, EngineError> {
        if let Some(element) = qualified_name.strip_suffix(ARRAY_SUFFIX) {
            let element = match primitives::primitive_for_name(element) {
                Some(p) => p.clone(),
                None => self.load(element)?,
            };
            return Ok(TypeDescriptor::array_of(element));
        }
        self.classes
            .get(qualified_name)
            .cloned()
            .ok_or_else(|| EngineError::TypeNotFound(qualified_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knows_wrappers_and_string() {
        let catalog = TypeCatalog::new();
        assert_eq!(
            catalog.load("lang.Float").unwrap(),
            TypeDescriptor::class("lang.Float")
        );
        assert!(catalog.load("lang.String").is_ok());
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn array_names_resolve_elements() {
        let catalog = TypeCatalog::new();
        let ints = catalog.load("int[]").unwrap();
        assert_eq!(ints.element_type(), Some(&TypeDescriptor::primitive("int")));

        let nested = catalog.load("lang.Float[][]").unwrap();
        let inner = nested.element_type().unwrap();
        assert!(inner.is_array());
        assert_eq!(inner.qualified_name(), "lang.Float[]");
    }

    #[test]
    fn unknown_names_are_not_found() {
        let catalog = TypeCatalog::new();
        assert!(matches!(
            catalog.load("not.a.real.Type"),
            Err(EngineError::TypeNotFound(name)) if name == "not.a.real.Type"
        ));
        assert!(matches!(
            catalog.load("not.a.real.Type[]"),
            Err(EngineError::TypeNotFound(_))
        ));
        // primitives are not classes
        assert!(catalog.load("int").is_err());
    }

    #[test]
    fn registered_classes_load() {
        let catalog = TypeCatalog::new().with_class("app.Money");
        assert_eq!(catalog.load("app.Money").unwrap().simple_name(), "Money");
    }
}
