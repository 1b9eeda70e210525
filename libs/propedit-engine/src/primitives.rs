//! Primitive type tables.
//!
//! Primitive descriptors are never used as registry keys: the resolver maps
//! them to their wrapper type first.

use std::collections::HashMap;
use std::sync::LazyLock;

use propedit_api::TypeDescriptor;

/// `(primitive name, wrapper qualified name)`. `void` has no wrapper.
const PRIMITIVES: [(&str, &str); 8] = [
    ("boolean", "lang.Boolean"),
    ("byte", "lang.Byte"),
    ("char", "lang.Character"),
    ("short", "lang.Short"),
    ("int", "lang.Integer"),
    ("long", "lang.Long"),
    ("float", "lang.Float"),
    ("double", "lang.Double"),
];

static NAME_TO_PRIMITIVE: LazyLock<HashMap<&'static str, TypeDescriptor>> = LazyLock::new(|| {
    PRIMITIVES
        .iter()
        .map(|(name, _)| (*name, TypeDescriptor::primitive(*name)))
        .collect()
});

static PRIMITIVE_TO_WRAPPER: LazyLock<HashMap<TypeDescriptor, TypeDescriptor>> =
    LazyLock::new(|| {
        PRIMITIVES
            .iter()
            .map(|(name, wrapper)| {
                (TypeDescriptor::primitive(*name), TypeDescriptor::class(*wrapper))
            })
            .collect()
    });

/// Names of the eight primitive types.
pub fn primitive_names() -> impl Iterator<Item = &'static str> {
    PRIMITIVES.iter().map(|(name, _)| *name)
}

/// Wrapper types of the eight primitives, in the same order as `primitive_names()`.
pub fn wrapper_types() -> impl Iterator<Item = TypeDescriptor> {
    PRIMITIVES.iter().map(|(_, wrapper)| TypeDescriptor::class(*wrapper))
}

/// Primitive descriptor for `name`, `None` for anything else.
pub fn primitive_for_name(name: &str) -> Option<&'static TypeDescriptor> {
    NAME_TO_PRIMITIVE.get(name)
}

/// Wrapper descriptor for a primitive, `None` for non-primitives and `void`.
pub fn wrapper_for(primitive: &TypeDescriptor) -> Option<&'static TypeDescriptor> {
    PRIMITIVE_TO_WRAPPER.get(primitive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_names_resolve_to_primitives() {
        for name in primitive_names() {
            let ty = primitive_for_name(name).expect(name);
            assert!(ty.is_primitive());
            assert_eq!(ty.qualified_name(), name);
        }
    }

    #[test]
    fn wrappers_are_distinct_classes() {
        let expected = [
            ("boolean", "lang.Boolean"),
            ("byte", "lang.Byte"),
            ("char", "lang.Character"),
            ("short", "lang.Short"),
            ("int", "lang.Integer"),
            ("long", "lang.Long"),
            ("float", "lang.Float"),
            ("double", "lang.Double"),
        ];
        let mut seen = std::collections::HashSet::new();
        for (name, wrapper) in expected {
            let primitive = primitive_for_name(name).expect(name);
            let w = wrapper_for(primitive).expect(name);
            assert_eq!(w.qualified_name(), wrapper);
            assert!(!w.is_primitive());
            assert!(seen.insert(w.clone()), "duplicate wrapper {wrapper}");
        }
    }

    #[test]
    fn void_and_unknown_have_no_entry() {
        assert!(primitive_for_name("void").is_none());
        assert!(primitive_for_name("Integer").is_none());
        assert!(wrapper_for(&TypeDescriptor::primitive("void")).is_none());
        assert!(wrapper_for(&TypeDescriptor::class("lang.Integer")).is_none());
    }
}
