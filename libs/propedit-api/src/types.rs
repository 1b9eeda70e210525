/// Separator between namespace segments of a qualified type name.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Suffix appended to the element name to form an array type's qualified name.
pub const ARRAY_SUFFIX: &str = "[]";

/// Type handle the engine resolves editors for.
///
/// The facets the resolver needs (array, primitive, element type) are stored
/// explicitly; nothing is recomputed from the name.
///
/// Examples:
/// - `TypeDescriptor::primitive("float")`
/// - `TypeDescriptor::class("lang.Float")`
/// - `TypeDescriptor::array_of(TypeDescriptor::primitive("float"))` → `float[]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: String,
    kind: TypeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum TypeKind {
    Primitive,
    Class,
    Array(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: TypeKind::Primitive }
    }

    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self { name: qualified_name.into(), kind: TypeKind::Class }
    }

    pub fn array_of(element: TypeDescriptor) -> Self {
        Self {
            name: format!("{}{ARRAY_SUFFIX}", element.name),
            kind: TypeKind::Array(Box::new(element)),
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.name
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array(_))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive)
    }

    /// Element type of an array, `None` for scalars.
    pub fn element_type(&self) -> Option<&TypeDescriptor> {
        match &self.kind {
            TypeKind::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Name after the last namespace separator (`lang.Float` → `Float`).
    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Strip the namespace from a qualified name.
pub fn simple_name(qualified_name: &str) -> &str {
    match qualified_name.rfind(NAMESPACE_SEPARATOR) {
        Some(idx) => &qualified_name[idx + NAMESPACE_SEPARATOR.len_utf8()..],
        None => qualified_name,
    }
}
