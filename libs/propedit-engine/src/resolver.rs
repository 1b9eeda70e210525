use std::sync::Arc;

use propedit_api::editor::ARRAY_MARKER;
use propedit_api::{PropertyEditor, TypeDescriptor};

use crate::array::GenericArrayEditor;
use crate::error::EngineError;
use crate::primitives;
use crate::registry::EditorRegistry;
use crate::types::TypeLoader;

/// Public entry point: finds the editor for a type.
///
/// A missing editor is `None`, never an error. Errors are reserved for bad
/// input: no type at all, or a name the type loader cannot resolve.
#[derive(Clone)]
pub struct EditorResolver {
    registry: Arc<EditorRegistry>,
    types: Arc<dyn TypeLoader>,
}

impl std::fmt::Debug for EditorResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorResolver")
            .field("registry", &self.registry)
            .finish()
    }
}

impl EditorResolver {
    pub fn new(registry: Arc<EditorRegistry>, types: Arc<dyn TypeLoader>) -> Self {
        Self { registry, types }
    }

    pub fn registry(&self) -> &Arc<EditorRegistry> {
        &self.registry
    }

    /// Editor for `target`. `None` target is `EngineError::InvalidArgument`.
    pub fn resolve_by_type(
        &self,
        target: Option<&TypeDescriptor>,
    ) -> Result<Option<Arc<dyn PropertyEditor>>, EngineError> {
        let target = target.ok_or_else(|| {
            EngineError::InvalidArgument("target type must not be null".into())
        })?;
        Ok(self.find_editor(target))
    }

    /// Editor for the type named `qualified_name`.
    ///
    /// Primitive names are checked first, then the type loader. Its
    /// `TypeNotFound` is returned as-is.
    pub fn resolve_by_name(
        &self,
        qualified_name: &str,
    ) -> Result<Option<Arc<dyn PropertyEditor>>, EngineError> {
        let target = match primitives::primitive_for_name(qualified_name) {
            Some(primitive) => primitive.clone(),
            None => self.types.load(qualified_name)?,
        };
        self.resolve_by_type(Some(&target))
    }

    /// Editor for `target`, with primitives normalized to their wrappers.
    ///
    /// Arrays: dedicated `<Element>Array` editor if registered, else a fresh
    /// `GenericArrayEditor` when the element type has an editor.
    pub fn find_editor(&self, target: &TypeDescriptor) -> Option<Arc<dyn PropertyEditor>> {
        if let Some(element) = target.element_type() {
            let element = normalize(element)?;
            let element_key = element.simple_name();

            if let Some(editor) = self.registry.lookup(&format!("{element_key}{ARRAY_MARKER}")) {
                return Some(editor);
            }
            let element_editor = self.registry.lookup(element_key)?;
            tracing::trace!(array = %target, "synthesizing generic array editor");
            return Some(Arc::new(GenericArrayEditor::new(
                target.clone(),
                element_editor,
            )));
        }

        let target = normalize(target)?;
        self.registry.lookup(target.simple_name())
    }
}

/// Primitive → wrapper; other types unchanged. `None` for primitives without a wrapper.
fn normalize(ty: &TypeDescriptor) -> Option<&TypeDescriptor> {
    if ty.is_primitive() {
        primitives::wrapper_for(ty)
    } else {
        Some(ty)
    }
}
