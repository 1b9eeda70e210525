use std::sync::Arc;

use propedit_api::error::EditorError;
use propedit_api::null::{is_null, NULL_LITERAL};
use propedit_api::{PropertyEditor, TypeDescriptor, Value};

/// Separator between elements in the text form of an array.
pub const ELEMENT_SEPARATOR: &str = ",";

/// Array editor synthesized from a scalar element editor.
///
/// Built on demand for arrays without a dedicated editor and owned by the
/// caller; the registry never stores it.
///
/// Text form: elements joined by `,`. Parsing trims each element and skips
/// empty ones.
///
/// An empty array formats as `""`, which parses back as `Value::Null`: the
/// text form cannot tell "no elements" from "no value".
pub struct GenericArrayEditor {
    array_type: TypeDescriptor,
    element: Arc<dyn PropertyEditor>,
    provider_name: String,
}

impl GenericArrayEditor {
    pub fn new(array_type: TypeDescriptor, element: Arc<dyn PropertyEditor>) -> Self {
        let element_name = array_type
            .element_type()
            .map(|t| t.simple_name().to_string())
            .unwrap_or_default();
        Self {
            provider_name: format!("generic.{element_name}ArrayEditor"),
            array_type,
            element,
        }
    }
}

impl PropertyEditor for GenericArrayEditor {
    fn provider_name(&self) -> &str {
        &self.provider_name
    }

    fn parse(&self, text: &str) -> Result<Value, EditorError> {
        if is_null(Some(text)) {
            return Ok(Value::Null);
        }
        let mut items = Vec::new();
        for (idx, token) in text
            .split(ELEMENT_SEPARATOR)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .enumerate()
        {
            let item = self
                .element
                .parse(token)
                .map_err(|e| e.with_context(format!("{} element {idx}", self.array_type)))?;
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn format(&self, value: &Value) -> Result<Option<String>, EditorError> {
        let items = match value {
            Value::Null => return Ok(None),
            Value::Array(items) => items,
            other => {
                return Err(EditorError::type_mismatch(format!(
                    "{} cannot format a {} value",
                    self.array_type,
                    other.kind_name()
                )));
            }
        };

        let mut parts = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            let text = self
                .element
                .format(item)
                .map_err(|e| e.with_context(format!("{} element {idx}", self.array_type)))?;
            parts.push(text.unwrap_or_else(|| NULL_LITERAL.to_string()));
        }
        Ok(Some(parts.join(ELEMENT_SEPARATOR)))
    }
}
