//! Builtin editors for the wrapper types, strings and byte arrays.
//!
//! Linked directly by the engine's builtin provider source, and also
//! loadable as a dynamic editor library (`pe_create_editors`).

use propedit_api::error::EditorError;
use propedit_api::null::{is_null, is_null_with};
use propedit_api::{PropertyEditor, Value};

macro_rules! namespace {
    () => {
        "propedit.editors"
    };
}

/// `<NAMESPACE>.<Editor>`, as a `&'static str`.
macro_rules! provider_name {
    ($editor:ident) => {
        concat!(namespace!(), ".", stringify!($editor))
    };
}

/// Namespace every builtin provider name lives in.
pub const NAMESPACE: &str = namespace!();

/// All builtin editors, in registration order.
///
/// Scalars first (wrapper types in declaration order, then `String`), then
/// the dedicated array editors.
pub fn editors() -> Vec<Box<dyn PropertyEditor>> {
    vec![
        Box::new(BooleanEditor),
        Box::new(ByteEditor),
        Box::new(CharacterEditor),
        Box::new(ShortEditor),
        Box::new(IntegerEditor),
        Box::new(LongEditor),
        Box::new(FloatEditor),
        Box::new(DoubleEditor),
        Box::new(StringEditor),
        Box::new(ByteArrayEditor),
    ]
}

fn mismatch(provider: &str, value: &Value) -> EditorError {
    EditorError::type_mismatch(format!(
        "{provider} cannot format a {} value",
        value.kind_name()
    ))
}

fn render_display<T: std::fmt::Display>(v: &T) -> String {
    v.to_string()
}

/// Debug keeps the fractional part of integral floats (`1.0`, not `1`).
fn render_float<T: std::fmt::Debug>(v: &T) -> String {
    format!("{v:?}")
}

macro_rules! numeric_editor {
    ($editor:ident, $ty:ty, $variant:ident, $render:ident) => {
        pub struct $editor;

        impl PropertyEditor for $editor {
            fn provider_name(&self) -> &str {
                provider_name!($editor)
            }

            fn parse(&self, text: &str) -> Result<Value, EditorError> {
                if is_null(Some(text)) {
                    return Ok(Value::Null);
                }
                let v = text.trim().parse::<$ty>().map_err(|e| {
                    EditorError::from(e)
                        .with_context(format!("'{text}' as {}", stringify!($ty)))
                })?;
                Ok(Value::$variant(v))
            }

            fn format(&self, value: &Value) -> Result<Option<String>, EditorError> {
                match value {
                    Value::Null => Ok(None),
                    Value::$variant(v) => Ok(Some($render(v))),
                    other => Err(mismatch(self.provider_name(), other)),
                }
            }
        }
    };
}

numeric_editor!(ByteEditor, i8, Byte, render_display);
numeric_editor!(ShortEditor, i16, Short, render_display);
numeric_editor!(IntegerEditor, i32, Int, render_display);
numeric_editor!(LongEditor, i64, Long, render_display);
numeric_editor!(FloatEditor, f32, Float, render_float);
numeric_editor!(DoubleEditor, f64, Double, render_float);

pub struct BooleanEditor;

impl PropertyEditor for BooleanEditor {
    fn provider_name(&self) -> &str {
        provider_name!(BooleanEditor)
    }

    fn parse(&self, text: &str) -> Result<Value, EditorError> {
        if is_null(Some(text)) {
            return Ok(Value::Null);
        }
        let text = text.trim();
        if text.eq_ignore_ascii_case("true") {
            Ok(Value::Boolean(true))
        } else if text.eq_ignore_ascii_case("false") {
            Ok(Value::Boolean(false))
        } else {
            Err(EditorError::parse(format!("'{text}' is not a boolean")))
        }
    }

    fn format(&self, value: &Value) -> Result<Option<String>, EditorError> {
        match value {
            Value::Null => Ok(None),
            Value::Boolean(b) => Ok(Some(b.to_string())),
            other => Err(mismatch(self.provider_name(), other)),
        }
    }
}

/// Whitespace is a legal character, so the text is never trimmed.
pub struct CharacterEditor;

impl PropertyEditor for CharacterEditor {
    fn provider_name(&self) -> &str {
        provider_name!(CharacterEditor)
    }

    fn parse(&self, text: &str) -> Result<Value, EditorError> {
        if is_null_with(Some(text), false, true) {
            return Ok(Value::Null);
        }
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Value::Char(c)),
            _ => Err(EditorError::parse(format!(
                "'{text}' is not a single character"
            ))),
        }
    }

    fn format(&self, value: &Value) -> Result<Option<String>, EditorError> {
        match value {
            Value::Null => Ok(None),
            Value::Char(c) => Ok(Some(c.to_string())),
            other => Err(mismatch(self.provider_name(), other)),
        }
    }
}

/// Text is kept verbatim; only the `null` literal itself means no value.
pub struct StringEditor;

impl PropertyEditor for StringEditor {
    fn provider_name(&self) -> &str {
        provider_name!(StringEditor)
    }

    fn parse(&self, text: &str) -> Result<Value, EditorError> {
        if is_null_with(Some(text), false, false) {
            return Ok(Value::Null);
        }
        Ok(Value::String(text.to_string()))
    }

    fn format(&self, value: &Value) -> Result<Option<String>, EditorError> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(mismatch(self.provider_name(), other)),
        }
    }
}

/// `Byte[]` ↔ the UTF-8 bytes of the text.
pub struct ByteArrayEditor;

impl PropertyEditor for ByteArrayEditor {
    fn provider_name(&self) -> &str {
        provider_name!(ByteArrayEditor)
    }

    fn parse(&self, text: &str) -> Result<Value, EditorError> {
        if is_null(Some(text)) {
            return Ok(Value::Null);
        }
        Ok(Value::Array(
            text.bytes().map(|b| Value::Byte(b as i8)).collect(),
        ))
    }

    fn format(&self, value: &Value) -> Result<Option<String>, EditorError> {
        let items = match value {
            Value::Null => return Ok(None),
            Value::Array(items) => items,
            other => return Err(mismatch(self.provider_name(), other)),
        };
        let mut bytes = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Byte(b) => bytes.push(*b as u8),
                other => return Err(mismatch(self.provider_name(), other)),
            }
        }
        Ok(Some(String::from_utf8(bytes)?))
    }
}

// ---------------------------------------------------------------------------
// FFI exports for dynamic (.so) loading
// ---------------------------------------------------------------------------

propedit_api::pe_abi_version_fn!();
propedit_api::pe_create_editors_fn!(crate::editors);
