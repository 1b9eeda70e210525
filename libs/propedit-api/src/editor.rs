use crate::error::EditorError;
use crate::value::Value;

/// Marker every provider name carries between the edited type's name and
/// anything after it (`propedit.editors.FloatEditor` edits `Float`).
pub const EDITOR_MARKER: &str = "Editor";

/// Marker appended to an element type's name for array-specialized editors
/// (`ByteArrayEditor` edits `Byte[]`).
pub const ARRAY_MARKER: &str = "Array";

/// Two-way converter between text and a typed `Value`.
///
/// Editors are constructed once, shared for the life of the process and must
/// be stateless from the caller's point of view.
///
/// - `provider_name()` — qualified name of the provider. The registry derives
///   the lookup key from it: last namespace segment, cut at `EDITOR_MARKER`.
/// - `parse()` — text → value. Null text (see [`crate::null`]) → `Value::Null`.
/// - `format()` — value → text. `Value::Null` → `None`.
pub trait PropertyEditor: Send + Sync {
    fn provider_name(&self) -> &str;
    fn parse(&self, text: &str) -> Result<Value, EditorError>;
    fn format(&self, value: &Value) -> Result<Option<String>, EditorError>;
}

impl std::fmt::Debug for dyn PropertyEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyEditor")
            .field("provider", &self.provider_name())
            .finish()
    }
}
