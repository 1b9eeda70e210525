use std::fmt;

/// Error kind for editor errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Text could not be parsed into a value.
    Parse,
    /// Value variant does not match what the editor handles.
    Type,
}

/// Error returned by all `PropertyEditor` methods.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorError {
    pub kind: ErrorKind,
    pub message: String,
}

impl EditorError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Parse, message: msg.into() }
    }

    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Type, message: msg.into() }
    }

    /// Add context to the error, preserving the original ErrorKind.
    ///
    /// Produces: `"context: original message"`.
    pub fn with_context(self, ctx: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{ctx}: {}", self.message),
        }
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for EditorError {}

// ---------------------------------------------------------------------------
// From impls: std parse errors → EditorError::Parse
// ---------------------------------------------------------------------------

impl From<std::num::ParseIntError> for EditorError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::parse(e.to_string())
    }
}

impl From<std::num::ParseFloatError> for EditorError {
    fn from(e: std::num::ParseFloatError) -> Self {
        Self::parse(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EditorError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_keeps_kind() {
        let err = EditorError::parse("bad digit").with_context("element 2");
        assert_eq!(err.kind, ErrorKind::Parse);
        assert_eq!(err.message, "element 2: bad digit");
    }

    #[test]
    fn int_parse_error_maps_to_parse_kind() {
        let err: EditorError = "x1".parse::<i32>().unwrap_err().into();
        assert_eq!(err.kind, ErrorKind::Parse);
    }
}
