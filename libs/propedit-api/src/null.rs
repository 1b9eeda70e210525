//! Shared "no value" convention.
//!
//! Every editor decides whether its input text stands for the absence of a
//! value through these two functions, so `null` reads the same everywhere.

/// Literal text that represents the null value (compared ignoring ASCII case).
pub const NULL_LITERAL: &str = "null";

/// Whether `text` is the null value, trimming and counting the empty string as null.
pub fn is_null(text: Option<&str>) -> bool {
    is_null_with(text, true, true)
}

/// Whether `text` is the null value.
///
/// - `trim`: strip surrounding whitespace before checking.
/// - `include_empty`: treat an empty string (after optional trim) as null.
pub fn is_null_with(text: Option<&str>, trim: bool, include_empty: bool) -> bool {
    let Some(text) = text else {
        return true;
    };
    let text = if trim { text.trim() } else { text };
    if include_empty && text.is_empty() {
        return true;
    }
    text.eq_ignore_ascii_case(NULL_LITERAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_null() {
        assert!(is_null(None));
        assert!(is_null_with(None, false, false));
    }

    #[test]
    fn default_form_trims_and_includes_empty() {
        assert!(is_null(Some("")));
        assert!(is_null(Some("   ")));
        assert!(is_null(Some("NuLL")));
        assert!(is_null(Some(" null ")));
        assert!(!is_null(Some("x")));
        assert!(!is_null(Some("nullable")));
    }

    #[test]
    fn empty_not_null_when_excluded() {
        assert!(!is_null_with(Some(""), true, false));
        assert!(!is_null_with(Some("  "), true, false));
    }

    #[test]
    fn untrimmed_spaces_are_not_empty() {
        assert!(!is_null_with(Some("  "), false, true));
        assert!(!is_null_with(Some(" null "), false, true));
        assert!(is_null_with(Some("NULL"), false, false));
    }
}
