use std::borrow::Cow;

// Lower-case for case-insensitive containment.
// No normalization or diacritic folding; only code-point lower-casing.
pub(crate) fn fold_ci(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Owned(s.to_ascii_lowercase());
        }
        return Cow::Borrowed(s);
    }

    Cow::Owned(s.to_lowercase())
}

// Containment of an already-folded needle in a haystack folded here.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_ci(haystack).contains(needle)
}
