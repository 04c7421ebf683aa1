//! String predicates shared by the entity and the registry.

/// Strips leading and trailing characters at or below U+0020 (space and
/// ASCII control characters). Other Unicode whitespace, such as a
/// non-breaking space, is kept.
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Returns `true` when `s` is empty after [`trim`].
pub fn is_blank(s: &str) -> bool {
    trim(s).is_empty()
}

/// Simple email format check.
///
/// The address must not be blank and its first `@` must be neither the first
/// nor the last character. This is stricter than the check applied by
/// [`User::set_email`](crate::model::User::set_email), which only requires an
/// `@` somewhere.
pub fn is_valid_email(email: &str) -> bool {
    if is_blank(email) {
        return false;
    }
    match email.find('@') {
        Some(at) => at > 0 && at + 1 < email.len(),
        None => false,
    }
}
