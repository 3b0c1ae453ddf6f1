//! Path utilities for validation and normalization.
//!
//! All functions are pure: same input, same output, no side effects.

use std::borrow::Cow;

/// Validates that a path is in canonical form.
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use storefront_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/item/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("item")); // Missing leading /
/// assert!(!is_valid_path("/item/")); // Trailing /
/// assert!(!is_valid_path("/item//42")); // Double //
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    if !path.starts_with('/') {
        return false;
    }

    if path.contains("//") {
        return false;
    }

    if path == "/" {
        return true;
    }

    !path.ends_with('/')
}

/// Normalizes a path to canonical form.
///
/// Returns `Cow::Borrowed` when the input is already valid (zero
/// allocations), `Cow::Owned` otherwise.
///
/// - Trailing slashes: `/item/42/` → `/item/42`
/// - Duplicate slashes: `/item//42` → `/item/42`
/// - Missing leading slash: `item/42` → `/item/42`
/// - Empty input: `` → `/`
///
/// # Examples
///
/// ```
/// use storefront_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/item/42");
/// assert!(matches!(path, Cow::Borrowed("/item/42")));
///
/// assert_eq!(normalize_path("/item/42/"), "/item/42");
/// assert_eq!(normalize_path("/pay//abc-123"), "/pay/abc-123");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    // Fast path: already canonical, return borrowed.
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}
