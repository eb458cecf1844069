// crates/countrydb-core/src/text.rs

//! Text helpers shared by the catalog: name normalization and strict
//! numeric parsing.

use crate::error::{CatalogError, Result};

/// Normalizes a name for equality comparisons.
///
/// Collapses every run of whitespace into a single space, trims both ends
/// and lowercases the result. Used for exact-name matching (add, find,
/// update); substring search does **not** go through this function.
///
/// # Examples
///
/// ```rust
/// use countrydb_core::text::normalize_for_compare;
///
/// assert_eq!(normalize_for_compare("  Costa   Rica "), "costa rica");
/// assert_eq!(normalize_for_compare("CHILE"), "chile");
/// ```
pub fn normalize_for_compare(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// `true` if both names are equal after [`normalize_for_compare`].
pub fn names_equal(a: &str, b: &str) -> bool {
    normalize_for_compare(a) == normalize_for_compare(b)
}

/// Parses a non-negative integer, accepting nothing but decimal digits.
///
/// Surrounding whitespace is trimmed first. The remaining text must be
/// non-empty and consist only of ASCII digits: signs, decimal points,
/// thousands separators and inner spaces are all rejected. Values that do
/// not fit in a `u64` are rejected as well.
///
/// # Examples
///
/// ```rust
/// use countrydb_core::text::require_nonnegative_integer;
///
/// assert_eq!(require_nonnegative_integer(" 42 ").unwrap(), 42);
/// assert!(require_nonnegative_integer("-1").is_err());
/// assert!(require_nonnegative_integer("1.5").is_err());
/// assert!(require_nonnegative_integer("1,000").is_err());
/// ```
pub fn require_nonnegative_integer(raw: &str) -> Result<u64> {
    let digits = raw.trim();
    if digits.is_empty() {
        return Err(CatalogError::Validation("expected a number, got nothing".into()));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::Validation(format!(
            "'{digits}' is not a whole non-negative number"
        )));
    }
    digits
        .parse::<u64>()
        .map_err(|_| CatalogError::Validation(format!("'{digits}' is too large")))
}

/// Case-insensitive containment test, whitespace preserved.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_inner_whitespace() {
        assert_eq!(normalize_for_compare("New\t  Zealand"), "new zealand");
        assert_eq!(normalize_for_compare("   "), "");
    }

    #[test]
    fn names_equal_ignores_case_and_spacing() {
        assert!(names_equal("  argentina", "ARGENTINA  "));
        assert!(!names_equal("Argentina", "Argentin a"));
    }

    #[test]
    fn accepts_plain_digits_only() {
        assert_eq!(require_nonnegative_integer("0").unwrap(), 0);
        assert_eq!(require_nonnegative_integer("007").unwrap(), 7);
        for bad in ["", "  ", "+5", "-5", "5.0", "1 000", "1_000", "abc", "12a", "²"] {
            assert!(
                matches!(require_nonnegative_integer(bad), Err(CatalogError::Validation(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(require_nonnegative_integer("18446744073709551616").is_err());
        assert_eq!(
            require_nonnegative_integer("18446744073709551615").unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn substring_match_keeps_spaces() {
        assert!(contains_ignore_case("Costa Rica", "A R"));
        assert!(!contains_ignore_case("Costa Rica", "ar"));
    }
}
