// crates/countrydb-core/src/traits.rs
use crate::model::Country;
use crate::text::{contains_ignore_case, names_equal};

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`] — equality on the normalized form
///   (case-insensitive, whitespace runs collapsed)
/// - [`NameMatch::name_contains`] — case-insensitive substring match that
///   keeps whitespace as typed
///
/// # Examples
/// ```rust
/// use countrydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Costa Rica").is_named("  costa   RICA "));
/// assert!(Place("Costa Rica").name_contains("TA R"));
/// assert!(!Place("Costa Rica").name_contains("costa  rica"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        names_equal(self.name_str(), q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_ignore_case(self.name_str(), q)
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}
