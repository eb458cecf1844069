//! countrydb prelude: bring common types and traits into scope for callers.

pub use crate::common::{CatalogStats, ContinentCount, RangeField, SortField};
pub use crate::error::{CatalogError, Result};
pub use crate::loader::{load, save, FallbackReason, LoadReport, LoadSource};
pub use crate::model::{Catalog, Country, CountryStore, CountryUpdate};
pub use crate::text::{normalize_for_compare, require_nonnegative_integer};
pub use crate::traits::NameMatch;
