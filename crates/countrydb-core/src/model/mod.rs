// crates/countrydb-core/src/model/mod.rs

//! # Record Store
//!
//! - [`Country`]: one catalog entry.
//! - [`Catalog`]: the ordered, owned collection the operations work on.
//! - [`CountryStore`]: a catalog bound to its CSV file, saving at every
//!   save point (after add, after update, on explicit save).
//!
//! None of these types are internally synchronized. They are mutated through
//! `&mut self` by a single owner; callers that share them across threads must
//! serialize access themselves.

pub mod catalog;
pub mod country;
pub mod store;

pub use catalog::Catalog;
pub use country::{Country, CountryUpdate};
pub use store::CountryStore;
