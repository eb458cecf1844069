//! countrydb-rs
//!
//! Umbrella crate for the workspace: re-exports `countrydb-core` so the demos
//! can `use countrydb_rs::prelude::*`.

pub use countrydb_core::*;
