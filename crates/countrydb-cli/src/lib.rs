//! countrydb-cli
//! =============
//!
//! Command-line interface for the `countrydb-core` country catalog.
//!
//! This crate primarily provides a binary (`countrydb`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install countrydb-cli
//! countrydb --help
//! countrydb                      # interactive menu
//! countrydb stats
//! countrydb search chi
//! countrydb range area 500000 1000000
//! ```
//!
//! For programmatic access to the catalog, use the [`countrydb-core`] crate
//! directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
