//! Query catalog for blurr workloads.
//!
//! A workload issues two kinds of queries:
//!
//! - [`FieldQuery`] - a point lookup on one indexable field with a result limit,
//!   used by the size-driven workload.
//! - [`CatalogQuery`] - one of the named query shapes over profile documents,
//!   each variant carrying exactly the typed parameters its statement needs.
//!
//! Both render to a N1QL statement for a given bucket. Rendering is the only
//! interpretation the catalog performs; results are never inspected.
//!
//! # Example
//!
//! ```rust
//! use query_catalog::{CatalogQuery, QueryName};
//!
//! let query = CatalogQuery::NameAndStreetByCity { city: "a1b2c3".to_string() };
//! assert_eq!(query.name(), QueryName::NameAndStreetByCity);
//! assert!(query.render("profiles").contains("FROM profiles"));
//! ```

pub mod catalog;
pub mod name;

pub use catalog::{CatalogQuery, FieldQuery, Query};
pub use name::{QueryName, UnknownQueryName};
