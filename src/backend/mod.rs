//! The four lineage lookup backends under comparison.
//!
//! Each backend wraps a different backing resource behind the same
//! [`LineageSource`](crate::pipeline::LineageSource) seam. The exact shape of
//! the returned name list (whether the queried taxon and the root node appear)
//! follows the library each backend stands in for; the quirks are deliberate
//! and documented per module.

pub mod cached;
pub mod entrez;
pub mod sqlite;
pub mod taxdump;

pub use cached::CachedBackend;
pub use entrez::EntrezBackend;
pub use sqlite::SqliteBackend;
pub use taxdump::TaxdumpBackend;
