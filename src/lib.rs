// ============================================================================
// facetstore Library
// ============================================================================

//! In-memory faceted record store for list-view workloads.
//!
//! Every list-bearing screen of a dashboard product repeats the same
//! shape: an ordered collection of uniquely-keyed records, a free-text
//! search combined with exact-match facet filters, headline aggregates
//! computed over the whole collection, and single-field updates applied
//! to one record at a time. `facetstore` extracts that shape into a
//! reusable library:
//!
//! - [`RecordStore`] holds the ordered records and never mutates in place.
//! - [`FilterState`] + [`query::filter`] derive the stable filtered
//!   subsequence shown in the table.
//! - [`query::summarize`] derives counts, per-status counts, field sums,
//!   and guarded percentages over the full store.
//! - [`store::update`] produces a new store with one field of one record
//!   replaced, optionally enforcing the entity's status workflow.
//! - [`CollectionView`] ties the pieces together for one view.
//!
//! # Examples
//!
//! ```
//! use facetstore::{CollectionView, FilterState, TransitionPolicy, Value};
//! use facetstore::fixtures;
//!
//! # fn main() -> Result<(), facetstore::StoreError> {
//! let mut view = CollectionView::new(fixtures::contracts())
//!     .with_policy(TransitionPolicy::Enforced);
//!
//! view.set_facet("status", "pending");
//! assert_eq!(view.visible().len(), 2);
//!
//! // Send a pending contract out for signature.
//! view.update("1", "status", Value::from("sent"))?;
//! assert_eq!(view.summary().status_count("sent"), 1);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod entity;
pub mod fixtures;
pub mod query;
pub mod result;
pub mod store;
pub mod view;

// Re-export main types for convenience
pub use crate::core::{Record, Result, StoreError, Value};
pub use crate::query::{FilterState, Summary, percentage};
pub use crate::result::TableOutput;
pub use crate::store::{RecordStore, TransitionPolicy};
pub use crate::view::CollectionView;
