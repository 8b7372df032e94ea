use crate::core::{Result, Value};

/// Contract every stored entity fulfils.
///
/// A record exposes three projections of itself to the store machinery:
/// the designated free-text search fields, the exact-match facet
/// dimensions, and dynamic field access by name for summaries and
/// single-field updates.
pub trait Record: Clone {
    /// Entity name used in error messages, e.g. `"campaign"`.
    const ENTITY: &'static str;

    /// Unique identifier, stable for the lifetime of the store.
    fn id(&self) -> &str;

    /// Fields scanned by the case-insensitive substring search.
    fn search_text(&self) -> Vec<&str>;

    /// Value of an exact-match facet dimension, if the record carries it.
    fn facet(&self, name: &str) -> Option<String>;

    /// Dynamic field read. `None` when the field does not exist.
    fn get(&self, field: &str) -> Option<Value>;

    /// Dynamic field write with type checking.
    ///
    /// Fails with `FieldNotFound` for unknown fields, `TypeMismatch` for
    /// incompatible values, and `Validation` for text that does not parse
    /// into the field's domain (e.g. an unknown status name).
    fn set(&mut self, field: &str, value: Value) -> Result<()>;

    /// Current status rendered as its wire label, for entities that have one.
    fn status_label(&self) -> Option<&'static str> {
        None
    }

    /// Workflow check consulted by enforced-policy updates before `set`.
    ///
    /// The default accepts everything, which matches entities without a
    /// status workflow. Implementations only constrain the status field;
    /// all other fields pass through.
    fn valid_transition(&self, field: &str, value: &Value) -> Result<()> {
        let _ = (field, value);
        Ok(())
    }
}
