mod update;

pub use update::{TransitionPolicy, update, update_or_ignore};

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use crate::core::{Record, Result, StoreError, Value};
use crate::query::{FilterState, Summary, filter, summarize};

/// Ordered, uniquely-keyed in-memory collection backing one list view.
///
/// The store itself is never mutated in place: filtering returns a new
/// store holding the matching subsequence, and updates return a new store
/// with the single affected record replaced. Derived data (filtered views,
/// summaries) is recomputed from the current store on demand.
///
/// # Examples
///
/// ```
/// use facetstore::{FilterState, RecordStore};
/// use facetstore::entity::Campaign;
///
/// # fn main() -> Result<(), facetstore::StoreError> {
/// let store = RecordStore::seed(vec![
///     Campaign::draft("Holiday Special", "2024-12-01", "2024-12-31", 100_000.0)?,
/// ])?;
///
/// let hits = store.filtered(&FilterState::new().search("holiday"));
/// assert_eq!(hits.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Build a store from records, rejecting duplicate ids.
    pub fn seed(records: Vec<R>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(StoreError::DuplicateId(record.id().to_string()));
            }
        }
        Ok(Self { records })
    }

    /// Load a store from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self>
    where
        R: DeserializeOwned,
    {
        let records: Vec<R> =
            serde_json::from_str(json).map_err(|e| StoreError::Parse(e.to_string()))?;
        Self::seed(records)
    }

    /// Internal constructor for sequences already known to hold unique ids,
    /// such as filtered subsequences of an existing store.
    pub(crate) fn from_vec_unchecked(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one record, returning the grown store.
    ///
    /// The incoming record must carry a non-empty id not already present;
    /// entity constructors generate fresh UUIDs for new records.
    pub fn insert(&self, record: R) -> Result<Self> {
        if record.id().is_empty() {
            return Err(StoreError::Validation(format!(
                "{} id must not be empty",
                R::ENTITY
            )));
        }
        if self.contains(record.id()) {
            return Err(StoreError::DuplicateId(record.id().to_string()));
        }
        let mut records = self.records.clone();
        records.push(record);
        Ok(Self { records })
    }

    /// Stable-filtered subsequence of this store. See [`filter`].
    pub fn filtered(&self, state: &FilterState) -> Self {
        filter(self, state)
    }

    /// Full-store aggregate summary. See [`summarize`].
    pub fn summarize(&self, numeric_fields: &[&str]) -> Summary {
        summarize(self, numeric_fields)
    }

    /// Single-field update surfacing a missing id as `RecordNotFound`.
    /// See [`update`].
    pub fn update(
        &self,
        id: &str,
        field: &str,
        value: Value,
        policy: TransitionPolicy,
    ) -> Result<Self> {
        update(self, id, field, value, policy)
    }

    /// Single-field update treating a missing id as a no-op.
    /// See [`update_or_ignore`].
    pub fn update_or_ignore(
        &self,
        id: &str,
        field: &str,
        value: Value,
        policy: TransitionPolicy,
    ) -> Result<Self> {
        update_or_ignore(self, id, field, value, policy)
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{User, UserRole, UserStatus};

    fn user(id: &str, name: &str) -> User {
        User::seeded(
            id,
            name,
            &format!("{}@example.com", id),
            UserRole::Creator,
            UserStatus::Active,
            "2024-01-15",
            "2024-01-30",
        )
        .unwrap()
    }

    #[test]
    fn test_seed_rejects_duplicate_ids() {
        let err = RecordStore::seed(vec![user("1", "Alice"), user("1", "Bob")]).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_get_by_id() {
        let store = RecordStore::seed(vec![user("1", "Alice"), user("2", "Bob")]).unwrap();
        assert_eq!(store.get("2").map(|u| u.name.as_str()), Some("Bob"));
        assert!(store.get("3").is_none());
    }

    #[test]
    fn test_insert_preserves_order_and_checks_duplicates() {
        let store = RecordStore::seed(vec![user("1", "Alice")]).unwrap();
        let grown = store.insert(user("2", "Bob")).unwrap();
        assert_eq!(grown.len(), 2);
        assert_eq!(grown.records()[1].name, "Bob");
        // original store untouched
        assert_eq!(store.len(), 1);

        let err = grown.insert(user("2", "Eve")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "id": "1",
                "name": "Sarah Johnson",
                "email": "sarah@example.com",
                "role": "creator",
                "status": "active",
                "joined_at": "2024-01-15",
                "last_active": "2024-01-30"
            }
        ]"#;
        let store: RecordStore<User> = RecordStore::from_json(json).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].role, UserRole::Creator);
    }

    #[test]
    fn test_from_json_bad_document() {
        let err = RecordStore::<User>::from_json("not json").unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }
}
