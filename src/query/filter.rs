use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::Record;
use crate::store::RecordStore;

/// Ephemeral filter criteria owned by one view.
///
/// Combines a case-insensitive substring search over a record's designated
/// search fields with zero or more exact-match facet selections. An empty
/// search term and unset facets match everything, so the default state is
/// the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    search_term: String,
    facets: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Select a facet value. An empty value clears the selection instead,
    /// so an "all" dropdown option maps straight onto this call.
    pub fn facet(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if value.is_empty() {
            self.facets.remove(&name);
        } else {
            self.facets.insert(name, value);
        }
        self
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn facets(&self) -> &BTreeMap<String, String> {
        &self.facets
    }

    /// True when this state matches every record.
    pub fn is_identity(&self) -> bool {
        self.search_term.is_empty() && self.facets.is_empty()
    }

    /// Conjunction of two filter states: facet selections are unioned
    /// (`other` wins on the same facet name) and the non-empty search term
    /// of `other` replaces this one.
    pub fn and(&self, other: &FilterState) -> FilterState {
        let mut combined = self.clone();
        if !other.search_term.is_empty() {
            combined.search_term = other.search_term.clone();
        }
        for (name, value) in &other.facets {
            combined.facets.insert(name.clone(), value.clone());
        }
        combined
    }

    /// Whether one record satisfies the full conjunction.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if !self.search_term.is_empty() {
            let needle = self.search_term.to_lowercase();
            let hit = record
                .search_text()
                .iter()
                .any(|text| text.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        self.facets
            .iter()
            .all(|(name, selected)| record.facet(name).as_deref() == Some(selected.as_str()))
    }
}

/// Stable predicate filter: the ordered subsequence of `store` matching
/// `state`.
///
/// Pure and total: the input store is never modified, original order is
/// preserved, and an empty result is an ordinary value. An identity
/// `FilterState` returns the whole store.
pub fn filter<R: Record>(store: &RecordStore<R>, state: &FilterState) -> RecordStore<R> {
    let records = store
        .iter()
        .filter(|r| state.matches(*r))
        .cloned()
        .collect();
    RecordStore::from_vec_unchecked(records)
}
