use log::{debug, info};

use crate::core::{Record, Result, Value};
use crate::query::{FilterState, Summary};
use crate::store::{RecordStore, TransitionPolicy};

/// One list view over a record store: the store itself, the active filter
/// state, and the workflow policy for status updates.
///
/// This is the shape every dashboard list page instantiates: the table
/// renders [`CollectionView::visible`], the headline cards render
/// [`CollectionView::summary`] over the full store, and user actions funnel
/// through [`CollectionView::update`] or [`CollectionView::insert`].
///
/// # Examples
///
/// ```
/// use facetstore::CollectionView;
/// use facetstore::fixtures;
///
/// let mut view = CollectionView::new(fixtures::campaigns())
///     .with_summed_fields(&["budget", "spent"]);
///
/// view.set_facet("status", "active");
/// assert_eq!(view.visible().len(), 1);
///
/// // Summaries stay store-wide regardless of the filter.
/// let summary = view.summary();
/// assert_eq!(summary.count, 4);
/// assert_eq!(summary.sum("budget"), 265_000.0);
/// ```
pub struct CollectionView<R: Record> {
    store: RecordStore<R>,
    filter: FilterState,
    policy: TransitionPolicy,
    summed_fields: Vec<String>,
}

impl<R: Record> CollectionView<R> {
    pub fn new(store: RecordStore<R>) -> Self {
        Self {
            store,
            filter: FilterState::new(),
            policy: TransitionPolicy::default(),
            summed_fields: Vec::new(),
        }
    }

    /// Enforce entity status workflows on updates through this view.
    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Numeric fields included in [`CollectionView::summary`] sums.
    pub fn with_summed_fields(mut self, fields: &[&str]) -> Self {
        self.summed_fields = fields.iter().map(|f| (*f).to_string()).collect();
        self
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter = self.filter.clone().search(term);
        debug!("{} view search set to '{}'", R::ENTITY, self.filter.search_term());
    }

    pub fn set_facet(&mut self, name: &str, value: &str) {
        self.filter = self.filter.clone().facet(name, value);
        debug!("{} view facet '{}' set to '{}'", R::ENTITY, name, value);
    }

    pub fn clear_facet(&mut self, name: &str) {
        self.filter = self.filter.clone().facet(name, "");
    }

    pub fn reset_filters(&mut self) {
        self.filter = FilterState::new();
    }

    /// The filtered subsequence currently visible in the table.
    pub fn visible(&self) -> RecordStore<R> {
        self.store.filtered(&self.filter)
    }

    /// Store-wide summary, independent of the active filter.
    pub fn summary(&self) -> Summary {
        let fields: Vec<&str> = self.summed_fields.iter().map(String::as_str).collect();
        self.store.summarize(&fields)
    }

    /// Apply a single-field update; a missing id is an error.
    pub fn update(&mut self, id: &str, field: &str, value: Value) -> Result<()> {
        self.store = self.store.update(id, field, value, self.policy)?;
        info!("{} '{}' updated via view", R::ENTITY, id);
        Ok(())
    }

    /// Apply a single-field update, ignoring a missing id.
    pub fn update_or_ignore(&mut self, id: &str, field: &str, value: Value) -> Result<()> {
        self.store = self.store.update_or_ignore(id, field, value, self.policy)?;
        Ok(())
    }

    /// Append a new record to the backing store.
    pub fn insert(&mut self, record: R) -> Result<()> {
        self.store = self.store.insert(record)?;
        info!("{} inserted via view, store size {}", R::ENTITY, self.store.len());
        Ok(())
    }
}
