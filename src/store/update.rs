use log::{debug, warn};

use crate::core::{Record, Result, StoreError, Value};
use crate::store::RecordStore;

/// How status-field writes are checked against the entity workflow.
///
/// `Permissive` places no constraints: any status may be set to any
/// other. `Enforced` consults the entity's transition table and rejects
/// illegal moves with [`StoreError::IllegalTransition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    #[default]
    Permissive,
    Enforced,
}

/// Replace one field of the record matching `id`, returning a new store.
///
/// Every other record is carried over unchanged by value, and the input
/// store is never modified. A missing id is an error here; callers that
/// want a silent no-op instead use [`update_or_ignore`].
pub fn update<R: Record>(
    store: &RecordStore<R>,
    id: &str,
    field: &str,
    value: Value,
    policy: TransitionPolicy,
) -> Result<RecordStore<R>> {
    let position = store
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))?;

    let mut updated = store.records()[position].clone();
    if policy == TransitionPolicy::Enforced {
        updated.valid_transition(field, &value)?;
    }
    updated.set(field, value)?;

    debug!("{} '{}' field '{}' updated", R::ENTITY, id, field);

    let mut records = store.records().to_vec();
    records[position] = updated;
    Ok(RecordStore::from_vec_unchecked(records))
}

/// Like [`update`], but a missing id returns the store unchanged.
///
/// Field and transition errors still surface; only the absent target is
/// tolerated.
pub fn update_or_ignore<R: Record>(
    store: &RecordStore<R>,
    id: &str,
    field: &str,
    value: Value,
    policy: TransitionPolicy,
) -> Result<RecordStore<R>> {
    match update(store, id, field, value, policy) {
        Err(StoreError::RecordNotFound(missing)) => {
            warn!("{} '{}' not found, update ignored", R::ENTITY, missing);
            Ok(store.clone())
        }
        other => other,
    }
}
