use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::Record;
use crate::store::RecordStore;

/// Scalar statistics derived from a full record store.
///
/// Always computed over the unfiltered store: headline cards keep showing
/// store-wide totals while the table below them is filtered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Total record count.
    pub count: usize,
    /// Record count per status label, absent for status-less entities.
    pub by_status: BTreeMap<String, usize>,
    /// Sum per requested numeric field. Null and non-numeric values
    /// contribute nothing.
    pub sums: BTreeMap<String, f64>,
}

impl Summary {
    pub fn status_count(&self, status: &str) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }

    pub fn sum(&self, field: &str) -> f64 {
        self.sums.get(field).copied().unwrap_or(0.0)
    }

    /// Rounded integer percentage of one summed field over another,
    /// e.g. spent over budget. Guarded like [`percentage`].
    pub fn percent_of(&self, numerator: &str, denominator: &str) -> i64 {
        percentage(self.sum(numerator), self.sum(denominator))
    }
}

/// Compute the aggregate summary of a store.
///
/// `numeric_fields` names the fields to sum; fields a record does not
/// carry are skipped for that record, and an empty store sums to 0.
pub fn summarize<R: Record>(store: &RecordStore<R>, numeric_fields: &[&str]) -> Summary {
    let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();

    for field in numeric_fields {
        sums.insert((*field).to_string(), 0.0);
    }

    for record in store {
        if let Some(status) = record.status_label() {
            *by_status.entry(status.to_string()).or_insert(0) += 1;
        }
        for field in numeric_fields {
            if let Some(v) = record.get(field).and_then(|v| v.as_f64()) {
                if let Some(total) = sums.get_mut(*field) {
                    *total += v;
                }
            }
        }
    }

    Summary {
        count: store.len(),
        by_status,
        sums,
    }
}

/// `round(100 * numerator / denominator)` with a zero or non-finite
/// denominator yielding 0 rather than an error, `NaN`, or infinity.
pub fn percentage(numerator: f64, denominator: f64) -> i64 {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return 0;
    }
    (100.0 * numerator / denominator).round() as i64
}
