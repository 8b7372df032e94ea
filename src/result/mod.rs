use std::fmt;

use crate::core::{Record, Value};
use crate::store::RecordStore;

/// Column-aligned tabular projection of a record sequence, for the demo
/// CLI and debugging. Fields a record does not carry render as NULL.
#[derive(Debug)]
pub struct TableOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl TableOutput {
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Project the named fields of every record in order.
    pub fn from_records<R: Record>(store: &RecordStore<R>, fields: &[&str]) -> Self {
        let columns = fields.iter().map(|f| (*f).to_string()).collect();
        let rows = store
            .iter()
            .map(|record| {
                fields
                    .iter()
                    .map(|f| record.get(f).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TableOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return writeln!(f, "Empty result set");
        }

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                widths[i] = widths[i].max(value.to_string().len());
            }
        }

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{:width$}", col, width = widths[i]))
            .collect();
        writeln!(f, "{}", header.join(" | "))?;

        let separator: String = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(f, "{}", separator)?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, val)| format!("{:width$}", val.to_string(), width = widths[i]))
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }

        writeln!(f, "\n{} row(s)", self.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Contract, ContractStatus};

    #[test]
    fn test_from_records_preserves_order() {
        let store = RecordStore::seed(vec![
            Contract::seeded("1", "Sarah Johnson", "Summer Fashion", ContractStatus::Pending, "2024-01-15").unwrap(),
            Contract::seeded("2", "Mike Chen", "Tech Product Launch", ContractStatus::Signed, "2024-01-10").unwrap(),
        ])
        .unwrap();

        let table = TableOutput::from_records(&store, &["creator", "status"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][0], Value::from("Sarah Johnson"));
        assert_eq!(table.rows[1][1], Value::from("signed"));
    }

    #[test]
    fn test_missing_field_renders_null() {
        let store = RecordStore::seed(vec![
            Contract::seeded("1", "A", "B", ContractStatus::Pending, "2024-01-15").unwrap(),
        ])
        .unwrap();
        let table = TableOutput::from_records(&store, &["creator", "no_such_field"]);
        assert_eq!(table.rows[0][1], Value::Null);
    }

    #[test]
    fn test_render_alignment() {
        let table = TableOutput::new(
            vec!["id".into(), "name".into()],
            vec![
                vec![Value::from("1"), Value::from("Sarah Johnson")],
                vec![Value::from("2"), Value::from("Mike")],
            ],
        );
        let rendered = table.to_string();
        assert!(rendered.contains("id | name"));
        assert!(rendered.contains("2 row(s)"));
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(TableOutput::empty().to_string(), "Empty result set\n");
    }
}
