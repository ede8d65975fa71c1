// src/table.rs
use anyhow::{anyhow, Result};

/// A single named column of cell values, held as text.
#[derive(Debug, Clone)]
pub struct Column {
    /// Column header as it appears in the exported sheet.
    pub name: String,
    /// Cell values, one per row, top to bottom.
    pub values: Vec<String>,
}

/// An in-memory table: ordered columns of equal length.
///
/// Exists only long enough to be handed to the exporter; there is no
/// mutation surface beyond appending whole columns.
#[derive(Debug, Default, Clone)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Every column after the first must match the
    /// existing row count.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<()> {
        let name = name.into();
        if let Some(first) = self.columns.first() {
            if values.len() != first.values.len() {
                return Err(anyhow!(
                    "Column '{}' has {} values, expected {}",
                    name,
                    values.len(),
                    first.values.len()
                ));
            }
        }
        self.columns.push(Column { name, values });
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column headers, in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Iterate rows as ordered field lists, one field per column.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.num_rows())
            .map(move |i| self.columns.iter().map(|c| c.values[i].as_str()).collect())
    }

    /// The fixed dataset the exporter binary ships: three columns, two rows.
    pub fn sample() -> Self {
        let mut table = Table::new();
        // push_column only fails on a length mismatch; these are all length 2
        for (name, values) in [
            ("Name", ["Mahesh", "Suresh"]),
            ("Age", ["30", "28"]),
            ("City", ["Mumbai", "Delhi"]),
        ] {
            table
                .push_column(name, values.iter().map(|v| v.to_string()).collect())
                .expect("sample columns have equal length");
        }
        table
    }
}
