use std::collections::{BTreeMap, BTreeSet};

use crate::data::regression::RegressionTable;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Numeric columns of the observation table.
pub const NUMERIC_COLUMNS: [&str; 7] = ["carat", "x", "y", "z", "depth", "table_pct", "price"];

/// Categorical columns of the observation table.
pub const CATEGORY_COLUMNS: [&str; 3] = ["clarity", "color", "cut"];

/// The aggregated-line chart always averages this column.
pub const PRICE: &str = "price";

// ---------------------------------------------------------------------------
// Table – the column-oriented observation table
// ---------------------------------------------------------------------------

/// An immutable, fixed-schema table: numeric and categorical columns keyed by
/// name, all of equal length, with a pre-computed set of distinct values per
/// categorical column.
#[derive(Debug, Clone)]
pub struct Table {
    rows: usize,
    numeric: BTreeMap<String, Vec<f64>>,
    categorical: BTreeMap<String, Vec<String>>,
    unique_values: BTreeMap<String, BTreeSet<String>>,
}

impl Table {
    /// Build a table from parallel column vectors. All columns must have the
    /// same length; the loader constructs them row by row so this holds.
    pub fn from_columns(
        numeric: BTreeMap<String, Vec<f64>>,
        categorical: BTreeMap<String, Vec<String>>,
    ) -> Self {
        let rows = numeric
            .values()
            .map(Vec::len)
            .chain(categorical.values().map(Vec::len))
            .next()
            .unwrap_or(0);

        let unique_values = categorical
            .iter()
            .map(|(col, vals)| (col.clone(), vals.iter().cloned().collect()))
            .collect();

        Table {
            rows,
            numeric,
            categorical,
            unique_values,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Look up a numeric column by name.
    pub fn numeric_column(&self, name: &str) -> Option<&[f64]> {
        self.numeric.get(name).map(Vec::as_slice)
    }

    /// Look up a categorical column by name.
    pub fn categorical_column(&self, name: &str) -> Option<&[String]> {
        self.categorical.get(name).map(Vec::as_slice)
    }

    /// Sorted distinct values of a categorical column.
    pub fn unique_values(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.unique_values.get(name)
    }

    /// Whether any column (numeric or categorical) has this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.numeric.contains_key(name) || self.categorical.contains_key(name)
    }
}

// ---------------------------------------------------------------------------
// DatasetStore – everything loaded at startup
// ---------------------------------------------------------------------------

/// The two tables the dashboard works from, loaded once at process start and
/// read-only afterwards. Shared across sessions behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    pub observations: Table,
    pub regression: RegressionTable,
}
