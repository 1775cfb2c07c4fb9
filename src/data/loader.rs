use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{DatasetStore, Table, CATEGORY_COLUMNS, NUMERIC_COLUMNS};
use super::regression::RegressionTable;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Startup-fatal load failures. There is no reload path: any of these aborts
/// the process before a window opens.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("opening {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("reading {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("{}: missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{}, data row {row}: {source}", path.display())]
    Row {
        path: PathBuf,
        row: usize,
        source: csv::Error,
    },

    #[error("{}: regression input is degenerate ({rows} rows)", path.display())]
    DegenerateRegression { path: PathBuf, rows: usize },
}

// ---------------------------------------------------------------------------
// Row schemas
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ObservationRow {
    carat: f64,
    x: f64,
    y: f64,
    z: f64,
    depth: f64,
    table_pct: f64,
    price: f64,
    clarity: String,
    color: String,
    cut: String,
}

#[derive(Debug, Deserialize)]
struct RegressionRow {
    xdimension: f64,
    price: f64,
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

impl DatasetStore {
    /// Load both startup tables. Called exactly once, before the UI starts.
    pub fn load(observations: &Path, regression: &Path) -> Result<Self, DataLoadError> {
        Ok(DatasetStore {
            observations: load_observations(observations)?,
            regression: load_regression(regression)?,
        })
    }
}

/// Load the primary observation table.
///
/// The file must carry a header row naming every column in
/// [`NUMERIC_COLUMNS`] and [`CATEGORY_COLUMNS`]; extra columns are ignored.
pub fn load_observations(path: &Path) -> Result<Table, DataLoadError> {
    let mut reader = open_reader(path)?;
    let required = NUMERIC_COLUMNS.iter().chain(CATEGORY_COLUMNS.iter());
    check_headers(&mut reader, path, required)?;

    let mut rows: Vec<ObservationRow> = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        let row = result.map_err(|source| DataLoadError::Row {
            path: path.to_path_buf(),
            row: row_no,
            source,
        })?;
        rows.push(row);
    }

    let numeric_getters: [(&str, fn(&ObservationRow) -> f64); 7] = [
        ("carat", |r| r.carat),
        ("x", |r| r.x),
        ("y", |r| r.y),
        ("z", |r| r.z),
        ("depth", |r| r.depth),
        ("table_pct", |r| r.table_pct),
        ("price", |r| r.price),
    ];
    let category_getters: [(&str, fn(&ObservationRow) -> &String); 3] = [
        ("clarity", |r| &r.clarity),
        ("color", |r| &r.color),
        ("cut", |r| &r.cut),
    ];

    let mut numeric: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (name, get) in numeric_getters {
        numeric.insert(name.to_string(), rows.iter().map(get).collect());
    }
    let mut categorical: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, get) in category_getters {
        categorical.insert(name.to_string(), rows.iter().map(get).cloned().collect());
    }

    Ok(Table::from_columns(numeric, categorical))
}

/// Load the regression input table and fit its model once.
pub fn load_regression(path: &Path) -> Result<RegressionTable, DataLoadError> {
    let mut reader = open_reader(path)?;
    check_headers(&mut reader, path, ["xdimension", "price"].iter())?;

    let mut xdimension = Vec::new();
    let mut price = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        let row: RegressionRow = result.map_err(|source| DataLoadError::Row {
            path: path.to_path_buf(),
            row: row_no,
            source,
        })?;
        xdimension.push(row.xdimension);
        price.push(row.price);
    }

    let rows = xdimension.len();
    RegressionTable::new(xdimension, price).ok_or(DataLoadError::DegenerateRegression {
        path: path.to_path_buf(),
        rows,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open_reader(path: &Path) -> Result<csv::Reader<File>, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::Reader::from_reader(file))
}

fn check_headers<'a>(
    reader: &mut csv::Reader<File>,
    path: &Path,
    required: impl Iterator<Item = &'a &'a str>,
) -> Result<(), DataLoadError> {
    let headers = reader
        .headers()
        .map_err(|source| DataLoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    for &column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const OBSERVATIONS_CSV: &str = "\
carat,x,y,z,depth,table_pct,price,clarity,color,cut
0.23,3.95,3.98,2.43,61.5,55.0,326,SI2,E,Ideal
0.21,3.89,3.84,2.31,59.8,61.0,326,SI1,E,Premium
0.29,4.05,4.07,2.31,63.3,58.0,334,VS2,I,Good
";

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_observations() {
        let file = write_temp(OBSERVATIONS_CSV);
        let table = load_observations(file.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.numeric_column("price"), Some(&[326.0, 326.0, 334.0][..]));
        let cuts: Vec<&str> = table
            .unique_values("cut")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(cuts, vec!["Good", "Ideal", "Premium"]);
    }

    #[test]
    fn missing_column_is_fatal() {
        let file = write_temp("carat,x,y,z,depth,table_pct,clarity,color,cut\n0.2,1,1,1,60,55,SI2,E,Ideal\n");
        let err = load_observations(file.path()).unwrap_err();
        match err {
            DataLoadError::MissingColumn { column, .. } => assert_eq!(column, "price"),
            other => panic!("expected MissingColumn, got {other}"),
        }
    }

    #[test]
    fn malformed_number_reports_the_row() {
        let csv = "\
carat,x,y,z,depth,table_pct,price,clarity,color,cut
0.23,3.95,3.98,2.43,61.5,55.0,326,SI2,E,Ideal
0.21,oops,3.84,2.31,59.8,61.0,326,SI1,E,Premium
";
        let file = write_temp(csv);
        let err = load_observations(file.path()).unwrap_err();
        match err {
            DataLoadError::Row { row, .. } => assert_eq!(row, 1),
            other => panic!("expected Row, got {other}"),
        }
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_observations(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Open { .. }));
    }

    #[test]
    fn loads_regression_and_fits_once() {
        let file = write_temp("xdimension,price\n1.0,13.0\n2.0,22.0\n3.0,37.0\n4.0,58.0\n");
        let table = load_regression(file.path()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.fitted.len(), 4);
        // price = 10 + 3·x² exactly
        assert!((table.model.slope - 3.0).abs() < 1e-9);
        assert!((table.model.intercept - 10.0).abs() < 1e-9);
    }

    #[test]
    fn single_sample_regression_is_degenerate() {
        let file = write_temp("xdimension,price\n1.0,13.0\n");
        let err = load_regression(file.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::DegenerateRegression { rows: 1, .. }));
    }
}
