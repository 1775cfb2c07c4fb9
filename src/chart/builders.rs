use thiserror::Error;

use crate::chart::spec::{
    ChartSpec, LineSpec, OverlaySpec, PieSlice, PieSpec, ScatterPoint, ScatterSpec,
};
use crate::color::generate_palette;
use crate::data::model::{Table, PRICE};
use crate::data::regression::RegressionTable;

// ---------------------------------------------------------------------------
// Builder contracts
// ---------------------------------------------------------------------------

/// Smallest mark size the scatter will emit. Non-positive and NaN values in
/// the size column clamp here instead of producing invisible marks.
pub const MIN_MARK_SIZE: f32 = 1.0;

/// Legal range for the scatter size bound (the slider's extremes).
pub const SIZE_BOUND_MIN: f64 = 20.0;
pub const SIZE_BOUND_MAX: f64 = 120.0;

/// A parameter that names a column the table doesn't have, names one of the
/// wrong kind, or falls outside its numeric range. The control panel's
/// enumerated widget domains keep these unreachable from the UI; one showing
/// up means a controls/builder contract mismatch and is confined to its slot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameterError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("column '{0}' is not numeric")]
    NotNumeric(String),

    #[error("column '{0}' is not categorical")]
    NotCategorical(String),

    #[error("size bound {0} outside {SIZE_BOUND_MIN}..={SIZE_BOUND_MAX}")]
    SizeBoundOutOfRange(f64),
}

/// Everything the scatter chart depends on: five widget values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterParams {
    pub x: String,
    pub y: String,
    pub size_by: String,
    pub category: String,
    pub size_bound: f64,
}

/// The aggregated line depends on a single grouping column.
#[derive(Debug, Clone, PartialEq)]
pub struct LineParams {
    pub group_by: String,
}

/// The pie depends on a single categorical column.
#[derive(Debug, Clone, PartialEq)]
pub struct PieParams {
    pub category: String,
}

// ---------------------------------------------------------------------------
// Column resolution
// ---------------------------------------------------------------------------

fn numeric<'t>(table: &'t Table, name: &str) -> Result<&'t [f64], InvalidParameterError> {
    match table.numeric_column(name) {
        Some(col) => Ok(col),
        None if table.has_column(name) => Err(InvalidParameterError::NotNumeric(name.to_string())),
        None => Err(InvalidParameterError::UnknownColumn(name.to_string())),
    }
}

fn categorical<'t>(table: &'t Table, name: &str) -> Result<&'t [String], InvalidParameterError> {
    match table.categorical_column(name) {
        Some(col) => Ok(col),
        None if table.has_column(name) => {
            Err(InvalidParameterError::NotCategorical(name.to_string()))
        }
        None => Err(InvalidParameterError::UnknownColumn(name.to_string())),
    }
}

/// Deterministic colour per distinct value of a categorical column, in
/// lexical order.
fn category_colors(table: &Table, column: &str) -> Vec<(String, eframe::egui::Color32)> {
    let Some(distinct) = table.unique_values(column) else {
        return Vec::new();
    };
    distinct
        .iter()
        .cloned()
        .zip(generate_palette(distinct.len()))
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

/// One mark per row: x/y from the chosen numeric columns, mark size linearly
/// scaled by the size column up to `size_bound`, colour and hover label from
/// the category column. The x axis is always log-scaled.
pub fn scatter(table: &Table, params: &ScatterParams) -> Result<ChartSpec, InvalidParameterError> {
    let xs = numeric(table, &params.x)?;
    let ys = numeric(table, &params.y)?;
    let sizes = numeric(table, &params.size_by)?;
    let categories = categorical(table, &params.category)?;

    if !(SIZE_BOUND_MIN..=SIZE_BOUND_MAX).contains(&params.size_bound) {
        return Err(InvalidParameterError::SizeBoundOutOfRange(params.size_bound));
    }

    // Largest positive value anchors the top of the size scale; rows at or
    // below zero (and NaN) clamp to the floor.
    let max_size = sizes
        .iter()
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold(0.0, f64::max);

    let points = (0..table.len())
        .map(|i| {
            let v = sizes[i];
            let size = if max_size > 0.0 && v.is_finite() && v > 0.0 {
                ((v / max_size * params.size_bound) as f32).max(MIN_MARK_SIZE)
            } else {
                MIN_MARK_SIZE
            };
            ScatterPoint {
                x: xs[i],
                y: ys[i],
                size,
                category: categories[i].clone(),
            }
        })
        .collect();

    Ok(ChartSpec::Scatter(ScatterSpec {
        x_label: params.x.clone(),
        y_label: params.y.clone(),
        log_x: true,
        points,
        colors: category_colors(table, &params.category),
    }))
}

// ---------------------------------------------------------------------------
// Aggregated line
// ---------------------------------------------------------------------------

/// Mean price per distinct value of the grouping column, sorted ascending by
/// key. Works for numeric and categorical grouping; categorical groups take
/// their lexical rank as the x coordinate.
pub fn mean_line(table: &Table, params: &LineParams) -> Result<ChartSpec, InvalidParameterError> {
    let prices = numeric(table, PRICE)?;

    if let Some(keys) = table.numeric_column(&params.group_by) {
        // Sort (key, price) pairs, then merge runs of identical keys into
        // one mean each.
        let mut pairs: Vec<(f64, f64)> = keys.iter().copied().zip(prices.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut points: Vec<[f64; 2]> = Vec::new();
        let mut i = 0;
        while i < pairs.len() {
            let key = pairs[i].0;
            let mut sum = 0.0;
            let mut count = 0usize;
            while i < pairs.len() && pairs[i].0 == key {
                sum += pairs[i].1;
                count += 1;
                i += 1;
            }
            points.push([key, sum / count as f64]);
        }

        return Ok(ChartSpec::Line(LineSpec {
            x_label: params.group_by.clone(),
            points,
            tick_labels: None,
        }));
    }

    let keys = categorical(table, &params.group_by)?;
    let mut groups: std::collections::BTreeMap<&str, (f64, usize)> = Default::default();
    for (key, &price) in keys.iter().zip(prices) {
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += price;
        entry.1 += 1;
    }

    let mut points = Vec::with_capacity(groups.len());
    let mut tick_labels = Vec::with_capacity(groups.len());
    for (rank, (key, (sum, count))) in groups.into_iter().enumerate() {
        points.push([rank as f64, sum / count as f64]);
        tick_labels.push(key.to_string());
    }

    Ok(ChartSpec::Line(LineSpec {
        x_label: params.group_by.clone(),
        points,
        tick_labels: Some(tick_labels),
    }))
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

/// One slice per observed distinct value of the category column, sized by row
/// count. Only observed values appear, so no zero-count slices exist.
pub fn pie(table: &Table, params: &PieParams) -> Result<ChartSpec, InvalidParameterError> {
    let values = categorical(table, &params.category)?;

    let mut counts: std::collections::BTreeMap<&str, usize> = Default::default();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let palette = generate_palette(counts.len());
    let slices = counts
        .into_iter()
        .zip(palette)
        .map(|((label, count), color)| PieSlice {
            label: label.to_string(),
            count,
            color,
        })
        .collect();

    Ok(ChartSpec::Pie(PieSpec {
        field: params.category.clone(),
        total: table.len(),
        slices,
    }))
}

// ---------------------------------------------------------------------------
// Regression overlay
// ---------------------------------------------------------------------------

/// Raw samples as markers plus the precomputed fitted curve as a line. Takes
/// no parameters and never refits; it only re-reads the `fitted` column.
pub fn regression_overlay(regression: &RegressionTable) -> ChartSpec {
    let markers = regression
        .xdimension
        .iter()
        .zip(&regression.price)
        .map(|(&x, &y)| [x, y])
        .collect();

    let mut fitted: Vec<[f64; 2]> = regression
        .xdimension
        .iter()
        .zip(&regression.fitted)
        .map(|(&x, &y)| [x, y])
        .collect();
    fitted.sort_by(|a, b| a[0].total_cmp(&b[0]));

    ChartSpec::Overlay(OverlaySpec {
        title: "Regression line X Dimension vs Price".to_string(),
        x_title: "X dimension".to_string(),
        y_title: "Price".to_string(),
        markers,
        fitted,
    })
}
