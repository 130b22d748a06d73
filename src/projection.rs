//! Reduce a parsed grid to numeric axes for the parallel-coordinates view.
//!
//! The class column becomes the index of each row's label within the unique
//! labels; every other column is parsed as a float, with anything that does
//! not start with a number read as 0.

use crate::data::model::Grid;

/// Conditions that stop a projection request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    /// The projection view was opened before any file was loaded.
    #[error("No dataset loaded")]
    NoDataset,
    /// No header reads "class" (case-insensitively).
    #[error("Class column not found")]
    NoClassColumn,
}

/// One axis of the plot: a column's values reduced to numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub label: String,
    pub values: Vec<f64>,
}

/// Result of projecting a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub class_column: usize,
    /// Unique class labels in first-occurrence order.
    pub labels: Vec<String>,
    /// One per header column, same order.
    pub dimensions: Vec<Dimension>,
    /// Non-class cells that did not parse and were read as 0.
    pub coerced_cells: usize,
}

pub fn project(grid: &Grid) -> Result<Projection, ProjectionError> {
    let class_column = grid.class_column().ok_or_else(|| {
        log::error!("Class column not found!");
        ProjectionError::NoClassColumn
    })?;

    let labels = grid.unique_values(class_column);
    let rows = grid.data_rows();
    let mut coerced_cells = 0;

    let dimensions = grid
        .header()
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let values = rows
                .iter()
                .map(|row| {
                    let cell = Grid::cell(row, col);
                    if col == class_column {
                        labels.iter().position(|l| l == cell).unwrap_or(0) as f64
                    } else {
                        parse_float(cell).unwrap_or_else(|| {
                            coerced_cells += 1;
                            0.0
                        })
                    }
                })
                .collect();
            Dimension {
                label: header.clone(),
                values,
            }
        })
        .collect();

    log::debug!("Unique classes: {labels:?}");

    Ok(Projection {
        class_column,
        labels,
        dimensions,
        coerced_cells,
    })
}

/// Lenient float parse: skips leading whitespace, reads the longest numeric
/// prefix and ignores the rest. `None` when there is no prefix, or it is NaN
/// or zero-width.
pub fn parse_float(cell: &str) -> Option<f64> {
    let s = cell.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let v: f64 = if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
        return Some(v);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| !v.is_nan())
}
