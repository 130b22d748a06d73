use std::collections::HashSet;
use std::fmt;

/// Header (lowercased) that marks the categorical column.
pub const CLASS_HEADER: &str = "class";

// ---------------------------------------------------------------------------
// Grid – the parsed CSV text
// ---------------------------------------------------------------------------

/// Rows of raw string cells; row 0 is the header.
///
/// Rows are not guaranteed to have the same length. Reads past the end of a
/// short row go through [`Grid::cell`], which pads with the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Grid { rows }
    }

    /// The header row (empty for an empty grid).
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every row after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.data_rows().len()
    }

    /// Cell of a data row; missing cells read as `""`.
    pub fn cell(row: &[String], column: usize) -> &str {
        row.get(column).map(String::as_str).unwrap_or("")
    }

    /// First column whose header lowercases to `"class"`.
    pub fn class_column(&self) -> Option<usize> {
        self.header()
            .iter()
            .position(|h| h.to_lowercase() == CLASS_HEADER)
    }

    /// Distinct values of `column` across the data rows, in first-occurrence order.
    pub fn unique_values(&self, column: usize) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut unique = Vec::new();
        for row in self.data_rows() {
            let value = Grid::cell(row, column);
            if seen.insert(value) {
                unique.push(value.to_string());
            }
        }
        unique
    }

    /// Number of data rows whose width differs from the header's.
    pub fn ragged_rows(&self) -> usize {
        let width = self.header().len();
        self.data_rows()
            .iter()
            .filter(|row| row.len() != width)
            .count()
    }
}

// ---------------------------------------------------------------------------
// DatasetSummary – the stats panel snapshot
// ---------------------------------------------------------------------------

/// Descriptive statistics for a loaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub file_name: String,
    pub case_count: usize,
    /// Header width minus one; one column is assumed to be the class column.
    pub attribute_count: usize,
    /// Distinct class labels, or 0 without a class column.
    pub class_count: usize,
    pub size_bytes: u64,
}

impl DatasetSummary {
    /// File size in KB with two decimals.
    pub fn size_kb(&self) -> String {
        format!("{:.2}", self.size_bytes as f64 / 1024.0)
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Currently loaded dataset: {} | {} cases | {} attributes | {} unique classes | {} KB",
            self.file_name,
            self.case_count,
            self.attribute_count,
            self.class_count,
            self.size_kb()
        )
    }
}

// ---------------------------------------------------------------------------
// Dataset – the session object
// ---------------------------------------------------------------------------

/// A loaded file: its grid plus the summary derived from it.
///
/// Replaced as a whole on every load; nothing mutates it in place.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub grid: Grid,
    pub summary: DatasetSummary,
}

impl Dataset {
    /// Parse `text` and summarize it under `file_name`.
    pub fn from_text(text: &str, file_name: &str, size_bytes: u64) -> Self {
        let grid = super::parser::parse(text);
        let summary = super::summary::summarize(&grid, file_name, size_bytes);
        Dataset { grid, summary }
    }
}
