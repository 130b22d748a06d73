use std::path::Path;

use anyhow::{Context, Result};

use super::model::Dataset;

/// Extensions offered by the file dialog.
pub const CSV_EXTENSIONS: &[&str] = &["csv", "txt"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a CSV file into a fresh [`Dataset`].
///
/// Bytes are decoded as UTF-8; invalid sequences are replaced rather than
/// rejected. The summary size is the on-disk byte count.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let dataset = Dataset::from_text(&text, &file_name, bytes.len() as u64);

    let ragged = dataset.grid.ragged_rows();
    if ragged > 0 {
        log::warn!(
            "{file_name}: {ragged} row(s) differ in width from the header; missing cells read as empty"
        );
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_grid_and_summary_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "class,x\nA,1\nB,2\nA,3\n").unwrap();

        let dataset = load_file(file.path()).unwrap();
        let summary = &dataset.summary;
        assert_eq!(summary.case_count, 3);
        assert_eq!(summary.attribute_count, 1);
        assert_eq!(summary.class_count, 2);
        assert_eq!(summary.size_bytes, 20);
        assert!(summary.file_name.ends_with(".csv"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"class\n\xffA\n").unwrap();

        let dataset = load_file(file.path()).unwrap();
        assert_eq!(dataset.grid.data_rows()[0], ["\u{fffd}A"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.csv"));
    }
}
