use super::model::{DatasetSummary, Grid};

/// Compute the stats panel figures for a parsed grid.
///
/// `attribute_count` is the header width minus one, whether or not a class
/// column exists.
pub fn summarize(grid: &Grid, file_name: &str, size_bytes: u64) -> DatasetSummary {
    let class_count = grid
        .class_column()
        .map(|col| grid.unique_values(col).len())
        .unwrap_or(0);

    DatasetSummary {
        file_name: file_name.to_string(),
        case_count: grid.len(),
        attribute_count: grid.header().len().saturating_sub(1),
        class_count,
        size_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse;

    #[test]
    fn counts_cases_attributes_and_classes() {
        let grid = parse("class,x\nA,1\nB,2\nA,3");
        let summary = summarize(&grid, "demo.csv", 2048);
        assert_eq!(summary.case_count, 3);
        assert_eq!(summary.attribute_count, 1);
        assert_eq!(summary.class_count, 2);
        assert_eq!(summary.size_kb(), "2.00");
    }

    #[test]
    fn class_header_is_case_insensitive() {
        let grid = parse("x,Class\n1,A\n2,A\n3,B");
        assert_eq!(summarize(&grid, "f.csv", 0).class_count, 2);
    }

    #[test]
    fn no_class_column_means_zero_classes() {
        let grid = parse("x,y,z\n1,2,3\n4,5,6");
        let summary = summarize(&grid, "f.csv", 10);
        assert_eq!(summary.class_count, 0);
        assert_eq!(summary.attribute_count, 2);
    }

    #[test]
    fn empty_text_saturates_attribute_count() {
        let grid = parse("");
        let summary = summarize(&grid, "empty.csv", 0);
        assert_eq!(summary.case_count, 0);
        assert_eq!(summary.attribute_count, 0);
    }
}
