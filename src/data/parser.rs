use super::model::Grid;

/// Split CSV text into a [`Grid`].
///
/// The whole input is trimmed, then split on `'\n'` and each line on `','`.
/// No quoting, no per-cell trimming, no type inference. Ragged input comes
/// back ragged.
pub fn parse(text: &str) -> Grid {
    let rows = text
        .trim()
        .split('\n')
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();
    Grid::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_yields_header_plus_data_rows() {
        let grid = parse("a,b,class\n1,2,x\n3,4,y\n");
        assert_eq!(grid.header(), ["a", "b", "class"]);
        assert!(grid.data_rows().iter().all(|r| r.len() == 3));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn trailing_blank_lines_are_dropped() {
        let grid = parse("a,b\n1,2\n\n\n");
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn cells_are_not_trimmed_or_unquoted() {
        let grid = parse("a, b\n\"1,5\",x");
        assert_eq!(grid.header(), ["a", " b"]);
        assert_eq!(grid.data_rows()[0], ["\"1", "5\"", "x"]);
    }

    #[test]
    fn carriage_returns_stay_in_the_last_cell() {
        let grid = parse("x,class\r\n1,A\r\n2,B");
        assert_eq!(grid.header(), ["x", "class\r"]);
        assert_eq!(grid.data_rows()[1], ["2", "B"]);
    }

    #[test]
    fn empty_input_is_one_empty_cell() {
        let grid = parse("  \n ");
        assert_eq!(grid.header(), [""]);
        assert_eq!(grid.len(), 0);
    }
}
