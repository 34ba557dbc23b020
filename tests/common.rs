use kmap_groupings::{BooleanGrid, Grouping};
use std::collections::HashSet;

/// Install a logger for the test binary, once.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generate a map from an input string.
///
/// # Expected Format
///  - Rows are separated by whitespace.
///  - Each row is a run of `0` and `1` characters, one per column.
///
/// # Panics
///  - If any character in a row is not `0` or `1`
///  - If the rows have different lengths
#[allow(dead_code)]
pub fn parse_map(input: &str) -> BooleanGrid {
    log::debug!("Parsing map input [{}].", input);

    let rows: Vec<Vec<u8>> = input
        .split_whitespace()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '0' => 0,
                    '1' => 1,
                    other => panic!("Unexpected character [{other}] in map input."),
                })
                .collect()
        })
        .collect();

    BooleanGrid::from_int_rows(rows).unwrap()
}

/// Build a map of the given dimensions from the low `width * height` bits of
/// `bits`, row-major, least significant bit first.
#[allow(dead_code)]
pub fn map_from_bits(bits: u64, width: usize, height: usize) -> BooleanGrid {
    let mut grid = BooleanGrid::new(width, height);

    for row in 0..height {
        for column in 0..width {
            if (bits >> (row * width + column)) & 1 == 1 {
                grid.set(row, column, true);
            }
        }
    }

    grid
}

/// Check that `groupings` is a valid cover of `grid`.
///
/// # Panics
///  - If a grouping does not span a power of two along both axes
///  - If a grouping covers a `false` cell
///  - If some `true` cell is left uncovered
#[allow(dead_code)]
pub fn assert_valid_cover(grid: &BooleanGrid, groupings: &[Grouping]) {
    let mut covered = HashSet::new();

    for grouping in groupings {
        assert!(
            grouping.row_span().is_power_of_two() && grouping.column_span().is_power_of_two(),
            "Grouping [{grouping}] is not a power-of-two rectangle"
        );

        for (row, column) in grouping.cells_covered() {
            assert_eq!(
                grid.get(row, column),
                Some(true),
                "Grouping [{grouping}] covers cell ({row}, {column}) which is not true"
            );
            covered.insert((row, column));
        }
    }

    let expected: HashSet<_> = grid.true_cells().collect();
    assert_eq!(covered, expected, "Groupings {groupings:?} do not cover the map");
}
