#![no_main]

use kmap_groupings::{find_groupings, BooleanGrid};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Debug)]
struct SmallMapInput {
    grid: BooleanGrid,
}

impl<'a> arbitrary::Arbitrary<'a> for SmallMapInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Up to 8x8, power-of-two sides.
        let width = 1 << u.int_in_range(0..=3u32)?;
        let height = 1 << u.int_in_range(0..=3u32)?;

        let mut grid = BooleanGrid::new(width, height);
        for row in 0..height {
            for column in 0..width {
                if u.arbitrary::<bool>()? {
                    grid.set(row, column, true);
                }
            }
        }

        Ok(SmallMapInput { grid })
    }
}

fuzz_target!(|data: SmallMapInput| {
    let groupings = find_groupings(&data.grid).unwrap();

    let mut covered = HashSet::new();
    for grouping in &groupings {
        assert!(grouping.is_valid_power_of_two_span());
        for (row, column) in grouping.cells_covered() {
            assert_eq!(data.grid.get(row, column), Some(true));
            covered.insert((row, column));
        }
    }

    let expected: HashSet<_> = data.grid.true_cells().collect();
    assert_eq!(covered, expected);
});
