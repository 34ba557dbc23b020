use crate::{
    error::{Axis, RangeError},
    grid::BooleanGrid,
    grouping::{Grouping, MapSize},
    region_sum::RegionSumIndex,
    util,
};
use std::{cmp::Reverse, collections::BinaryHeap};

/// Solver that selects groupings covering every `true` cell of a Karnaugh
/// map.
///
/// The selection is greedy: larger groupings are always considered before
/// smaller ones, and within one size the grouping covering the most cells
/// that are still uncovered wins. The result covers the map and uses only
/// valid groupings, but it is not guaranteed to be the smallest possible
/// cover. Finding that is NP-hard in general.
#[derive(Debug, Clone, Default)]
pub struct GroupingSolver {
    require_power_of_two_dimensions: bool,
}

/// A candidate waiting in a size tier, ranked by how many still uncovered
/// cells it covered when it was last counted.
///
/// Ties go to the grouping with the smallest corners, which keeps the output
/// deterministic.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Ranked {
    uncovered: usize,
    grouping: Reverse<Grouping>,
}

impl GroupingSolver {
    /// Create a solver with the default settings.
    ///
    /// Map dimensions are conventionally powers of two, but this is not
    /// checked. An axis whose length is not a power of two simply has no
    /// grouping spanning all of it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject maps whose width or height is not a power of two.
    pub fn require_power_of_two_dimensions(mut self, required: bool) -> Self {
        self.require_power_of_two_dimensions = required;
        self
    }

    /// Return the groupings selected for `grid`, largest first.
    ///
    /// The caller's grid is left untouched. An all `false` grid produces no
    /// groupings.
    pub fn solve(&self, grid: &BooleanGrid) -> Result<Vec<Grouping>, RangeError> {
        if self.require_power_of_two_dimensions {
            Self::check_dimensions(grid)?;
        }

        if grid.is_all_false() {
            log::debug!(
                "Map of [{}x{}] has no true cells, nothing to group.",
                grid.width(),
                grid.height()
            );
            return Ok(Vec::new());
        }

        let candidates = Self::enumerate_candidates(grid);
        log::debug!(
            "Found [{}] solid candidates on a [{}x{}] map.",
            candidates.len(),
            grid.width(),
            grid.height()
        );

        Ok(Self::select(grid, candidates))
    }

    /// Same as [`solve`](Self::solve), for a map given as rows of `0`/`1`
    /// integers.
    pub fn solve_int_rows<R>(
        &self,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Vec<Grouping>, RangeError>
    where
        R: IntoIterator<Item = u8>,
    {
        let grid = BooleanGrid::from_int_rows(rows)?;
        self.solve(&grid)
    }

    fn check_dimensions(grid: &BooleanGrid) -> Result<(), RangeError> {
        for (axis, dimension) in [(Axis::Column, grid.width()), (Axis::Row, grid.height())] {
            if !dimension.is_power_of_two() {
                return Err(RangeError::DimensionNotPowerOfTwo { axis, dimension });
            }
        }

        Ok(())
    }

    /// Collect every power-of-two grouping made up only of `true` cells.
    ///
    /// A wrapping bound that stops one short of its start (e.g. rows `3..=2`
    /// on a map of height 4) covers the same cells as the full, non-wrapping
    /// span, so it is skipped rather than counted twice.
    fn enumerate_candidates(grid: &BooleanGrid) -> BinaryHeap<Grouping> {
        let map = MapSize::of(grid);
        let index = RegionSumIndex::new(grid);

        util::four_combination_iter([map.height, map.width, map.height, map.width], [0; 4])
            .filter(|[row0, col0, row1, col1]| *row0 != *row1 + 1 && *col0 != *col1 + 1)
            .filter_map(|[row0, col0, row1, col1]| {
                Grouping::candidate(map, (row0, col0), (row1, col1))
            })
            .filter(|grouping| index.sum_grouping(grouping) == grouping.size())
            .collect()
    }

    /// Run the tiered greedy cover over the candidates on a private copy of
    /// `grid`.
    fn select(grid: &BooleanGrid, mut candidates: BinaryHeap<Grouping>) -> Vec<Grouping> {
        let mut working = grid.clone();
        let mut remaining = working.count_true();
        let mut selected = Vec::new();

        while remaining > 0 {
            // Every true cell has at least a 1x1 candidate, and a candidate is
            // only dropped once all of its cells are covered.
            let Some(tier_size) = candidates.peek().map(Grouping::size) else {
                unreachable!("ran out of candidates with [{remaining}] cells left");
            };

            let mut tier = BinaryHeap::new();
            while let Some(grouping) = candidates.peek().copied() {
                if grouping.size() != tier_size {
                    break;
                }
                candidates.pop();

                tier.push(Ranked {
                    uncovered: grouping.count_true_unchecked(&working),
                    grouping: Reverse(grouping),
                });
            }

            log::debug!(
                "Selecting from [{}] candidates of size [{}], [{}] cells left.",
                tier.len(),
                tier_size,
                remaining
            );

            while remaining > 0 {
                let Some(Ranked {
                    uncovered,
                    grouping: Reverse(grouping),
                }) = tier.pop()
                else {
                    break;
                };

                // Counts only go down as cells are cleared, so a stale entry is
                // re-ranked rather than trusted.
                let current = grouping.count_true_unchecked(&working);
                if current == 0 {
                    log::trace!("Discarding [{}], already covered.", grouping);
                    continue;
                }
                if current < uncovered {
                    tier.push(Ranked {
                        uncovered: current,
                        grouping: Reverse(grouping),
                    });
                    continue;
                }

                log::trace!("Selecting [{}] covering [{}] new cells.", grouping, current);
                remaining -= grouping.clear_from(&mut working);
                selected.push(grouping);
            }
        }

        selected
    }
}

/// Select groupings for `grid` with a default [`GroupingSolver`].
pub fn find_groupings(grid: &BooleanGrid) -> Result<Vec<Grouping>, RangeError> {
    GroupingSolver::new().solve(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(map: (usize, usize), start: (usize, usize), end: (usize, usize)) -> Grouping {
        Grouping::new(MapSize::new(map.0, map.1), start, end).unwrap()
    }

    #[test]
    fn enumerates_each_footprint_once() {
        // A full 2x2 map: 4 singles, 2 horizontal pairs, 2 vertical pairs and
        // the whole map. Wrapped duplicates like columns 1..=0 are skipped.
        let grid = BooleanGrid::from([[true, true], [true, true]]);
        let mut candidates = GroupingSolver::enumerate_candidates(&grid).into_sorted_vec();
        candidates.reverse();

        assert_eq!(candidates.len(), 9);
        assert_eq!(candidates[0], g((2, 2), (0, 0), (1, 1)));
        assert_eq!(candidates.iter().filter(|c| c.size() == 2).count(), 4);
    }

    #[test]
    fn candidates_are_solid() {
        let grid = BooleanGrid::from([
            [true, false, false, true],
            [false, false, false, false],
            [false, false, false, false],
            [true, false, false, true],
        ]);
        let candidates = GroupingSolver::enumerate_candidates(&grid);

        assert!(candidates.iter().all(|c| c.count_true_unchecked(&grid) == c.size()));
        assert_eq!(candidates.peek(), Some(&g((4, 4), (3, 3), (0, 0))));
    }

    #[test]
    fn smaller_tier_covers_leftover_cells() {
        let grid = BooleanGrid::from([
            [false, false, false, false],
            [true, true, true, false],
            [true, true, false, false],
            [false, false, false, false],
        ]);
        let groupings = GroupingSolver::new().solve(&grid).unwrap();

        assert_eq!(groupings[0], g((4, 4), (1, 0), (2, 1)));
        assert_eq!(groupings.len(), 2);
        assert!(groupings[1].contains(1, 2));
        assert_eq!(groupings[1].size(), 2);
    }

    #[test]
    fn stale_counts_are_reranked() {
        // Both pairs start out covering two cells. Once the left pair is taken
        // the right one covers a single new cell and must still be selected.
        let grid = BooleanGrid::from([[true, true, true, false]]);
        let groupings = GroupingSolver::new().solve(&grid).unwrap();

        assert_eq!(
            groupings,
            vec![g((4, 1), (0, 0), (0, 1)), g((4, 1), (0, 1), (0, 2))]
        );
    }

    #[test]
    fn power_of_two_dimensions_are_optional() {
        let grid = BooleanGrid::from([[true, true, true]]);

        let groupings = GroupingSolver::new().solve(&grid).unwrap();
        assert_eq!(groupings.len(), 2);
        assert!(groupings.iter().all(|g| g.size() == 2));

        assert_eq!(
            GroupingSolver::new()
                .require_power_of_two_dimensions(true)
                .solve(&grid),
            Err(RangeError::DimensionNotPowerOfTwo {
                axis: Axis::Column,
                dimension: 3
            })
        );
    }

    #[test]
    fn empty_grid_has_no_groupings() {
        assert_eq!(find_groupings(&BooleanGrid::new(0, 0)), Ok(Vec::new()));
        assert_eq!(find_groupings(&BooleanGrid::new(8, 8)), Ok(Vec::new()));
    }
}
