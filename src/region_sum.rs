//! Summed-area table answering "how many `true` cells are in this
//! rectangle" in constant time.

use crate::{footprint::Rectangle, grid::BooleanGrid, grouping::Grouping};

/// Prefix sums over a [`BooleanGrid`].
///
/// The table has one extra leading row and column of zeros, so entry
/// `(i + 1, j + 1)` holds the number of `true` cells in `[0, i] × [0, j]` and
/// the edges need no special casing.
#[derive(Debug, Clone)]
pub struct RegionSumIndex {
    width: usize,
    height: usize,
    sums: Vec<usize>,
}

impl RegionSumIndex {
    #[inline]
    fn at(&self, row: usize, column: usize) -> usize {
        self.sums[row * (self.width + 1) + column]
    }

    /// Build the table for `grid` in `O(width × height)`.
    pub fn new(grid: &BooleanGrid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let stride = width + 1;
        let mut sums = vec![0; stride * (height + 1)];

        for row in 0..height {
            for column in 0..width {
                let cell = usize::from(grid.get(row, column).unwrap_or(false));

                sums[(row + 1) * stride + column + 1] = sums[row * stride + column + 1]
                    + sums[(row + 1) * stride + column]
                    - sums[row * stride + column]
                    + cell;
            }
        }

        RegionSumIndex {
            width,
            height,
            sums,
        }
    }

    /// Number of `true` cells in the closed rectangle `[row0, row1] × [col0,
    /// col1]`.
    ///
    /// An index built from an empty grid always returns `0`.
    ///
    /// # Panics
    ///
    /// Panics if the rectangle wraps or leaves the grid, i.e. unless `row0 <=
    /// row1 < height` and `col0 <= col1 < width`. Split wrapping rectangles
    /// first, as [`sum_grouping`](Self::sum_grouping) does.
    pub fn sum(&self, row0: usize, col0: usize, row1: usize, col1: usize) -> usize {
        if self.width == 0 || self.height == 0 {
            return 0;
        }

        assert!(
            row0 <= row1 && row1 < self.height && col0 <= col1 && col1 < self.width,
            "Rectangle [{row0}, {row1}]x[{col0}, {col1}] is not a non-wrapping rectangle \
             inside the {}x{} grid",
            self.width,
            self.height
        );

        // Inclusion-exclusion, reordered so the intermediate never underflows.
        self.at(row1 + 1, col1 + 1) + self.at(row0, col0)
            - self.at(row0, col1 + 1)
            - self.at(row1 + 1, col0)
    }

    /// Number of `true` cells inside a non-wrapping rectangle.
    pub fn sum_rectangle(&self, rect: &Rectangle) -> usize {
        self.sum(
            *rect.rows.start(),
            *rect.columns.start(),
            *rect.rows.end(),
            *rect.columns.end(),
        )
    }

    /// Number of `true` cells inside a grouping, following its wraparound.
    pub fn sum_grouping(&self, grouping: &Grouping) -> usize {
        grouping
            .rectangles()
            .map(|rect| self.sum_rectangle(&rect))
            .sum()
    }
}
