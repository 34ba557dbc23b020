//! Dense boolean grid holding the cells of a Karnaugh map.
//!
//! Cells are stored row-major in a single `Vec<bool>`, which keeps the grid
//! cheap to clone for the solver's working copy.

use crate::{error::RangeError, footprint::Rectangle, util};

/// A `width` × `height` matrix of boolean cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BooleanGrid {
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl BooleanGrid {
    #[inline]
    fn to_index(row: usize, column: usize, width: usize) -> usize {
        row * width + column
    }

    /// Create a grid of the given dimensions with every cell `false`.
    pub fn new(width: usize, height: usize) -> Self {
        BooleanGrid {
            width,
            height,
            data: vec![false; width * height],
        }
    }

    /// Create a grid from rows of boolean cells.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, RangeError>
    where
        R: IntoIterator<Item = bool>,
    {
        let mut width = None;
        let mut height = 0;
        let mut data = Vec::new();

        for (row, cells) in rows.into_iter().enumerate() {
            let before = data.len();
            data.extend(cells);
            let found = data.len() - before;

            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(RangeError::RaggedRows {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            // A list of empty rows has no cells at all.
            height = 0;
        }

        Ok(BooleanGrid {
            width,
            height,
            data,
        })
    }

    /// Create a grid from rows of `0`/`1` integers.
    ///
    /// Any value other than `0` or `1` is rejected.
    pub fn from_int_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, RangeError>
    where
        R: IntoIterator<Item = u8>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .into_iter()
                    .enumerate()
                    .map(|(column, value)| match value {
                        0 => Ok(false),
                        1 => Ok(true),
                        value => Err(RangeError::InvalidCellValue { row, column, value }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Return the value of a cell, or `None` if it lies outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        if row < self.height && column < self.width {
            Some(self.data[Self::to_index(row, column, self.width)])
        } else {
            None
        }
    }

    /// Set the value of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the grid.
    pub fn set(&mut self, row: usize, column: usize, value: bool) {
        assert!(
            row < self.height && column < self.width,
            "Cell ({row}, {column}) is outside of the {}x{} grid",
            self.width,
            self.height
        );

        self.data[Self::to_index(row, column, self.width)] = value;
    }

    /// Number of `true` cells in the whole grid.
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|cell| **cell).count()
    }

    /// Return true if no cell is `true`.
    pub fn is_all_false(&self) -> bool {
        !self.data.iter().any(|cell| *cell)
    }

    /// Return an iterator over the coordinates of every `true` cell, in
    /// row-major order.
    pub fn true_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        util::two_combination_iter([self.height, self.width], [0, 0])
            .map(|[row, column]| (row, column))
            .filter(move |(row, column)| self.data[Self::to_index(*row, *column, self.width)])
    }

    /// Number of `true` cells inside a rectangle that lies within the grid.
    pub(crate) fn count_true_in(&self, rect: &Rectangle) -> usize {
        rect.cells()
            .filter(|(row, column)| self.data[Self::to_index(*row, *column, self.width)])
            .count()
    }

    /// Set every cell of a rectangle that lies within the grid to `false`,
    /// returning how many were `true` before.
    pub(crate) fn clear(&mut self, rect: &Rectangle) -> usize {
        let mut cleared = 0;

        for (row, column) in rect.cells() {
            let cell = &mut self.data[Self::to_index(row, column, self.width)];
            if *cell {
                *cell = false;
                cleared += 1;
            }
        }

        cleared
    }
}

impl<const W: usize, const H: usize> From<[[bool; W]; H]> for BooleanGrid {
    fn from(arr: [[bool; W]; H]) -> Self {
        let mut data = Vec::with_capacity(W * H);

        for row in arr {
            data.extend_from_slice(&row);
        }

        if W == 0 {
            return BooleanGrid::default();
        }

        BooleanGrid {
            width: W,
            height: H,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = BooleanGrid::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();

        assert_eq!(
            err,
            RangeError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn from_int_rows_matches_bool_rows() {
        let ints = BooleanGrid::from_int_rows(vec![vec![0, 1], vec![1, 1]]).unwrap();
        let bools = BooleanGrid::from([[false, true], [true, true]]);

        assert_eq!(ints, bools);
        assert_eq!(ints.width(), 2);
        assert_eq!(ints.height(), 2);
        assert_eq!(ints.count_true(), 3);
    }

    #[test]
    fn from_int_rows_rejects_other_values() {
        let err = BooleanGrid::from_int_rows(vec![vec![0, 0], vec![0, 2]]).unwrap_err();

        assert_eq!(
            err,
            RangeError::InvalidCellValue {
                row: 1,
                column: 1,
                value: 2
            }
        );
    }

    #[test]
    fn empty_rows_make_an_empty_grid() {
        let grid = BooleanGrid::from_rows(vec![Vec::<bool>::new(), Vec::new()]).unwrap();

        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert!(grid.is_all_false());
    }

    #[test]
    fn get_set_and_true_cells() {
        let mut grid = BooleanGrid::new(4, 2);
        grid.set(1, 3, true);
        grid.set(0, 0, true);

        assert_eq!(grid.get(1, 3), Some(true));
        assert_eq!(grid.get(1, 2), Some(false));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.true_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 3)]);
    }

    #[test]
    fn clear_reports_only_previously_true_cells() {
        let mut grid = BooleanGrid::from([[true, true], [false, true]]);
        let rect = Rectangle {
            rows: 0..=1,
            columns: 1..=1,
        };

        assert_eq!(grid.count_true_in(&rect), 2);
        assert_eq!(grid.clear(&rect), 2);
        assert_eq!(grid.clear(&rect), 0);
        assert_eq!(grid.count_true(), 1);
    }
}
