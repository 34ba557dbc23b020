//! A single power-of-two grouping on a Karnaugh map.
//!
//! A grouping is given by its top-left and bottom-right corners. When a start
//! coordinate is greater than the matching end coordinate the grouping wraps
//! around that edge of the map, e.g. columns `6..=1` on an 8 wide map cover
//! columns `{6, 7, 0, 1}`.

use crate::{
    error::{Axis, GroupingError, RangeError, SizeError},
    footprint::{self, Rectangle},
    grid::BooleanGrid,
};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// Dimensions of the map a [`Grouping`] is placed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MapSize {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl MapSize {
    /// Create a new `MapSize`.
    pub fn new(width: usize, height: usize) -> Self {
        MapSize { width, height }
    }

    /// Return the dimensions of an existing grid.
    pub fn of(grid: &BooleanGrid) -> Self {
        MapSize {
            width: grid.width(),
            height: grid.height(),
        }
    }
}

/// A rectangle of `2^m` × `2^n` cells on a Karnaugh map, possibly wrapping
/// around the map's edges.
///
/// Two groupings compare equal when their corners match, regardless of the
/// map they were built for. Groupings are ordered by [`size`](Self::size),
/// smallest first, with ties broken by `(start_row, start_column, end_row,
/// end_column)`. The ordering is only meaningful between groupings on the
/// same map.
#[derive(Debug, Copy, Clone)]
pub struct Grouping {
    start_row: usize,
    end_row: usize,
    start_column: usize,
    end_column: usize,
    map: MapSize,
}

impl Grouping {
    /// Create a new grouping from its `start` and `end` corners, each given as
    /// `(row, column)`.
    ///
    /// Fails with [`RangeError`] if the map is empty or a corner lies outside
    /// of it, and with [`SizeError`] if the covered rectangle is not a power of
    /// two along both axes.
    pub fn new(
        map: MapSize,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Result<Self, GroupingError> {
        if map.width == 0 || map.height == 0 {
            return Err(RangeError::EmptyMap {
                width: map.width,
                height: map.height,
            }
            .into());
        }

        for (axis, value, dimension) in [
            (Axis::Row, start.0, map.height),
            (Axis::Column, start.1, map.width),
            (Axis::Row, end.0, map.height),
            (Axis::Column, end.1, map.width),
        ] {
            if value >= dimension {
                return Err(RangeError::CoordinateOutOfRange {
                    axis,
                    value,
                    dimension,
                }
                .into());
            }
        }

        Self::candidate(map, start, end).ok_or_else(|| {
            SizeError {
                row_span: footprint::span(start.0, end.0, map.height),
                column_span: footprint::span(start.1, end.1, map.width),
            }
            .into()
        })
    }

    /// Create a grouping if its span is a power of two along both axes.
    ///
    /// This is the cheap path used while enumerating candidates: nothing is
    /// allocated for a rejected rectangle. Corners outside of `map` also give
    /// `None`; use [`new`](Self::new) to find out why a rectangle was rejected.
    #[inline]
    pub fn candidate(map: MapSize, start: (usize, usize), end: (usize, usize)) -> Option<Self> {
        if Self::has_power_of_two_span(map, start, end) {
            Some(Grouping {
                start_row: start.0,
                end_row: end.0,
                start_column: start.1,
                end_column: end.1,
                map,
            })
        } else {
            None
        }
    }

    /// Return true if the rectangle from `start` to `end` spans a power of two
    /// number of rows and a power of two number of columns.
    ///
    /// Returns false if either corner lies outside of `map`.
    #[inline]
    pub fn has_power_of_two_span(map: MapSize, start: (usize, usize), end: (usize, usize)) -> bool {
        Self::corners_within(map, start, end)
            && footprint::span(start.0, end.0, map.height).is_power_of_two()
            && footprint::span(start.1, end.1, map.width).is_power_of_two()
    }

    #[inline]
    fn corners_within(map: MapSize, start: (usize, usize), end: (usize, usize)) -> bool {
        start.0 < map.height && end.0 < map.height && start.1 < map.width && end.1 < map.width
    }

    /// Return true if both spans of this grouping are powers of two.
    ///
    /// Every grouping built through [`new`](Self::new) or
    /// [`candidate`](Self::candidate) satisfies this.
    pub fn is_valid_power_of_two_span(&self) -> bool {
        self.row_span().is_power_of_two() && self.column_span().is_power_of_two()
    }

    /// Row of the top edge.
    pub fn start_row(&self) -> usize {
        self.start_row
    }

    /// Row of the bottom edge.
    pub fn end_row(&self) -> usize {
        self.end_row
    }

    /// Column of the left edge.
    pub fn start_column(&self) -> usize {
        self.start_column
    }

    /// Column of the right edge.
    pub fn end_column(&self) -> usize {
        self.end_column
    }

    /// Dimensions of the map this grouping was built for.
    pub fn map_size(&self) -> MapSize {
        self.map
    }

    /// Return true if the grouping wraps from the bottom edge to the top.
    pub fn wraps_rows(&self) -> bool {
        self.start_row > self.end_row
    }

    /// Return true if the grouping wraps from the right edge to the left.
    pub fn wraps_columns(&self) -> bool {
        self.start_column > self.end_column
    }

    /// Number of rows covered.
    pub fn row_span(&self) -> usize {
        footprint::span(self.start_row, self.end_row, self.map.height)
    }

    /// Number of columns covered.
    pub fn column_span(&self) -> usize {
        footprint::span(self.start_column, self.end_column, self.map.width)
    }

    /// Number of cells covered.
    pub fn size(&self) -> usize {
        self.row_span() * self.column_span()
    }

    /// The non-wrapping rectangles that together make up this grouping.
    ///
    /// There is one rectangle if the grouping does not wrap, two if it wraps
    /// along one axis, and four if it wraps along both.
    pub fn rectangles(&self) -> impl Iterator<Item = Rectangle> + Clone {
        footprint::rectangles(
            (self.start_row, self.start_column),
            (self.end_row, self.end_column),
            self.map.width,
            self.map.height,
        )
    }

    /// Return an iterator over the `(row, column)` coordinates covered by this
    /// grouping.
    ///
    /// Each of the [`rectangles`](Self::rectangles) is visited in turn, rows
    /// first. The iterator is lazy and can be cloned to restart it.
    pub fn cells_covered(&self) -> impl Iterator<Item = (usize, usize)> + Clone {
        self.rectangles().flat_map(|rect| rect.cells())
    }

    /// Return true if the cell lies inside this grouping.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        fn within(index: usize, start: usize, end: usize) -> bool {
            if start <= end {
                start <= index && index <= end
            } else {
                index >= start || index <= end
            }
        }

        row < self.map.height
            && column < self.map.width
            && within(row, self.start_row, self.end_row)
            && within(column, self.start_column, self.end_column)
    }

    /// Count the `true` cells of `grid` that fall inside this grouping.
    ///
    /// The grid must be at least as large as the map this grouping was built
    /// for.
    pub fn count_true_cells(&self, grid: &BooleanGrid) -> Result<usize, RangeError> {
        if grid.width() < self.map.width || grid.height() < self.map.height {
            return Err(RangeError::GridTooSmall {
                grid_width: grid.width(),
                grid_height: grid.height(),
                map_width: self.map.width,
                map_height: self.map.height,
            });
        }

        Ok(self.count_true_unchecked(grid))
    }

    /// Same as [`count_true_cells`](Self::count_true_cells), for a grid known
    /// to be large enough.
    pub(crate) fn count_true_unchecked(&self, grid: &BooleanGrid) -> usize {
        self.rectangles()
            .map(|rect| grid.count_true_in(&rect))
            .sum()
    }

    /// Set every cell of this grouping to `false` in `grid`, returning how
    /// many cells were `true`.
    pub(crate) fn clear_from(&self, grid: &mut BooleanGrid) -> usize {
        self.rectangles().map(|rect| grid.clear(&rect)).sum()
    }

    fn corners(&self) -> (usize, usize, usize, usize) {
        (
            self.start_row,
            self.start_column,
            self.end_row,
            self.end_column,
        )
    }
}

impl PartialEq for Grouping {
    fn eq(&self, other: &Self) -> bool {
        self.corners() == other.corners()
    }
}

impl Eq for Grouping {}

impl Hash for Grouping {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.corners().hash(state);
    }
}

impl PartialOrd for Grouping {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Grouping {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size()
            .cmp(&other.size())
            .then_with(|| self.corners().cmp(&other.corners()))
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) ~ ({}, {})",
            self.start_row, self.start_column, self.end_row, self.end_column
        )
    }
}
