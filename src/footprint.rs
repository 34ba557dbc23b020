//! Splitting a footprint that may wrap around the edges of a map into plain,
//! non-wrapping rectangles.
//!
//! An axis bound `start..=end` with `start > end` continues past the last
//! index and resumes at `0`. Along one axis that is at most two ordinary
//! ranges, so a rectangle wrapping on both axes is at most four ordinary
//! rectangles. Everything that needs the cells of a footprint (cell
//! enumeration, region sums, clearing the working map) goes through
//! [`rectangles`].

use std::ops::RangeInclusive;

/// A closed, non-wrapping rectangle of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Rows covered, top to bottom.
    pub rows: RangeInclusive<usize>,
    /// Columns covered, left to right.
    pub columns: RangeInclusive<usize>,
}

impl Rectangle {
    /// Number of cells inside the rectangle.
    pub fn cell_count(&self) -> usize {
        range_len(&self.rows) * range_len(&self.columns)
    }

    /// Return the `(row, column)` pairs of this rectangle in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + Clone {
        let columns = self.columns.clone();

        self.rows
            .clone()
            .flat_map(move |row| columns.clone().map(move |column| (row, column)))
    }
}

fn range_len(range: &RangeInclusive<usize>) -> usize {
    if range.is_empty() {
        0
    } else {
        range.end() - range.start() + 1
    }
}

/// Number of indices covered by `start..=end` on an axis of length
/// `dimension`, counting wraparound.
#[inline]
pub fn span(start: usize, end: usize, dimension: usize) -> usize {
    if start <= end {
        end - start + 1
    } else {
        dimension - start + end + 1
    }
}

/// The one or two ordinary ranges covered by `start..=end` on an axis of
/// length `dimension`.
///
/// A wrapping bound yields the tail of the axis first, then the head, so the
/// ranges follow the footprint in the direction it is walked.
pub fn axis_ranges(
    start: usize,
    end: usize,
    dimension: usize,
) -> impl Iterator<Item = RangeInclusive<usize>> + Clone {
    let ranges = if start <= end {
        [Some(start..=end), None]
    } else {
        [Some(start..=dimension - 1), Some(0..=end)]
    };

    ranges.into_iter().flatten()
}

/// Decompose the footprint from `start` to `end` (both `(row, column)`) on a
/// `width` × `height` map into between one and four non-wrapping rectangles.
pub fn rectangles(
    start: (usize, usize),
    end: (usize, usize),
    width: usize,
    height: usize,
) -> impl Iterator<Item = Rectangle> + Clone {
    let columns = axis_ranges(start.1, end.1, width);

    axis_ranges(start.0, end.0, height).flat_map(move |rows| {
        columns.clone().map(move |columns| Rectangle {
            rows: rows.clone(),
            columns,
        })
    })
}
