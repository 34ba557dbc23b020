//! Errors reported for malformed maps and groupings.

use std::fmt;
use thiserror::Error;

/// One of the two axes of a Karnaugh map.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The vertical axis, indexed by row.
    Row,
    /// The horizontal axis, indexed by column.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Malformed input supplied by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// A coordinate does not fit inside the map.
    #[error("{axis} coordinate {value} is out of range for a map dimension of {dimension}")]
    CoordinateOutOfRange {
        /// The axis the coordinate belongs to.
        axis: Axis,
        /// The offending coordinate.
        value: usize,
        /// The size of the map along `axis`.
        dimension: usize,
    },

    /// A map was declared with a zero width or height.
    #[error("map dimensions must be non-zero, got {width}x{height}")]
    EmptyMap {
        /// The declared width.
        width: usize,
        /// The declared height.
        height: usize,
    },

    /// A grid is smaller than the map a grouping was built for.
    #[error(
        "grid of {grid_width}x{grid_height} cells is smaller than the \
         {map_width}x{map_height} map of the grouping"
    )]
    GridTooSmall {
        /// Width of the grid that was supplied.
        grid_width: usize,
        /// Height of the grid that was supplied.
        grid_height: usize,
        /// Width of the grouping's map.
        map_width: usize,
        /// Height of the grouping's map.
        map_height: usize,
    },

    /// The rows of a grid do not all have the same length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Index of the first row with a different length.
        row: usize,
        /// The length of the first row.
        expected: usize,
        /// The length of row `row`.
        found: usize,
    },

    /// An integer grid contains something other than 0 or 1.
    #[error("cell ({row}, {column}) holds {value}, expected 0 or 1")]
    InvalidCellValue {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        column: usize,
        /// The value found in the cell.
        value: u8,
    },

    /// A map dimension is not a power of two while the solver requires it.
    #[error("{axis} dimension {dimension} is not a power of two")]
    DimensionNotPowerOfTwo {
        /// The axis with the offending dimension.
        axis: Axis,
        /// The offending dimension.
        dimension: usize,
    },
}

/// A rectangle whose spans are not both powers of two.
///
/// This is an expected outcome while enumerating candidates and is never
/// raised from inside the solver; see [`Grouping::candidate`].
///
/// [`Grouping::candidate`]: crate::Grouping::candidate
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("grouping spans {row_span}x{column_span} cells, which is not a power-of-two rectangle")]
pub struct SizeError {
    /// Number of rows covered, counting wraparound.
    pub row_span: usize,
    /// Number of columns covered, counting wraparound.
    pub column_span: usize,
}

/// Reasons a [`Grouping`](crate::Grouping) could not be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupingError {
    /// The coordinates or map dimensions are malformed.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// The coordinates are valid, but do not describe a power-of-two
    /// rectangle.
    #[error(transparent)]
    Size(#[from] SizeError),
}
