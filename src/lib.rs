#![deny(missing_docs)]

//! Find power-of-two groupings covering the `true` cells of a
//! [Karnaugh map](https://en.wikipedia.org/wiki/Karnaugh_map).
//!
//! A Karnaugh map behaves like a torus: its left and right edges are
//! adjacent, and so are its top and bottom edges. A [`Grouping`] is a
//! rectangle of `2^m` × `2^n` cells, which may wrap across those edges, made
//! up only of `true` cells. Each grouping corresponds to one product term of
//! a simplified boolean expression.
//!
//! [`GroupingSolver`] enumerates every such grouping, using a
//! [`RegionSumIndex`] to test each candidate in constant time, and then
//! greedily picks large groupings until every `true` cell is covered. The
//! greedy pass is a heuristic: the cover it returns is valid but not
//! guaranteed to be minimal.
//!
//! ```
//! use kmap_groupings::{find_groupings, BooleanGrid, Grouping, MapSize};
//!
//! let grid = BooleanGrid::from([
//!     [true, true],
//!     [false, false],
//!     [false, false],
//!     [true, true],
//! ]);
//!
//! let groupings = find_groupings(&grid).unwrap();
//! let map = MapSize::new(2, 4);
//! assert_eq!(groupings, vec![Grouping::new(map, (3, 0), (0, 1)).unwrap()]);
//! ```

pub mod error;
pub mod footprint;
pub(crate) mod grid;
pub(crate) mod grouping;
pub(crate) mod region_sum;
pub(crate) mod solver;
pub(crate) mod util;

pub use error::{Axis, GroupingError, RangeError, SizeError};
pub use footprint::Rectangle;
pub use grid::BooleanGrid;
pub use grouping::{Grouping, MapSize};
pub use region_sum::RegionSumIndex;
pub use solver::{find_groupings, GroupingSolver};
