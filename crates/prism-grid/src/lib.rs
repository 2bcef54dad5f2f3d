//! Two-dimensional grids with multi-pointer traversal for Prism.
//!
//! A [`Grid`] owns its [`Cell`]s, a flat overlay of per-cell
//! [`Annotations`], and a registry of pointers (cursors). Pointers are
//! addressed by [`PointerId`](prism_core::PointerId) and operated on
//! through short-lived handles borrowed from the grid:
//!
//! - [`PointerRef`]: bounds checks, peeks, neighbours, distances
//! - [`PointerMut`]: movement, payload and annotation updates
//!
//! # Growth
//!
//! Grids are bounded by default. An infinite grid grows whenever a
//! pointer moves past an edge; growth toward row/column 0 re-stamps
//! every cell and shifts every *other* registered pointer so that what
//! each pointer is looking at never changes underneath it. See
//! [`GrowthDelta`].
//!
//! # Forking
//!
//! [`Grid::fork`] produces an independent grid with the same cell values
//! and cleared annotations. Cell storage is shared copy-on-write, so a
//! fork only allocates the annotation overlay.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod edge;
pub mod grid;
pub mod growth;
pub mod pointer;

#[cfg(test)]
pub(crate) mod compliance;

pub use cell::{Annotations, Cell, DirectionSet};
pub use edge::EdgeBehavior;
pub use grid::Grid;
pub use growth::GrowthDelta;
pub use pointer::{PointerMut, PointerRef};
