//! Prism: a 2D grid engine with multi-pointer traversal and a light-beam
//! simulator built on top of it.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Prism sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use prism::prelude::*;
//!
//! let sim = BeamSimulator::from_text(".|.\n...\n.-.").unwrap();
//! let one = sim.run_trial(EntryPoint::new(0, 0, Direction::Right)).unwrap();
//! assert_eq!(one.lit, 6);
//!
//! let report = sim.sweep(&SweepConfig::default()).unwrap();
//! assert!(report.best.lit >= one.lit);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `prism-core` | Directions, positions, IDs, `GridError` |
//! | [`grid`] | `prism-grid` | `Grid`, cells, annotations, pointer handles, growth |
//! | [`beam`] | `prism-beam` | Tiles, `BeamSimulator`, sweeps |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Directions, positions, IDs and the grid error type (`prism-core`).
pub use prism_core as types;

/// Grids, cells, and pointer handles (`prism-grid`).
///
/// [`grid::Grid`] owns its cells and a registry of pointers; obtain
/// [`grid::PointerRef`] / [`grid::PointerMut`] handles from it to move.
pub use prism_grid as grid;

/// Light-beam simulation (`prism-beam`).
///
/// [`beam::BeamSimulator`] runs trials; [`beam::sweep`] fans them out
/// over worker threads.
pub use prism_beam as beam;

/// Common imports for typical Prism usage.
///
/// ```rust
/// use prism::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use prism_core::{Diagonal, Direction, GridError, PointerId, Position};

    // Grid
    pub use prism_grid::{Annotations, Cell, EdgeBehavior, Grid, PointerMut, PointerRef};

    // Beam
    pub use prism_beam::{
        BeamError, BeamSimulator, EntryPoint, SweepConfig, SweepReport, Tile, TrialOutcome,
    };
}
