//! Benchmark profiles for the Prism beam simulator.
//!
//! - [`reference_profile`]: 110x110 contraption (~12K cells), the size of a
//!   typical puzzle input
//! - [`stress_profile`]: 256x256 contraption (~65K cells)
//! - [`walker_grid`]: an infinite grid with `n` registered pointers, for
//!   growth benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use prism_beam::{BeamError, BeamSimulator};
use prism_core::GridError;
use prism_grid::Grid;
use prism_test_utils::random_contraption;

/// Optic density used by both profiles.
pub const DENSITY: f64 = 0.12;

/// Text of the reference contraption.
pub fn reference_text(seed: u64) -> String {
    random_contraption(110, 110, DENSITY, seed)
}

/// Build the reference benchmark profile: 110x110 contraption.
pub fn reference_profile(seed: u64) -> Result<BeamSimulator, BeamError> {
    BeamSimulator::from_text(&reference_text(seed))
}

/// Build the stress benchmark profile: 256x256 contraption.
pub fn stress_profile(seed: u64) -> Result<BeamSimulator, BeamError> {
    BeamSimulator::from_text(&random_contraption(256, 256, DENSITY, seed))
}

/// An infinite `side x side` floor with `n` pointers spread along its
/// main diagonal.
pub fn walker_grid(side: usize, n: usize) -> Result<Grid<usize>, GridError> {
    let mut grid = Grid::new(side, side, '.')?.infinite('.');
    for i in 0..n {
        let at = i % side;
        grid.spawn_pointer(i, at, at)?;
    }
    Ok(grid)
}
