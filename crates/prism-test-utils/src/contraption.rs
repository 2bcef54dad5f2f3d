//! Seeded random contraptions.
//!
//! Uses a ChaCha8 RNG so the same seed yields the same grid on every
//! platform.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

const OPTICS: [char; 4] = ['/', '\\', '|', '-'];

/// Builder for random tile grids.
#[derive(Clone, Debug)]
pub struct ContraptionBuilder {
    width: usize,
    height: usize,
    /// Per-mille chance a cell holds an optic instead of `.`.
    density: u32,
    seed: u64,
}

impl ContraptionBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            density: 150,
            seed: 0,
        }
    }

    /// Fraction of cells holding a mirror or splitter, in `[0, 1]`.
    pub fn density(mut self, density: f64) -> Self {
        self.density = (density.clamp(0.0, 1.0) * 1000.0).round() as u32;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Render the grid as text, one line per row.
    pub fn build(&self) -> String {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in 0..self.height {
            if row > 0 {
                out.push('\n');
            }
            for _ in 0..self.width {
                let roll = rng.next_u32();
                if roll % 1000 < self.density {
                    out.push(OPTICS[(roll / 1000) as usize % OPTICS.len()]);
                } else {
                    out.push('.');
                }
            }
        }
        out
    }
}

/// A `height x width` contraption with the given optic density.
pub fn random_contraption(width: usize, height: usize, density: f64, seed: u64) -> String {
    ContraptionBuilder::new(width, height)
        .density(density)
        .seed(seed)
        .build()
}
