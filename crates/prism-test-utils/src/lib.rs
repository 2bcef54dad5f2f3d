//! Test fixtures for Prism development.
//!
//! Everything here is plain text so any crate can feed it to its own
//! parser: the reference 10x10 contraption, open floors, mirror loops,
//! and a seeded random contraption generator for property tests and
//! benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod contraption;

pub use contraption::{random_contraption, ContraptionBuilder};

/// The reference 10x10 contraption.
///
/// A beam entering at `(0, 0)` heading right lights 46 cells; the best
/// boundary entry, `(0, 3)` heading down, lights 51.
pub const SAMPLE_CONTRAPTION: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";

/// Lit cells for [`SAMPLE_CONTRAPTION`] entered at `(0, 0)` heading right.
pub const SAMPLE_LIT_FROM_ORIGIN: usize = 46;

/// Best lit count over every boundary entry of [`SAMPLE_CONTRAPTION`].
pub const SAMPLE_BEST: usize = 51;

/// Energised pattern for [`SAMPLE_CONTRAPTION`] entered at `(0, 0)`
/// heading right.
pub const SAMPLE_LIT_MAP: &str = "\
######....
.#...#....
.#...#####
.#...##...
.#...##...
.#...##...
.#..####..
########..
.#######..
.#...#.#..";

/// Four `/` mirrors in a 2x2 block.
pub const MIRROR_LOOP: &str = "//\n//";

/// A 3x3 ring: a splitter in the bottom-left corner feeds a beam that
/// circles back into its own trail.
pub const CLOSED_RING: &str = "/.\\\n...\n-./";

/// An `n x n` grid of empty tiles.
pub fn open_floor(n: usize) -> String {
    let row = ".".repeat(n);
    vec![row; n].join("\n")
}

/// An `n x n` grid with a splitter at every cell of the main diagonal,
/// alternating `|` and `-`.
pub fn splitter_diagonal(n: usize) -> String {
    (0..n)
        .map(|r| {
            (0..n)
                .map(|c| match (r == c, r % 2) {
                    (true, 0) => '|',
                    (true, _) => '-',
                    _ => '.',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
