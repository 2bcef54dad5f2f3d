//! Light-beam simulation for Prism.
//!
//! A [`BeamSimulator`] holds an immutable template grid of [`Tile`]s.
//! Each trial forks the template, injects one beam at an [`EntryPoint`],
//! and runs rounds until quiescence: every round marks each active
//! beam-head's cell, turns or splits it per the tile, then advances every
//! head one cell. Heads leaving the grid or re-entering a cell in a
//! direction already processed are retired. The trial result is the
//! number of lit cells.
//!
//! [`sweep`] runs one trial per entry on a worker pool and keeps the
//! best.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod entry;
pub mod error;
pub mod metrics;
pub mod simulator;
pub mod sweep;
pub mod tile;

pub use config::{ConfigError, SweepConfig};
pub use entry::{boundary_entries, EntryPoint, ParseEntryError};
pub use error::BeamError;
pub use metrics::TrialMetrics;
pub use simulator::{BeamSimulator, TrialOutcome};
pub use sweep::{sweep, SweepReport};
pub use tile::{Tile, Transition};
