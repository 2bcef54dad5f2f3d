//! Sweep configuration, validation, and error types.
//!
//! [`SweepConfig`] controls how [`sweep`](crate::sweep::sweep) fans trials
//! out: how many worker threads, and which entry points to try.
//! [`validate()`](SweepConfig::validate) checks it against a grid's
//! dimensions before any thread is spawned.

use crate::entry::{boundary_entries, EntryPoint};
use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SweepConfig::validate()`] or sweep startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An explicit entry list was given but is empty.
    NoEntries,
    /// An entry point lies outside the grid.
    EntryOutOfBounds {
        /// The offending entry.
        entry: EntryPoint,
        /// Grid height.
        height: usize,
        /// Grid width.
        width: usize,
    },
    /// A worker thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEntries => write!(f, "entry list is empty"),
            Self::EntryOutOfBounds {
                entry,
                height,
                width,
            } => {
                write!(f, "entry {entry} outside {height}x{width} grid")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SweepConfig ────────────────────────────────────────────────────

/// Configuration for a multi-trial sweep.
#[derive(Clone, Debug, Default)]
pub struct SweepConfig {
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
    /// Entries to try. `None` = every inward boundary entry.
    pub entries: Option<Vec<EntryPoint>>,
}

impl SweepConfig {
    /// Maximum explicit worker count.
    pub const MAX_WORKERS: usize = 64;

    /// A config that runs exactly one entry.
    pub fn single(entry: EntryPoint) -> Self {
        Self {
            worker_count: Some(1),
            entries: Some(vec![entry]),
        }
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, Self::MAX_WORKERS),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                cpus.clamp(1, 16)
            }
        }
    }

    /// The entries a sweep over a `height x width` grid will try.
    pub fn resolved_entries(&self, width: usize, height: usize) -> Vec<EntryPoint> {
        match &self.entries {
            Some(entries) => entries.clone(),
            None => boundary_entries(width, height),
        }
    }

    /// Validate against a `height x width` grid.
    pub fn validate(&self, width: usize, height: usize) -> Result<(), ConfigError> {
        let Some(entries) = &self.entries else {
            return Ok(());
        };
        if entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }
        for entry in entries {
            if entry.position.row >= height || entry.position.col >= width {
                return Err(ConfigError::EntryOutOfBounds {
                    entry: *entry,
                    height,
                    width,
                });
            }
        }
        Ok(())
    }
}
