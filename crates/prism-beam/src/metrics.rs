//! Per-trial counters for the beam simulator.
//!
//! [`TrialMetrics`] captures how a single trial evolved: how many rounds
//! it took to reach quiescence and what happened to its beam-heads.

/// Counters collected during a single trial.
///
/// The simulator populates these as it runs; they are reported alongside
/// the lit-cell count in [`TrialOutcome`](crate::simulator::TrialOutcome).
///
/// Equality ignores `elapsed_us`, so two runs of the same trial compare
/// equal however long each took.
#[derive(Clone, Debug, Default)]
pub struct TrialMetrics {
    /// Rounds that marked at least one new `(cell, direction)` pair.
    pub rounds: usize,
    /// Beam-heads created, including the initial one.
    pub heads_spawned: usize,
    /// Heads retired because their cell was already processed in their
    /// direction.
    pub retired_on_cycle: usize,
    /// Heads retired because their next step left the grid.
    pub retired_at_edge: usize,
    /// Largest number of simultaneously active heads.
    pub peak_heads: usize,
    /// Wall-clock time for the trial, in microseconds.
    pub elapsed_us: u64,
}

impl PartialEq for TrialMetrics {
    fn eq(&self, other: &Self) -> bool {
        self.rounds == other.rounds
            && self.heads_spawned == other.heads_spawned
            && self.retired_on_cycle == other.retired_on_cycle
            && self.retired_at_edge == other.retired_at_edge
            && self.peak_heads == other.peak_heads
    }
}

impl Eq for TrialMetrics {}

impl TrialMetrics {
    /// Heads retired for any reason.
    pub fn retired(&self) -> usize {
        self.retired_on_cycle + self.retired_at_edge
    }
}
