//! Multi-entry sweep on a worker pool.
//!
//! Trials are independent, so they fan out over scoped worker threads
//! fed by a crossbeam channel. Each worker borrows the simulator, runs
//! trials until the task channel drains, and sends every outcome back
//! tagged with its entry index. The caller reduces with `max`, breaking
//! ties toward the earliest entry so the result does not depend on
//! scheduling.

use crate::config::{ConfigError, SweepConfig};
use crate::entry::EntryPoint;
use crate::error::BeamError;
use crate::simulator::{BeamSimulator, TrialOutcome};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info};
use std::cmp::Reverse;
use std::thread;
use std::time::Instant;

type Task = (usize, EntryPoint);
type Reply = (usize, Result<TrialOutcome, BeamError>);

/// Summary of a sweep.
#[derive(Clone, Debug)]
pub struct SweepReport {
    /// The brightest trial. Ties go to the earliest entry.
    pub best: TrialOutcome,
    /// Every trial, in entry order.
    pub trials: Vec<TrialOutcome>,
    /// Worker threads actually used.
    pub workers: usize,
    /// Wall-clock time for the whole sweep, in microseconds.
    pub elapsed_us: u64,
}

/// Run one trial per entry in `config` and keep the brightest.
pub fn sweep(simulator: &BeamSimulator, config: &SweepConfig) -> Result<SweepReport, BeamError> {
    let (width, height) = (simulator.width(), simulator.height());
    config.validate(width, height)?;
    let entries = config.resolved_entries(width, height);
    if entries.is_empty() {
        return Err(ConfigError::NoEntries.into());
    }
    let workers = config.resolved_worker_count().min(entries.len());
    let started = Instant::now();

    let (task_tx, task_rx) = crossbeam_channel::unbounded::<Task>();
    for task in entries.iter().copied().enumerate() {
        let _ = task_tx.send(task);
    }
    drop(task_tx);
    let (reply_tx, reply_rx) = crossbeam_channel::unbounded::<Reply>();

    thread::scope(|scope| -> Result<(), BeamError> {
        let mut handles = Vec::with_capacity(workers);
        for i in 0..workers {
            let task_rx = task_rx.clone();
            let reply_tx = reply_tx.clone();
            let handle = thread::Builder::new()
                .name(format!("prism-trial-{i}"))
                .spawn_scoped(scope, move || worker_loop(simulator, task_rx, reply_tx))
                .map_err(|e| ConfigError::ThreadSpawnFailed {
                    reason: e.to_string(),
                })?;
            handles.push(handle);
        }
        drop(reply_tx);
        for handle in handles {
            handle.join().map_err(|_| BeamError::WorkerPanicked)?;
        }
        Ok(())
    })?;

    let mut replies: Vec<Reply> = reply_rx.try_iter().collect();
    if replies.len() != entries.len() {
        return Err(BeamError::WorkerPanicked);
    }
    replies.sort_unstable_by_key(|(index, _)| *index);
    let trials = replies
        .into_iter()
        .map(|(_, outcome)| outcome)
        .collect::<Result<Vec<_>, _>>()?;

    let best = trials
        .iter()
        .min_by_key(|t| Reverse(t.lit))
        .cloned()
        .ok_or(ConfigError::NoEntries)?;
    let elapsed_us = started.elapsed().as_micros() as u64;
    info!(
        "sweep: {} trials on {workers} workers in {elapsed_us}us, best {} lit from {}",
        trials.len(),
        best.lit,
        best.entry
    );
    Ok(SweepReport {
        best,
        trials,
        workers,
        elapsed_us,
    })
}

/// Runs until the task channel is drained.
fn worker_loop(simulator: &BeamSimulator, task_rx: Receiver<Task>, reply_tx: Sender<Reply>) {
    while let Ok((index, entry)) = task_rx.recv() {
        let outcome = simulator.run_trial(entry);
        if let Err(e) = &outcome {
            debug!("trial {index} ({entry}) failed: {e}");
        }
        let _ = reply_tx.send((index, outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::Direction;

    const SAMPLE: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";

    fn with_workers(n: usize) -> SweepConfig {
        SweepConfig {
            worker_count: Some(n),
            ..Default::default()
        }
    }

    #[test]
    fn sample_best_is_51() {
        let sim = BeamSimulator::from_text(SAMPLE).unwrap();
        let report = sweep(&sim, &with_workers(4)).unwrap();
        assert_eq!(report.best.lit, 51);
        let top = report
            .trials
            .iter()
            .find(|t| t.entry == EntryPoint::new(0, 3, Direction::Down))
            .unwrap();
        assert_eq!(top.lit, 51);
        assert_eq!(report.trials.len(), 40);
        assert_eq!(report.workers, 4);
    }

    #[test]
    fn trials_are_in_entry_order() {
        let sim = BeamSimulator::from_text(SAMPLE).unwrap();
        let report = sweep(&sim, &with_workers(3)).unwrap();
        let entries: Vec<_> = report.trials.iter().map(|t| t.entry).collect();
        assert_eq!(entries, crate::entry::boundary_entries(10, 10));
        assert_eq!(report.trials[0].lit, 46);
    }

    #[test]
    fn ties_go_to_earliest_entry() {
        let sim = BeamSimulator::from_text("...\n...\n...").unwrap();
        let report = sweep(&sim, &with_workers(8)).unwrap();
        assert_eq!(report.best.lit, 3);
        assert_eq!(report.best.entry, EntryPoint::new(0, 0, Direction::Right));
    }

    #[test]
    fn workers_capped_by_entry_count() {
        let sim = BeamSimulator::from_text("..").unwrap();
        let config = SweepConfig {
            worker_count: Some(16),
            entries: Some(vec![EntryPoint::new(0, 1, Direction::Left)]),
        };
        let report = sweep(&sim, &config).unwrap();
        assert_eq!(report.workers, 1);
        assert_eq!(report.best.lit, 2);
    }

    #[test]
    fn invalid_config_is_rejected_before_running() {
        let sim = BeamSimulator::from_text("..").unwrap();
        let config = SweepConfig::single(EntryPoint::new(0, 2, Direction::Left));
        assert!(matches!(
            sweep(&sim, &config),
            Err(BeamError::Config(ConfigError::EntryOutOfBounds { .. }))
        ));
    }

    #[test]
    fn simulator_method_delegates() {
        let sim = BeamSimulator::from_text(SAMPLE).unwrap();
        let a = sim.sweep(&with_workers(1)).unwrap();
        let b = sweep(&sim, &with_workers(6)).unwrap();
        assert_eq!(a.best, b.best);
        let summary = |r: &SweepReport| -> Vec<(EntryPoint, usize, usize, usize)> {
            r.trials
                .iter()
                .map(|t| (t.entry, t.lit, t.metrics.rounds, t.metrics.peak_heads))
                .collect()
        };
        assert_eq!(summary(&a), summary(&b));
    }
}
