//! The beam simulator: one template grid, many independent trials.

use crate::config::SweepConfig;
use crate::entry::EntryPoint;
use crate::error::BeamError;
use crate::metrics::TrialMetrics;
use crate::sweep::{self, SweepReport};
use crate::tile::{Tile, Transition};
use indexmap::IndexSet;
use log::{debug, trace};
use prism_core::{Direction, GridError, PointerId, Position};
use prism_grid::{Annotations, EdgeBehavior, Grid};
use std::time::Instant;

/// Result of a single trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Where the beam entered.
    pub entry: EntryPoint,
    /// Number of cells the beam passed through at least once.
    pub lit: usize,
    /// How the trial evolved.
    pub metrics: TrialMetrics,
}

/// Runs beams through a fixed contraption of mirrors and splitters.
///
/// The template is never mutated. Each trial works on a
/// [`fork`](Grid::fork) whose pointer payload is the head's heading.
///
/// # Examples
///
/// ```
/// use prism_beam::{BeamSimulator, EntryPoint};
/// use prism_core::Direction;
///
/// let sim = BeamSimulator::from_text("./\n..").unwrap();
/// let outcome = sim.run_trial(EntryPoint::new(0, 0, Direction::Right)).unwrap();
/// // The mirror turns the beam up and out of the grid.
/// assert_eq!(outcome.lit, 2);
/// ```
#[derive(Debug)]
pub struct BeamSimulator {
    template: Grid,
    tiles: Vec<Tile>,
}

impl BeamSimulator {
    /// Wrap a bounded grid whose every cell is a tile symbol.
    pub fn new(template: Grid) -> Result<Self, BeamError> {
        if template.is_infinite() {
            return Err(BeamError::InfiniteGrid);
        }
        let tiles = template
            .cells()
            .map(|cell| {
                Tile::from_symbol(cell.value()).ok_or(BeamError::UnknownTile {
                    position: cell.position(),
                    value: cell.value(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { template, tiles })
    }

    /// Parse `text` and wrap it.
    pub fn from_text(text: &str) -> Result<Self, BeamError> {
        Self::new(Grid::parse(text)?)
    }

    /// The contraption every trial starts from.
    pub fn template(&self) -> &Grid {
        &self.template
    }

    /// Template width.
    pub fn width(&self) -> usize {
        self.template.width()
    }

    /// Template height.
    pub fn height(&self) -> usize {
        self.template.height()
    }

    fn tile_at(&self, pos: Position) -> Tile {
        self.tiles[pos.row * self.template.width() + pos.col]
    }

    /// Inject a beam at `entry` and run to quiescence.
    pub fn run_trial(&self, entry: EntryPoint) -> Result<TrialOutcome, BeamError> {
        let (grid, metrics) = self.simulate(entry)?;
        let lit = grid.count_where(Annotations::is_lit);
        debug!(
            "trial {entry}: {lit} lit in {} rounds ({} heads, peak {})",
            metrics.rounds, metrics.heads_spawned, metrics.peak_heads
        );
        Ok(TrialOutcome {
            entry,
            lit,
            metrics,
        })
    }

    /// The energised pattern for `entry`: `#` lit, `.` dark, one line per
    /// row.
    pub fn lit_map(&self, entry: EntryPoint) -> Result<String, BeamError> {
        let (grid, _) = self.simulate(entry)?;
        let mut out = String::with_capacity(grid.cell_count() + grid.height());
        for row in 0..grid.height() {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..grid.width() {
                out.push(if grid.annotations_at(row, col)?.is_lit() {
                    '#'
                } else {
                    '.'
                });
            }
        }
        Ok(out)
    }

    /// Run one trial per configured entry and keep the brightest.
    pub fn sweep(&self, config: &SweepConfig) -> Result<SweepReport, BeamError> {
        sweep::sweep(self, config)
    }

    fn simulate(&self, entry: EntryPoint) -> Result<(Grid<Direction>, TrialMetrics), BeamError> {
        let started = Instant::now();
        let mut grid: Grid<Direction> = self.template.fork();
        let Position { row, col } = entry.position;
        let first = grid.spawn_pointer(entry.heading, row, col)?;

        let mut heads = vec![first];
        let mut metrics = TrialMetrics {
            heads_spawned: 1,
            peak_heads: 1,
            ..Default::default()
        };

        loop {
            // Mark phase: every head marks its cell before any head moves.
            let mut marked_new = false;
            let mut retired: IndexSet<PointerId> = IndexSet::new();
            let mut spawned = Vec::new();
            for &id in &heads {
                let mut head = grid.pointer_mut(id)?;
                let heading = *head.payload();
                if !head.annotations_mut()?.record(heading) {
                    retired.insert(id);
                    metrics.retired_on_cycle += 1;
                    continue;
                }
                marked_new = true;
                match self.tile_at(head.position()).transition(heading) {
                    Transition::Pass(out) => head.set_payload(out),
                    Transition::Split(kept, other) => {
                        head.set_payload(kept);
                        let twin = grid.clone_pointer(id)?;
                        grid.pointer_mut(twin)?.set_payload(other);
                        spawned.push(twin);
                    }
                }
            }
            if !marked_new {
                break;
            }
            metrics.rounds += 1;
            metrics.heads_spawned += spawned.len();
            heads.extend(spawned);

            // Advance phase.
            for &id in &heads {
                if retired.contains(&id) {
                    continue;
                }
                let mut head = grid.pointer_mut(id)?;
                let heading = *head.payload();
                match head.move_by(heading, 1, EdgeBehavior::Absorb) {
                    Ok(()) => {}
                    Err(GridError::Move { .. }) => {
                        retired.insert(id);
                        metrics.retired_at_edge += 1;
                    }
                    Err(e) => return Err(e.into()),
                }
            }

            heads.retain(|id| !retired.contains(id));
            for id in retired {
                grid.remove_pointer(id)?;
            }
            metrics.peak_heads = metrics.peak_heads.max(heads.len());
            trace!(
                "round {}: {} active heads, {} registered",
                metrics.rounds,
                heads.len(),
                grid.pointer_count()
            );
        }

        metrics.elapsed_us = started.elapsed().as_micros() as u64;
        Ok((grid, metrics))
    }
}
