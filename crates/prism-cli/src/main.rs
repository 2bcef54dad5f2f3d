use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use prism::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Fire light beams through a grid of mirrors and splitters")]
struct Cli {
    /// Grid file, one row per line
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Worker threads (default: available parallelism)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Entry point as ROW,COL,DIR; repeat to try several (default: every
    /// boundary entry)
    #[arg(short, long = "entry", value_name = "ROW,COL,DIR")]
    entries: Vec<EntryPoint>,

    /// Print the energised pattern of the best trial to stderr
    #[arg(long)]
    map: bool,
}

impl Cli {
    fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            worker_count: self.workers,
            entries: (!self.entries.is_empty()).then(|| self.entries.clone()),
        }
    }
}

fn load(path: &Path) -> Result<BeamSimulator> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let sim = BeamSimulator::from_text(&text)
        .with_context(|| format!("invalid contraption in {}", path.display()))?;
    debug!("loaded {}x{} grid from {}", sim.height(), sim.width(), path.display());
    Ok(sim)
}

fn run(cli: &Cli) -> Result<(BeamSimulator, SweepReport)> {
    let sim = load(&cli.input)?;
    let report = sim
        .sweep(&cli.sweep_config())
        .context("simulation failed")?;
    info!(
        "best entry {} lit {} cells ({} trials, {} workers, {}us)",
        report.best.entry,
        report.best.lit,
        report.trials.len(),
        report.workers,
        report.elapsed_us
    );
    Ok((sim, report))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let (sim, report) = run(&cli)?;
    if cli.map {
        eprintln!("{}", sim.lit_map(report.best.entry)?);
    }
    println!("{}", report.best.lit);
    Ok(())
}
