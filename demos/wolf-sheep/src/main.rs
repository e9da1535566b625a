//! wolf-sheep — predator/prey grazing demo for the rust_ws ecology engine.
//!
//! Scatters sheep, wolves and a grass carpet over a grid at random, runs the
//! tick loop, and prints population counts.  Defaults reproduce the classic
//! 20×20 torus setup; every parameter can be overridden on the command line.
//!
//! ```text
//! RUST_LOG=info cargo run -p wolf-sheep --release -- --ticks 500 --snapshot-out final.json
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ws_agent::AnimalParams;
use ws_core::{SimConfig, SimRng, Tick};
use ws_sim::{PopulationCounts, SimBuilder, SimObserver, SimSnapshot, TickReport};
use ws_spatial::GridConfig;

// ── Command line ──────────────────────────────────────────────────────────────

/// Command line arguments for the wolf/sheep demo
#[derive(Parser, Debug)]
#[command(name = "wolf-sheep")]
#[command(about = "Wolf/sheep/grass predator-prey grid ecology")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    #[arg(long, default_value_t = 20)]
    width: u32,

    #[arg(long, default_value_t = 20)]
    height: u32,

    /// Use hard edges instead of wrapping the grid into a torus
    #[arg(long)]
    fixed_boundary: bool,

    #[arg(long, default_value_t = 100)]
    initial_sheep: usize,

    #[arg(long, default_value_t = 50)]
    initial_wolves: usize,

    #[arg(long, default_value_t = 0.04)]
    sheep_reproduce: f64,

    #[arg(long, default_value_t = 0.05)]
    wolf_reproduce: f64,

    /// Energy a wolf gains per sheep eaten
    #[arg(long, default_value_t = 20.0)]
    wolf_gain_from_food: f64,

    /// Energy a sheep gains per grass patch eaten
    #[arg(long, default_value_t = 4.0)]
    sheep_gain_from_food: f64,

    /// Ticks an eaten patch takes to regrow
    #[arg(long, default_value_t = 30)]
    grass_regrowth_time: i64,

    /// Stop as soon as either animal population dies out
    #[arg(long)]
    stop_on_extinction: bool,

    /// Log counts every N ticks (0 = only at the end)
    #[arg(long, default_value_t = 10)]
    report_interval: u64,

    /// Write the final state as JSON to this path
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs counts on an interval and keeps the full series for the summary.
struct PopulationLog {
    interval: u64,
    rows:     Vec<(Tick, PopulationCounts)>,
    births:   usize,
    starved:  usize,
}

impl PopulationLog {
    fn new(interval: u64) -> Self {
        Self { interval, rows: Vec::new(), births: 0, starved: 0 }
    }
}

impl SimObserver for PopulationLog {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport, counts: &PopulationCounts) {
        self.births += report.births;
        self.starved += report.starved;
        self.rows.push((tick, *counts));
        if self.interval > 0 && tick.0 % self.interval == 0 {
            info!(
                tick = tick.0,
                sheep = counts.sheep,
                wolves = counts.wolves,
                grown_grass = counts.grown_grass,
                "populations"
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, counts: &PopulationCounts) {
        info!(tick = final_tick.0, ?counts, births = self.births, starved = self.starved, "run complete");
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

/// Random initial population: energies in `[0, 2·gain)`, each patch fully
/// grown with probability ½ and otherwise partway through regrowth.
fn populate(args: &Args, config: SimConfig, grid: GridConfig) -> SimBuilder {
    let mut rng = SimRng::new(args.seed);
    let mut builder = SimBuilder::new(config, grid);
    let random_cell = |rng: &mut SimRng| (rng.gen_range(0..args.width), rng.gen_range(0..args.height));

    for _ in 0..args.initial_sheep {
        let at = random_cell(&mut rng);
        let energy = initial_energy(&mut rng, args.sheep_gain_from_food);
        builder = builder.sheep(at, AnimalParams::new(energy, args.sheep_reproduce, args.sheep_gain_from_food));
    }
    for _ in 0..args.initial_wolves {
        let at = random_cell(&mut rng);
        let energy = initial_energy(&mut rng, args.wolf_gain_from_food);
        builder = builder.wolf(at, AnimalParams::new(energy, args.wolf_reproduce, args.wolf_gain_from_food));
    }

    let regrowth = args.grass_regrowth_time;
    for y in 0..args.height {
        for x in 0..args.width {
            let countdown = if regrowth <= 0 || rng.gen_bool(0.5) { 0 } else { rng.gen_range(0..regrowth) };
            builder = builder.grass((x, y), countdown, regrowth);
        }
    }
    builder
}

fn initial_energy(rng: &mut SimRng, gain: f64) -> f64 {
    if gain > 0.0 { rng.gen_range(0.0..2.0 * gain) } else { 0.0 }
}

fn write_snapshot(path: &Path, snapshot: &SimSnapshot) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), snapshot)
        .with_context(|| format!("writing snapshot to {}", path.display()))?;
    Ok(())
}

/// Install the global fmt subscriber, filtered by `RUST_LOG`.
fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("installing tracing subscriber")
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing()?;

    let args = Args::parse();
    anyhow::ensure!(args.width > 0 && args.height > 0, "grid must be at least 1x1");

    println!("=== wolf-sheep — rust_ws ecology ===");
    println!(
        "Grid: {}x{} {}  |  Sheep: {}  |  Wolves: {}  |  Ticks: {}  |  Seed: {}",
        args.width,
        args.height,
        if args.fixed_boundary { "fixed" } else { "torus" },
        args.initial_sheep,
        args.initial_wolves,
        args.ticks,
        args.seed,
    );
    println!();

    // 1. Config.
    let config = SimConfig {
        total_ticks:             args.ticks,
        seed:                    args.seed,
        stop_on_extinction:      args.stop_on_extinction,
        snapshot_interval_ticks: 0,
    };
    let mut grid = GridConfig::new(args.width, args.height);
    if !args.fixed_boundary {
        grid = grid.torus();
    }

    // 2. Build sim.
    let mut sim = populate(&args, config, grid).build()?;

    // 3. Run.
    let mut log = PopulationLog::new(args.report_interval);
    let t0 = Instant::now();
    sim.run(&mut log)?;
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  births: {}  |  starved: {}", log.births, log.starved);
    println!();

    let every = (log.rows.len() / 20).max(1);
    println!("{:<8} {:>8} {:>8} {:>12}", "Tick", "Sheep", "Wolves", "Grown grass");
    println!("{}", "-".repeat(39));
    for (tick, c) in log.rows.iter().step_by(every) {
        println!("{:<8} {:>8} {:>8} {:>12}", tick.0, c.sheep, c.wolves, c.grown_grass);
    }
    let last = sim.counts();
    println!("{:<8} {:>8} {:>8} {:>12}", sim.clock.current_tick.0, last.sheep, last.wolves, last.grown_grass);

    // 5. Optional snapshot.
    if let Some(path) = &args.snapshot_out {
        write_snapshot(path, &sim.snapshot())?;
        println!();
        println!("Snapshot written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_subscriber_install_is_reported() {
        let _ = init_tracing();
        let err = init_tracing().unwrap_err();
        assert!(err.to_string().contains("installing tracing subscriber"));
    }

    #[test]
    fn populate_fills_every_cell_with_grass() {
        let args = Args::parse_from(["wolf-sheep", "--width", "4", "--height", "3", "--initial-sheep", "5", "--initial-wolves", "2"]);
        let config = SimConfig { total_ticks: 1, seed: args.seed, stop_on_extinction: false, snapshot_interval_ticks: 0 };
        let sim = populate(&args, config, GridConfig::new(4, 3).torus()).build().unwrap();
        let counts = sim.counts();
        assert_eq!((counts.sheep, counts.wolves), (5, 2));
        assert_eq!(sim.agents.grass_patches().count(), 12);
    }
}
