//! chase — four ghosts hunting a wandering target through a small maze.
//!
//! Runs level 5 (every ghost, each with its own search strategy) against a
//! target that random-walks one cell every few ticks, writes per-plan and
//! per-position CSV files, and prints a telemetry table per ghost.
//!
//! ```text
//! cargo run -p chase                     # default EngineConfig
//! cargo run -p chase -- engine.json      # EngineConfig from JSON
//! RUST_LOG=gn_agent=debug cargo run -p chase
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use memory_stats::memory_stats;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing_subscriber::{fmt, EnvFilter};

use gn_agent::Ghost;
use gn_core::{Cell, EngineConfig, Tick};
use gn_maze::{GridMaze, Topology};
use gn_output::{ChaseOutputObserver, CsvWriter, OutputWriter};
use gn_sim::{ChaseBuilder, ChaseObserver, Level, Spawns};
use gn_telemetry::PlanningResult;

// ── Memory helper ─────────────────────────────────────────────────────────────

fn mem_mb() -> f64 {
    memory_stats()
        .map(|s| s.physical_mem as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                    u64 = 42;
const LEVEL:                   u8  = 5;
const TOTAL_TICKS:             u64 = 1_200;
/// The target steps to a random neighbour every N ticks.
const TARGET_STEP_TICKS:       u64 = 10;
/// Write ghost positions every N ticks.
const POSITION_INTERVAL_TICKS: u64 = 5;
const OUTPUT_DIR:              &str = "output/chase";

const LAYOUT: &str = "
###################
#B.......#.......P#
#.##.###.#.###.##.#
#.................#
#.##.#.#####.#.##.#
#....#...C...#....#
####.###.#.###.####
#O.......#.......R#
###################
";

// ── Target ────────────────────────────────────────────────────────────────────

/// The chased target: a seeded random walk over open cells.
struct Wanderer {
    maze: GridMaze,
    cell: Cell,
    rng:  SmallRng,
}

impl Wanderer {
    fn new(maze: GridMaze, start: Cell, seed: u64) -> Self {
        Self { maze, cell: start, rng: SmallRng::seed_from_u64(seed) }
    }

    fn position_at(&mut self, tick: Tick) -> Cell {
        if tick.0 > 0 && tick.0.is_multiple_of(TARGET_STEP_TICKS) {
            let moves = self.maze.valid_moves(self.cell);
            if let Some(&next) = moves.choose(&mut self.rng) {
                self.cell = next;
            }
        }
        self.cell
    }
}

// ── Observer wrapper to count reuse ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:  ChaseOutputObserver<W>,
    plans:  usize,
    reused: usize,
    empty:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: ChaseOutputObserver<W>) -> Self {
        Self { inner, plans: 0, reused: 0, empty: 0 }
    }
}

impl<W: OutputWriter> ChaseObserver for CountingObserver<W> {
    fn on_plan(&mut self, tick: Tick, ghost: &Ghost, result: &PlanningResult) {
        self.plans += 1;
        self.reused += result.reused as usize;
        self.empty += result.route.is_empty() as usize;
        self.inner.on_plan(tick, ghost, result);
    }

    fn on_tick_end(&mut self, tick: Tick, ghosts: &[Ghost]) {
        self.inner.on_tick_end(tick, ghosts);
    }

    fn on_chase_end(&mut self, final_tick: Tick) {
        self.inner.on_chase_end(final_tick);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config() -> Result<EngineConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config: EngineConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    tracing::info!(%path, "loaded engine config");
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    println!("=== chase — ghost_nav pathfinding demo ===");
    println!("Level: {LEVEL}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Maze and spawns.
    let maze = GridMaze::from_ascii(LAYOUT)?;
    let spawns = Spawns::from_maze(&maze);
    let target_start = maze.marker('C').context("layout has no target marker 'C'")?;
    println!(
        "Maze: {} × {} ({} open cells), {} ghost spawns",
        maze.width(),
        maze.height(),
        maze.open_cells().count(),
        spawns.len()
    );

    // 2. Engine config.
    let config = load_config()?;
    println!(
        "Engine: {:.3} progress/tick ({} ticks per cell), DFS cap {}",
        config.progress_per_tick,
        config.ticks_per_step(),
        config.dfs_depth_cap
    );
    println!();

    // 3. Build the chase.
    let mut target = Wanderer::new(maze.clone(), target_start, SEED);
    let mut chase = ChaseBuilder::for_level(Level::new(LEVEL)?, maze, &spawns)?
        .config(config)
        .build()?;

    // 4. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(ChaseOutputObserver::new(writer, POSITION_INTERVAL_TICKS));

    // 5. Run.
    let mem_before = mem_mb();
    let t0 = Instant::now();
    chase.run_ticks(TOTAL_TICKS, |tick| target.position_at(tick), &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Chase complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  plans.csv     : {} rows ({} reused, {} empty routes)",
        obs.plans, obs.reused, obs.empty
    );
    println!("  positions.csv : every {POSITION_INTERVAL_TICKS} ticks");
    println!("  target ended at {}", target.cell);
    println!("  process memory: {:.1} MB (before run {:.1} MB)", mem_mb(), mem_before);
    println!();

    // 7. Per-ghost telemetry table.
    println!(
        "{:<10} {:<5} {:<9} {:>6} {:>7} {:>12} {:>12} {:>10}",
        "Ghost", "Algo", "Cell", "Plans", "Reused", "Nodes", "Time (µs)", "Peak (B)"
    );
    println!("{}", "-".repeat(78));
    for ghost in chase.ghosts() {
        let s = ghost.telemetry().summary();
        println!(
            "{:<10} {:<5} {:<9} {:>6} {:>7} {:>12} {:>12} {:>10}",
            ghost.id().to_string(),
            ghost.strategy().name(),
            ghost.current().to_string(),
            s.plans,
            s.reused,
            s.total_nodes_expanded,
            s.total_elapsed.as_micros(),
            s.max_peak_memory_bytes,
        );
    }

    Ok(())
}
