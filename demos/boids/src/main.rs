//! headless: run one flock simulation from a TOML parameter file.
//!
//! ```text
//! headless [PARAM_FILE] [OUTPUT_DIR]
//! ```
//!
//! `PARAM_FILE` defaults to `parameter/nominal.toml`; `OUTPUT_DIR` defaults
//! to `outputs/<unix-timestamp>/`.  Writes `positions.csv` and
//! `tick_summaries.csv` there and logs the final polarization.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use boids::{ParamFile, create_run_dir, format_elapsed, init_tracing};
use flock_output::{CsvWriter, SimOutputObserver};
use flock_sim::{Both, FlockSimulation, ProgressLogger};

const DEFAULT_PARAMS: &str = "parameter/nominal.toml";

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args_os().skip(1);
    let param_path = args.next().map(PathBuf::from).unwrap_or_else(|| DEFAULT_PARAMS.into());
    let out_arg = args.next().map(PathBuf::from);

    // 1. Parameters.
    let params = ParamFile::load(&param_path)?;
    let config = params.sim_config();
    tracing::info!(
        description = %config.description,
        step_max = config.step_max,
        seed = config.seed,
        "loaded {}",
        param_path.display()
    );
    params.log();

    // 2. Output directory.
    let out_dir = create_run_dir(out_arg.as_deref())?;
    tracing::info!("writing output to {}", out_dir.display());

    // 3. Build and run.
    let start = Instant::now();
    let mut sim = FlockSimulation::new(params.model.clone(), config.seed)?;

    let writer = CsvWriter::new(&out_dir)
        .with_context(|| format!("failed to open CSV files in {}", out_dir.display()))?;
    let progress = ProgressLogger::new((config.step_max / 10).max(1), config.step_max);
    let mut obs = Both(progress, SimOutputObserver::new(writer));

    let final_tick = sim.run(&config, &mut obs)?;
    let elapsed = start.elapsed();

    if let Some(e) = obs.1.take_error() {
        tracing::error!("output error: {e}");
    }

    // 4. Results.
    tracing::info!("==== Results ====");
    tracing::info!("Elapsed time: {}", format_elapsed(elapsed));
    tracing::info!(
        ticks = final_tick.0,
        population = sim.population(),
        polarization = sim.polarization(),
        mean_neighbors = sim.mean_neighbors(),
        "final state"
    );

    Ok(())
}
