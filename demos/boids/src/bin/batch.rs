//! batch: run many independent flock simulations and tabulate the results.
//!
//! ```text
//! batch [PARAM_FILE] [BATCH_FILE] [OUTPUT_DIR]
//! ```
//!
//! Task `k` uses the model parameters of `PARAM_FILE` (with `vision[k]`
//! substituted when the batch file lists one) and seed
//! `mix_seed(seed_base, k)`.  Runs execute on a Rayon pool of `n_jobs`
//! threads.  One row per successful task goes to `batch_summary.csv`.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use boids::{BatchFile, ParamFile, create_run_dir, format_elapsed, init_tracing};
use flock_core::SimConfig;
use flock_core::rng::mix_seed;
use flock_sim::{BatchRunner, BatchTask};

const DEFAULT_PARAMS: &str = "parameter/nominal.toml";
const DEFAULT_BATCH:  &str = "parameter/batch.toml";

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args_os().skip(1);
    let param_path = args.next().map(PathBuf::from).unwrap_or_else(|| DEFAULT_PARAMS.into());
    let batch_path = args.next().map(PathBuf::from).unwrap_or_else(|| DEFAULT_BATCH.into());
    let out_arg = args.next().map(PathBuf::from);

    let params = ParamFile::load(&param_path)?;
    let batch = BatchFile::load(&batch_path)?;
    let config = params.sim_config();
    tracing::info!(
        description = %config.description,
        tasks = batch.task_num,
        n_jobs = batch.n_jobs,
        "batch loaded"
    );
    params.log();

    rayon::ThreadPoolBuilder::new()
        .num_threads(batch.n_jobs)
        .build_global()
        .context("failed to build the Rayon thread pool")?;

    // No snapshots inside a sweep; only end-of-run statistics are kept.
    let task_config = SimConfig { output_interval_ticks: 0, ..config };
    let tasks: Vec<BatchTask> = (0..batch.task_num)
        .map(|k| BatchTask {
            params: batch.task_params(&params.model, k),
            config: SimConfig {
                seed: mix_seed(batch.seed_base, k as u64),
                ..task_config.clone()
            },
        })
        .collect();

    let start = Instant::now();
    let runner = BatchRunner::new(tasks);
    let results = runner.run();
    let elapsed = start.elapsed();

    let out_dir = create_run_dir(out_arg.as_deref())?;
    let path = out_dir.join("batch_summary.csv");
    let mut out = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    out.write_record(["index", "seed", "vision", "ticks", "polarization", "mean_neighbors", "elapsed_secs"])?;

    let mut failed = 0usize;
    for (task, result) in runner.tasks().iter().zip(&results) {
        match result {
            Ok(s) => out.write_record(&[
                s.index.to_string(),
                s.seed.to_string(),
                task.params.vision.to_string(),
                s.ticks.0.to_string(),
                s.polarization.to_string(),
                s.mean_neighbors.to_string(),
                s.elapsed.as_secs_f64().to_string(),
            ])?,
            Err(e) => {
                failed += 1;
                tracing::error!(seed = task.config.seed, "task failed: {e}");
            }
        }
    }
    out.flush()?;

    tracing::info!("==== Results ====");
    tracing::info!("Elapsed time: {}", format_elapsed(elapsed));
    tracing::info!(
        tasks = results.len(),
        failed,
        "summary written to {}",
        path.display()
    );

    Ok(())
}
