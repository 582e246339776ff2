//! Concurrent counter command
//!
//! Spawns the configured worker threads against one shared counter, joins
//! them, and reports the final value against the expected total.

use crate::cli::Output;
use crate::config::MedleyConfig;
use crate::counter::pool::{self, IncrementJob};
use crate::report::CounterSummary;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct CounterArgs {
    /// Number of worker threads (0 = derive from available cores)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Increments issued by each worker
    #[arg(short, long)]
    pub increments: Option<u64>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// Execute the counter command
pub async fn execute(args: CounterArgs, config: &MedleyConfig, output: &Output) -> Result<()> {
    let requested = args.workers.unwrap_or(config.counter.workers);
    let workers = if requested == 0 {
        pool::auto_workers(0, config.counter.thread_percentage)
    } else {
        requested
    };
    let increments = args.increments.unwrap_or(config.counter.increments_per_worker);

    let job = IncrementJob {
        workers,
        increments_per_worker: increments,
    };

    let report = if args.format == "json" {
        pool::run(job)?
    } else {
        output.header("Concurrent counter");
        output.info(&format!(
            "{workers} workers, {increments} increments each"
        ));

        let bar = output.progress_bar(workers as u64, "workers finished");
        let report = pool::run_with_progress(
            job,
            Some(|done: usize, _total: usize| bar.set_position(done as u64)),
        )?;
        bar.finish_and_clear();
        report
    };

    let summary = CounterSummary::from(&report);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if summary.exact {
        output.success(&format!(
            "Counter value after multi-threading: {} (expected {})",
            summary.value, summary.expected
        ));
    } else {
        output.error(&format!(
            "Counter value {} does not match expected {}",
            summary.value, summary.expected
        ));
        anyhow::bail!("lost updates detected");
    }

    Ok(())
}
