//! Worker-pool orchestration for the shared counter
//!
//! Spawns a fixed set of worker threads that each hammer one
//! [`SharedCounter`] a configured number of times, joins them all, and only
//! then reads the final value. The scope exit is the join barrier: every
//! increment happens before the orchestrator's read.

use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::SharedCounter;

/// A fixed batch of increment work to run against one counter.
#[derive(Debug, Clone, Copy)]
pub struct IncrementJob {
    /// Number of worker threads to spawn.
    pub workers: usize,
    /// Increments issued by each worker before it terminates.
    pub increments_per_worker: u64,
}

/// Outcome of a completed increment job.
#[derive(Debug)]
pub struct CounterReport {
    pub workers: usize,
    pub increments_per_worker: u64,
    /// Counter value read after the join barrier.
    pub value: u64,
}

impl CounterReport {
    /// The value the counter must hold if no update was lost.
    pub fn expected(&self) -> u64 {
        self.workers as u64 * self.increments_per_worker
    }

    pub fn is_exact(&self) -> bool {
        self.value == self.expected()
    }
}

/// Run an increment job to completion.
pub fn run(job: IncrementJob) -> Result<CounterReport> {
    run_with_progress(job, None::<fn(usize, usize)>)
}

/// Run an increment job, reporting each worker's completion.
///
/// The reporter receives `(finished_workers, total_workers)` from whichever
/// worker thread just finished its batch.
pub fn run_with_progress<P>(job: IncrementJob, progress: Option<P>) -> Result<CounterReport>
where
    P: Fn(usize, usize) + Send + Sync,
{
    let counter = SharedCounter::new();
    let finished = Arc::new(AtomicUsize::new(0));
    let progress = progress.map(Arc::new);

    crossbeam::thread::scope(|s| {
        for _worker_id in 0..job.workers {
            let counter = &counter;
            let finished = Arc::clone(&finished);
            let progress = progress.clone();

            s.spawn(move |_| {
                for _ in 0..job.increments_per_worker {
                    counter.increment();
                }

                let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(reporter) = progress.as_deref() {
                    reporter(done, job.workers);
                }
            });
        }
    })
    .map_err(|_| anyhow::anyhow!("worker panic during counter run"))?;

    // All workers are joined here; the read cannot race an increment.
    Ok(CounterReport {
        workers: job.workers,
        increments_per_worker: job.increments_per_worker,
        value: counter.value(),
    })
}

/// Calculate a worker count from available CPU cores.
///
/// Applies `thread_percentage` to the detected core count and clamps the
/// result to at least one worker. `max_workers` of 0 means no explicit cap.
pub fn auto_workers(max_workers: usize, thread_percentage: u8) -> usize {
    let available_cores = num_cpus::get();
    let by_percentage = std::cmp::max(1, (available_cores * thread_percentage as usize) / 100);

    if max_workers > 0 {
        std::cmp::min(max_workers, by_percentage)
    } else {
        by_percentage
    }
}
