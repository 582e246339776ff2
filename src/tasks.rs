//! Async demo tasks
//!
//! A handful of tokio tasks that each log a few delayed steps, then get
//! joined. A task that fails is reported and dropped; nothing retries it or
//! compensates for its missing steps.

use std::time::Duration;

/// Spawn `count` tasks, each logging `steps` iterations separated by
/// `delay`, and wait for all of them.
///
/// Returns how many tasks ran to completion.
pub async fn run(count: usize, steps: u32, delay: Duration) -> usize {
    let mut handles = Vec::with_capacity(count);

    for id in 0..count {
        handles.push(tokio::spawn(async move {
            for step in 0..steps {
                tracing::info!("worker {id} working, step {step}");
                tokio::time::sleep(delay).await;
            }
        }));
    }

    let mut completed = 0;
    for (id, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(()) => completed += 1,
            Err(e) => tracing::warn!("demo task {id} did not complete: {e}"),
        }
    }
    completed
}
