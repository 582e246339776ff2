//! Async demo tasks command

use crate::cli::Output;
use crate::config::MedleyConfig;
use crate::tasks;
use anyhow::Result;
use clap::Args;
use std::time::Duration;

#[derive(Args)]
pub struct TasksArgs {
    /// Number of demo tasks
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Steps each task runs
    #[arg(short, long)]
    pub steps: Option<u32>,

    /// Delay between steps, in milliseconds
    #[arg(short, long)]
    pub delay_ms: Option<u64>,
}

/// Execute the tasks command
pub async fn execute(args: TasksArgs, config: &MedleyConfig, output: &Output) -> Result<()> {
    let count = args.count.unwrap_or(config.demo.task_count);
    let steps = args.steps.unwrap_or(config.demo.task_steps);
    let delay = Duration::from_millis(args.delay_ms.unwrap_or(config.demo.task_delay_ms));

    output.header("Demo tasks");
    output.info(&format!(
        "Spawning {count} tasks, {steps} steps each (step logs at -v)"
    ));

    let completed = tasks::run(count, steps, delay).await;

    if completed == count {
        output.success(&format!("{completed}/{count} demo tasks completed"));
    } else {
        output.warning(&format!("only {completed}/{count} demo tasks completed"));
    }

    Ok(())
}
