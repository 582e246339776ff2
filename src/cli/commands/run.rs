//! Full walkthrough command
//!
//! Runs every demo in sequence, in the order the tour has always been
//! presented: classification, people, matrix, recursion, guarded division,
//! weekdays, async tasks, the concurrent counter, collections, and strings.

use crate::classify::{Weekday, classify};
use crate::cli::Output;
use crate::cli::commands::collections;
use crate::config::MedleyConfig;
use crate::counter::pool::{self, IncrementJob};
use crate::{mathx, matrix, people, report, strings, tasks};
use anyhow::Result;
use clap::Args;
use std::time::Duration;

#[derive(Args)]
pub struct RunArgs {
    /// Seed for the matrix stage (deterministic when set)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute the run command
pub async fn execute(args: RunArgs, config: &MedleyConfig, output: &Output) -> Result<()> {
    output.header("Medley walkthrough");

    output.step("Classifying numbers");
    for n in 0..config.demo.numbers_limit.min(10) {
        output.info(&format!("Number {} processed as: {}", n, classify(n)));
    }

    output.step("Filtering adults");
    let roster = people::roster(config.demo.people_count);
    output.verbose(&report::render_list(&roster));
    let adults = people::filter_adults(&roster);
    for person in &adults {
        output.info(&format!("{} is an adult, age: {}", person.name, person.age));
    }

    output.step("Matrix checksum");
    let seed = args.seed.or(config.matrix.seed);
    let grid = matrix::generate(config.matrix.rows, config.matrix.cols, seed);
    output.info(&format!(
        "Final sum after matrix processing: {}",
        matrix::alternating_checksum(&grid)
    ));

    output.step("Recursion");
    output.info(&format!("Factorial of 10 is: {}", mathx::factorial(10)));

    output.step("Guarded division");
    match mathx::divide(10, 0) {
        Ok(value) => output.info(&format!("Division result: {value}")),
        Err(e) => output.warning(&format!("Caught an arithmetic error: {e}")),
    }

    output.step("Weekday");
    let today = Weekday::Wednesday;
    output.info(&format!("Today is {today}"));
    output.info(today.describe());

    output.step("Demo tasks");
    let delay = Duration::from_millis(config.demo.task_delay_ms);
    let completed = tasks::run(config.demo.task_count, config.demo.task_steps, delay).await;
    output.info(&format!(
        "{completed}/{} demo tasks completed",
        config.demo.task_count
    ));

    output.step("Concurrent counter");
    let workers = if config.counter.workers == 0 {
        pool::auto_workers(0, config.counter.thread_percentage)
    } else {
        config.counter.workers
    };
    let report = pool::run(IncrementJob {
        workers,
        increments_per_worker: config.counter.increments_per_worker,
    })?;
    output.info(&format!(
        "Counter value after multi-threading: {}",
        report.value
    ));

    collections::execute(config, output).await?;

    output.step("Memoized fibonacci");
    output.info(&format!("Fibonacci(20): {}", mathx::fibonacci(20)));

    output.step("Squares");
    for n in 0u64..10 {
        output.info(&format!("{n} squared = {}", n * n));
    }

    output.step("Strings");
    let sentence = "the quick brown fox";
    output.info(&format!(
        "Title case of '{sentence}': {}",
        strings::title_case(sentence)
    ));
    output.info(&format!(
        "'RaceCar' is a palindrome: {}",
        strings::is_palindrome("RaceCar")
    ));

    output.blank_line();
    output.success("Walkthrough finished");

    Ok(())
}
