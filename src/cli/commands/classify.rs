//! Classification command

use crate::classify::{Weekday, classify};
use crate::cli::Output;
use crate::config::MedleyConfig;
use crate::report;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Upper bound (exclusive) of the range to classify
    #[arg(short, long)]
    pub limit: Option<u64>,

    /// Weekday to describe
    #[arg(short, long, value_enum, default_value_t = Weekday::Wednesday)]
    pub day: Weekday,
}

/// Execute the classify command
pub async fn execute(args: ClassifyArgs, config: &MedleyConfig, output: &Output) -> Result<()> {
    let limit = args.limit.unwrap_or(config.demo.numbers_limit);

    output.header("Divisibility classification");

    for n in 0..limit.min(10) {
        output.info(&format!("Number {} processed as: {}", n, classify(n)));
    }

    if limit > 10 && output.is_verbose() {
        output.verbose(&report::render_map((10..limit).map(|n| (n, classify(n)))));
    }

    output.blank_line();
    output.info(&format!("Today is {}", args.day));
    output.info(args.day.describe());

    Ok(())
}
