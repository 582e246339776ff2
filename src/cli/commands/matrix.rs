//! Matrix command

use crate::cli::Output;
use crate::config::MedleyConfig;
use crate::matrix;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct MatrixArgs {
    /// Number of rows
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Number of columns
    #[arg(short, long)]
    pub cols: Option<usize>,

    /// Seed for deterministic generation
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Execute the matrix command
pub async fn execute(args: MatrixArgs, config: &MedleyConfig, output: &Output) -> Result<()> {
    let rows = args.rows.unwrap_or(config.matrix.rows);
    let cols = args.cols.unwrap_or(config.matrix.cols);
    let seed = args.seed.or(config.matrix.seed);

    output.header("Matrix checksum");
    output.info(&format!("Generated a {rows}x{cols} matrix"));

    let matrix = matrix::generate(rows, cols, seed);
    if output.is_verbose() {
        for row in matrix.cells() {
            output.verbose(&format!("{row:?}"));
        }
    }

    let checksum = matrix::alternating_checksum(&matrix);
    output.success(&format!("Final sum after matrix processing: {checksum}"));

    Ok(())
}
