//! String helpers command

use crate::cli::Output;
use crate::strings;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct StringsArgs {
    /// Text to run the helpers on
    #[arg(short, long, default_value = "step on no pets")]
    pub input: String,
}

/// Execute the strings command
pub async fn execute(args: StringsArgs, output: &Output) -> Result<()> {
    output.header("String helpers");

    output.table_row("input", &args.input);
    output.table_row("reversed", &strings::reverse(&args.input));
    output.table_row(
        "palindrome",
        if strings::is_palindrome(&args.input) {
            "yes"
        } else {
            "no"
        },
    );
    output.table_row("title case", &strings::title_case(&args.input));

    Ok(())
}
