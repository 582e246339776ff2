//! Version command implementation

use anyhow::Result;

/// Execute the version command
pub async fn execute() -> Result<()> {
    println!("medley {}", env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!("Rust Edition: 2024");
    Ok(())
}
