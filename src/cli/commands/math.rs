//! Numeric helpers command

use crate::cli::Output;
use crate::mathx;
use anyhow::Result;

/// Execute the math command
pub async fn execute(output: &Output) -> Result<()> {
    output.header("Numeric helpers");

    output.table_row("factorial(10)", &mathx::factorial(10).to_string());
    output.table_row("fibonacci(20)", &mathx::fibonacci(20).to_string());
    output.table_row("gcd(84, 36)", &mathx::gcd(84, 36).to_string());
    output.table_row("lcm(4, 6)", &mathx::lcm(4, 6).to_string());
    output.table_row("mod_pow(7, 128, 13)", &mathx::mod_pow(7, 128, 13)?.to_string());

    let primes: Vec<u64> = (0..=30).filter(|&n| mathx::is_prime(n)).collect();
    output.info("Primes up to 30:");
    for prime in &primes {
        output.list_item(&prime.to_string());
    }

    // The one deliberate failure: caught here, reported, never propagated.
    match mathx::divide(10, 0) {
        Ok(value) => output.table_row("10 / 0", &value.to_string()),
        Err(e) => output.warning(&format!("Caught an arithmetic error: {e}")),
    }
    output.table_row("10 / 2", &mathx::divide(10, 2)?.to_string());

    Ok(())
}
