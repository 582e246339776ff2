//! Numeric helpers
//!
//! Small, self-contained arithmetic routines used by the walkthrough
//! commands. Division and modular exponentiation are the only fallible
//! operations; both fail with [`MathError`] on a zero divisor and the
//! immediate caller is expected to catch and report it.

use std::collections::HashMap;
use thiserror::Error;

/// Arithmetic-domain errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("divide by zero")]
    DivideByZero,
    #[error("integer overflow in {0}")]
    Overflow(&'static str),
}

/// Integer division that surfaces the zero-divisor case as an error.
pub fn divide(a: i64, b: i64) -> Result<i64, MathError> {
    if b == 0 {
        return Err(MathError::DivideByZero);
    }
    // i64::MIN / -1 is the one remaining way this can blow up.
    a.checked_div(b).ok_or(MathError::Overflow("division"))
}

/// Recursive factorial. Exact for `n` up to 34.
pub fn factorial(n: u32) -> u128 {
    if n <= 1 { 1 } else { n as u128 * factorial(n - 1) }
}

/// Recursive Fibonacci with a memo cache scoped to this call chain.
///
/// The cache lives on the stack of the public entry point and is threaded
/// through the recursion, so repeated calls never share state.
pub fn fibonacci(n: u64) -> u64 {
    let mut cache = HashMap::new();
    fib_memo(n, &mut cache)
}

fn fib_memo(n: u64, cache: &mut HashMap<u64, u64>) -> u64 {
    if n <= 1 {
        return n;
    }
    if let Some(&hit) = cache.get(&n) {
        return hit;
    }
    let result = fib_memo(n - 1, cache) + fib_memo(n - 2, cache);
    cache.insert(n, result);
    result
}

/// Greatest common divisor, iterative Euclid.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Least common multiple. `lcm(0, 0)` is defined as 0.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 && b == 0 {
        return 0;
    }
    // Divide before multiplying to keep intermediates small.
    a / gcd(a, b) * b
}

/// Primality by trial division up to the square root.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Modular exponentiation by square-and-multiply.
///
/// A modulus of zero is the same arithmetic-domain error as division by
/// zero. A modulus of one always yields zero.
pub fn mod_pow(base: u64, exponent: u64, modulus: u64) -> Result<u64, MathError> {
    if modulus == 0 {
        return Err(MathError::DivideByZero);
    }
    if modulus == 1 {
        return Ok(0);
    }

    let modulus = modulus as u128;
    let mut result = 1u128;
    let mut base = base as u128 % modulus;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exponent >>= 1;
    }

    Ok(result as u64)
}
