//! # Medley - classic algorithm walkthroughs in Rust
//!
//! Medley is a small workbench of well-known algorithms and collection
//! demos, with one genuinely concurrent piece at its center: a shared
//! counter incremented by a pool of worker threads under mutual exclusion.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the whole walkthrough
//! medley run
//!
//! # Exercise the concurrent counter
//! medley counter --workers 5 --increments 1000
//!
//! # Individual demos
//! medley classify --limit 100
//! medley matrix --seed 42
//! medley math
//! ```
//!
//! ## Library Usage
//!
//! The demos are plain functions and can be used directly:
//!
//! ```rust
//! use medley::counter::pool::{self, IncrementJob};
//!
//! let report = pool::run(IncrementJob {
//!     workers: 5,
//!     increments_per_worker: 1000,
//! })?;
//! assert_eq!(report.value, 5000);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! - The counter's increment is a mutex-guarded read-modify-write; after
//!   all workers are joined the value equals workers x increments, on every
//!   run, regardless of scheduling.
//! - Everything else is a pure, deterministic helper (the matrix generator
//!   takes an optional seed for reproducibility).

pub mod classify;
pub mod cli;
pub mod config;
pub mod counter;
pub mod mathx;
pub mod matrix;
pub mod people;
pub mod report;
pub mod strings;
pub mod tasks;
