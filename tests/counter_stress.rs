//! Stress tests for the shared counter
//!
//! These push enough concurrent increments through the counter that a
//! missing lock around the read-modify-write would be caught within a run
//! or two.

use medley::counter::SharedCounter;
use medley::counter::pool::{self, IncrementJob};
use rand::Rng;

#[test]
fn test_fifty_workers_ten_thousand_increments() {
    let report = pool::run(IncrementJob {
        workers: 50,
        increments_per_worker: 10_000,
    })
    .unwrap();

    assert_eq!(report.expected(), 500_000);
    assert_eq!(report.value, 500_000);
}

/// Any worker/increment combination must land on exactly W * K.
#[test]
fn test_randomized_worker_increment_combinations() {
    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let workers = rng.gen_range(1..=8);
        let increments = rng.gen_range(0..=2000);

        let report = pool::run(IncrementJob {
            workers,
            increments_per_worker: increments,
        })
        .unwrap();

        assert_eq!(
            report.value,
            workers as u64 * increments,
            "lost updates with workers={workers} increments={increments}"
        );
    }
}

/// Uneven batch sizes across workers still sum to the serial total.
#[test]
fn test_mixed_batch_sizes_reach_serial_total() {
    let counter = SharedCounter::new();
    let batches = [1u64, 10, 100, 1_000, 5_000, 20_000];

    crossbeam::thread::scope(|s| {
        for &batch in &batches {
            let counter = &counter;
            s.spawn(move |_| {
                for _ in 0..batch {
                    counter.increment();
                }
            });
        }
    })
    .unwrap();

    assert_eq!(counter.value(), batches.iter().sum::<u64>());
}

/// Readers observing a quiesced counter all see the same value.
#[test]
fn test_value_stable_after_barrier() {
    let report = pool::run(IncrementJob {
        workers: 8,
        increments_per_worker: 1_000,
    })
    .unwrap();

    // The run is over; repeated orchestrations are independent.
    let again = pool::run(IncrementJob {
        workers: 8,
        increments_per_worker: 1_000,
    })
    .unwrap();

    assert_eq!(report.value, 8_000);
    assert_eq!(again.value, 8_000);
}
