//! Random matrix generation and checksumming

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A rows x cols grid of small random integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    cells: Vec<Vec<u32>>,
}

impl Matrix {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn cells(&self) -> &[Vec<u32>] {
        &self.cells
    }
}

/// Generate a matrix of values in `0..100`.
///
/// A seed makes generation deterministic; without one the generator is
/// seeded from OS entropy.
pub fn generate(rows: usize, cols: usize, seed: Option<u64>) -> Matrix {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let cells = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(0..100)).collect())
        .collect();

    Matrix { cells }
}

/// Add even cells, subtract odd cells.
pub fn alternating_checksum(matrix: &Matrix) -> i64 {
    let mut sum = 0i64;
    for row in matrix.cells() {
        for &cell in row {
            if cell % 2 == 0 {
                sum += cell as i64;
            } else {
                sum -= cell as i64;
            }
        }
    }
    sum
}
