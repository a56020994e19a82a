//! Pairwise comparison matrix and AHP weight synthesis.
//!
//! The matrix is built straight from priority ratios, so it is perfectly
//! consistent and the row-average of the column-normalized matrix gives the
//! principal eigenvector exactly.

/// Saaty's random consistency index, indexed by matrix size
const RANDOM_INDEX: [f64; 11] = [0.0, 0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Square matrix stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl ComparisonMatrix {
    /// Build `M[i][j] = p_i / p_j` from priorities in caller order
    pub fn from_priorities(priorities: &[f64]) -> Self {
        let size = priorities.len();
        let mut cells = Vec::with_capacity(size * size);
        for p_i in priorities {
            for p_j in priorities {
                cells.push(p_i / p_j);
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.size + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub fn column_sums(&self) -> Vec<f64> {
        (0..self.size)
            .map(|col| (0..self.size).map(|row| self.get(row, col)).sum())
            .collect()
    }

    /// Divide every entry by its column sum so each column sums to 1
    pub fn normalize(&self) -> Self {
        let sums = self.column_sums();
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(idx, value)| value / sums[idx % self.size])
            .collect();
        Self { size: self.size, cells }
    }

    /// Row averages of a normalized matrix, rescaled to sum to 1
    pub fn synthesize_weights(&self) -> Vec<f64> {
        let n = self.size as f64;
        let weights: Vec<f64> = (0..self.size)
            .map(|row| self.row(row).iter().sum::<f64>() / n)
            .collect();

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return weights;
        }
        weights.into_iter().map(|w| w / total).collect()
    }

    /// Consistency ratio of this (unnormalized) matrix against `weights`
    ///
    /// Diagnostic only. Sizes of one or two are always consistent and
    /// report 0.
    pub fn consistency_ratio(&self, weights: &[f64]) -> f64 {
        let n = self.size;
        if n <= 2 || weights.len() != n {
            return 0.0;
        }

        let lambda_max = (0..n)
            .map(|i| {
                let weighted: f64 = self.row(i).iter().zip(weights).map(|(m, w)| m * w).sum();
                weighted / weights[i]
            })
            .sum::<f64>()
            / n as f64;

        let ci = (lambda_max - n as f64) / (n as f64 - 1.0);
        let ri = RANDOM_INDEX.get(n).copied().unwrap_or(RANDOM_INDEX[RANDOM_INDEX.len() - 1]);

        // Ratio matrices can land a hair below n through rounding
        (ci / ri).max(0.0)
    }
}

/// Full weight pipeline: comparison matrix, normalization, synthesis
pub fn ahp_weights(priorities: &[f64]) -> (ComparisonMatrix, Vec<f64>) {
    let matrix = ComparisonMatrix::from_priorities(priorities);
    let weights = matrix.normalize().synthesize_weights();
    (matrix, weights)
}
