use std::ops::Index;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

/// Alignment summary of two sequences, independent of their positions in the input.
#[derive(Copy, Clone, PartialEq, Debug, Default, Constructor, Getters)]
pub struct PairScore {
    /// Optimal local alignment score, never negative
    score: f64,
    /// Identical residue pairs on the optimal path
    matches: usize,
    /// Residue pairs with a non-negative substitution score, matches included
    similar: usize,
    /// Alignment columns, gaps included
    aligned_length: usize,
}

#[derive(Copy, Clone, PartialEq, Debug, Getters, Dissolve)]
pub struct PairResult {
    i: usize,
    j: usize,
    score: f64,
    matches: usize,
    similar: usize,
    aligned_length: usize,
    /// `matches / max(len(i), len(j))`, zero for two empty sequences
    identity: f64,
}

impl PairResult {
    pub fn new(i: usize, j: usize, score: &PairScore, len1: usize, len2: usize) -> Self {
        let longest = len1.max(len2);
        let identity = if longest == 0 {
            0.0
        } else {
            score.matches as f64 / longest as f64
        };
        Self {
            i,
            j,
            score: score.score,
            matches: score.matches,
            similar: score.similar,
            aligned_length: score.aligned_length,
            identity,
        }
    }
}

/// Result of a single pair evaluation.
#[derive(Clone, PartialEq, Debug)]
pub enum PairOutcome {
    Scored(PairResult),
    Failed { i: usize, j: usize, reason: String },
}

impl PairOutcome {
    pub fn indices(&self) -> (usize, usize) {
        match self {
            PairOutcome::Scored(result) => (result.i, result.j),
            PairOutcome::Failed { i, j, .. } => (*i, *j),
        }
    }
}

/// Dense, row-major N x N matrix of pairwise scores.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SimilarityMatrix {
    size: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    pub(crate) fn zeros(size: usize) -> Self {
        Self {
            size,
            data: vec![0.0; size * size],
        }
    }

    #[inline(always)]
    pub(crate) fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.size + j] = value;
        self.data[j * self.size + i] = value;
    }

    pub(crate) fn fill_diagonal(&mut self, value: f64) {
        for k in 0..self.size {
            self.data[k * self.size + k] = value;
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.size && j < self.size {
            Some(self.data[i * self.size + j])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self[(i, j)] == self[(j, i)]))
    }
}

impl Index<(usize, usize)> for SimilarityMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(
            i < self.size && j < self.size,
            "Index ({i}, {j}) is out of bounds for a {0}x{0} matrix",
            self.size
        );
        &self.data[i * self.size + j]
    }
}

/// Summary of a similarity run. `min`, `max` and `mean` are `None` when there was nothing
/// to compare (less than two sequences).
#[derive(Clone, PartialEq, Debug, Default, Constructor, Getters, Dissolve)]
pub struct RunStatistics {
    total_comparisons: usize,
    total_sequences: usize,
    /// Pairs that contributed to the statistics, failed pairs included
    processed_pairs: usize,
    /// Pairs that could not be scored and were recorded as 0.0
    failed_pairs: usize,
    min: Option<f64>,
    max: Option<f64>,
    mean: Option<f64>,
}

/// Output of a similarity run.
#[derive(Clone, PartialEq, Debug, Default, Constructor, Getters, Dissolve)]
pub struct Similarity {
    matrix: SimilarityMatrix,
    statistics: RunStatistics,
    /// Per-pair details of all successfully scored pairs, ordered by (i, j)
    pairs: Vec<PairResult>,
}

/// Progress of a running computation, published after every aggregated chunk.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Constructor, Getters)]
pub struct Progress {
    chunks_done: usize,
    chunks_total: usize,
    pairs_done: usize,
    pairs_total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let score = PairScore::new(16.0, 4, 4, 4);
        let result = PairResult::new(0, 1, &score, 4, 8);
        assert_eq!(*result.identity(), 0.5);
        assert_eq!(*result.score(), 16.0);

        let empty = PairResult::new(2, 3, &PairScore::default(), 0, 0);
        assert_eq!(*empty.identity(), 0.0);
        assert_eq!(PairOutcome::Scored(empty).indices(), (2, 3));
    }

    #[test]
    fn test_matrix_access() {
        let mut matrix = SimilarityMatrix::zeros(3);
        matrix.set_pair(0, 2, 7.0);
        matrix.set_pair(1, 2, 3.0);
        matrix.fill_diagonal(1.0);

        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix[(2, 0)], 7.0);
        assert_eq!(matrix.get(0, 2), Some(7.0));
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.row(2), &[7.0, 3.0, 1.0]);
        assert_eq!(
            matrix.as_slice(),
            &[1.0, 0.0, 7.0, 0.0, 1.0, 3.0, 7.0, 3.0, 1.0]
        );
        assert!(matrix.is_symmetric());
    }
}
