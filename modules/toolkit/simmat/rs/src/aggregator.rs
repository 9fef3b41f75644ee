use crate::error::Error;
use crate::partition::total_pairs;
use crate::result::{PairOutcome, PairResult, RunStatistics, Similarity, SimilarityMatrix};

/// Single-threaded sink for pair outcomes. Writes scores into the matrix and keeps online
/// min/max/sum statistics.
#[derive(Clone, Debug)]
pub struct Aggregator {
    matrix: SimilarityMatrix,
    pairs: Vec<PairResult>,
    processed: usize,
    failed: usize,
    min: f64,
    max: f64,
    sum: f64,
}

impl Aggregator {
    pub fn new(sequences: usize) -> Self {
        Self {
            matrix: SimilarityMatrix::zeros(sequences),
            pairs: Vec::new(),
            processed: 0,
            failed: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
        }
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Record a single outcome. Each pair must be applied exactly once. Failed pairs are
    /// logged and contribute 0.0 to the matrix and the statistics.
    pub fn apply(&mut self, outcome: PairOutcome) {
        let (i, j, score) = match outcome {
            PairOutcome::Scored(result) => {
                let score = *result.score();
                self.pairs.push(result);
                (*result.i(), *result.j(), score)
            }
            PairOutcome::Failed { i, j, reason } => {
                log::error!("{}", Error::PairComputation { i, j, reason });
                self.failed += 1;
                (i, j, 0.0)
            }
        };

        self.matrix.set_pair(i, j, score);
        self.min = self.min.min(score);
        self.max = self.max.max(score);
        self.sum += score;
        self.processed += 1;
    }

    pub fn finish(mut self) -> Similarity {
        self.matrix.fill_diagonal(1.0);
        // Chunks arrive in completion order
        self.pairs.sort_unstable_by_key(|x| (*x.i(), *x.j()));

        let size = self.matrix.size();
        let (min, max, mean) = if self.processed == 0 {
            (None, None, None)
        } else {
            (
                Some(self.min),
                Some(self.max),
                Some(self.sum / self.processed as f64),
            )
        };
        let statistics = RunStatistics::new(
            total_pairs(size),
            size,
            self.processed,
            self.failed,
            min,
            max,
            mean,
        );
        Similarity::new(self.matrix, statistics, self.pairs)
    }
}
