use crate::pairwise::scoring;
use crate::pairwise::sw::algo::{BestDirectionTracer, GapTracer, Tracer};

use super::{AlignmentSeed, Storage};

/// Keeps the single highest-scoring cell. Among equal scores the first one in scan order
/// (column-major) wins, so results do not depend on anything but the inputs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub struct Best<S: scoring::Score> {
    best: Option<AlignmentSeed<S>>,
}

impl<S: scoring::Score> Best<S> {
    pub fn new() -> Self {
        Self { best: None }
    }

    #[inline(always)]
    fn offer(&mut self, row: usize, col: usize, score: S) {
        match &self.best {
            Some(seed) if seed.score >= score => {}
            _ => self.best = Some(AlignmentSeed { row, col, score }),
        }
    }
}

impl<S: scoring::Score> BestDirectionTracer for Best<S> {
    type Score = S;

    #[inline(always)]
    fn gap_row(&mut self, row: usize, col: usize, score: Self::Score) {
        self.offer(row, col, score);
    }

    #[inline(always)]
    fn gap_col(&mut self, row: usize, col: usize, score: Self::Score) {
        self.offer(row, col, score);
    }

    #[inline(always)]
    fn equivalent(&mut self, row: usize, col: usize, score: Self::Score) {
        self.offer(row, col, score);
    }
}

impl<S: scoring::Score> GapTracer for Best<S> {
    type Score = S;
}

impl<S: scoring::Score> Tracer for Best<S> {
    type Score = S;
}

impl<S: scoring::Score> Storage for Best<S> {
    fn reset(&mut self, _: usize, _: usize) {
        self.best = None;
    }

    fn finalize(&mut self) -> Vec<AlignmentSeed<S>> {
        self.best.take().into_iter().collect()
    }
}
