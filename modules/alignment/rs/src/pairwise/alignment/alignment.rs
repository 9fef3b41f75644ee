use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::Score;

use super::op::Op;
use super::step::Step;

/// Local alignment between two sequences.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve)]
pub struct Alignment<S: Score> {
    score: S,
    steps: Vec<Step<u8>>,
    /// Aligned segment of the first sequence
    seq1: Range<usize>,
    /// Aligned segment of the second sequence
    seq2: Range<usize>,
}

impl<S: Score> Alignment<S> {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of alignment columns, gaps included.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|x| *x.len() as usize).sum()
    }

    /// Number of columns with the given operation.
    pub fn count(&self, op: Op) -> usize {
        self.steps
            .iter()
            .filter(|x| *x.op() == op)
            .map(|x| *x.len() as usize)
            .sum()
    }

    /// Number of identical residue pairs.
    pub fn matches(&self) -> usize {
        self.count(Op::Match)
    }

    /// Number of residue pairs that are either identical or similar.
    pub fn similar(&self) -> usize {
        self.steps
            .iter()
            .filter(|x| x.op().is_similar())
            .map(|x| *x.len() as usize)
            .sum()
    }

    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }
}
