use std::ops::Range;

use eyre::Result;

pub use tracemat::TraceMatrix;

use crate::pairwise::Step;

mod tracemat;

/// Path recovered from the trace matrix. All diagonal steps are reported as
/// `Op::Equivalent` and must be resolved by the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Path {
    pub ops: Vec<Step<u8>>,
    pub seq1: Range<usize>,
    pub seq2: Range<usize>,
}

pub trait TraceMat {
    fn reset(&mut self, newrows: usize, newcols: usize);

    /// Follow the recorded decisions from the given cell back to the alignment start.
    fn trace(&self, row: usize, col: usize) -> Result<Path>;
}
