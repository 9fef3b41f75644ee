pub use local::FullScan;

use crate::pairwise::scoring;

mod local;

// Smith-Waterman scans run column-by-column (columns follow the second sequence,
// rows the first one) and report every decision to a tracer.
// For each cell exactly one of the BestDirectionTracer callbacks is issued, preceded by
// one row gap and one column gap callback.

#[allow(unused_variables)]
pub trait BestDirectionTracer {
    type Score: scoring::Score;

    /// The best path ends with a gap spanning rows, i.e. consuming the first sequence.
    fn gap_row(&mut self, row: usize, col: usize, score: Self::Score) {}
    /// The best path ends with a gap spanning columns, i.e. consuming the second sequence.
    fn gap_col(&mut self, row: usize, col: usize, score: Self::Score) {}
    /// The best path ends with a diagonal step.
    fn equivalent(&mut self, row: usize, col: usize, score: Self::Score) {}
    /// No positive-scoring path ends here.
    fn none(&mut self, row: usize, col: usize) {}
}

#[allow(unused_variables)]
pub trait GapTracer {
    type Score: scoring::Score;

    fn row_gap_open(&mut self, row: usize, col: usize, score: Self::Score) {}
    fn row_gap_extend(&mut self, row: usize, col: usize, score: Self::Score) {}

    fn col_gap_open(&mut self, row: usize, col: usize, score: Self::Score) {}
    fn col_gap_extend(&mut self, row: usize, col: usize, score: Self::Score) {}
}

#[allow(unused_variables)]
pub trait Tracer:
    BestDirectionTracer<Score = <Self as Tracer>::Score> + GapTracer<Score = <Self as Tracer>::Score>
{
    type Score: scoring::Score;

    fn col_start(&mut self, col: usize) {}
    fn col_end(&mut self, col: usize) {}
}
