use std::cmp::max;

use crate::Alignable;
use crate::pairwise::scoring;

use super::Tracer;

/// Affine-gap local alignment over every cell of the (seq1 x seq2) matrix.
///
/// Three quantities are tracked for each cell: the best local score, the best score of a
/// path ending with a row gap and the best score of a path ending with a column gap.
/// Only the previous column is kept in memory, the decisions themselves are forwarded
/// to the tracer.
#[derive(Clone, Debug, Default)]
pub struct FullScan<S: scoring::Score> {
    best: Vec<S>,
    colgap: Vec<S>,
}

impl<S: scoring::Score> FullScan<S> {
    pub fn new() -> Self {
        Self {
            best: Vec::new(),
            colgap: Vec::new(),
        }
    }

    pub fn scan_all<Seq1, Seq2, Scheme, T>(
        &mut self,
        seq1: &Seq1,
        seq2: &Seq2,
        scoring: &Scheme,
        tracer: &mut T,
    ) where
        Seq1: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol>,
        Seq2: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol>,
        Scheme: scoring::Scheme<Score = S>,
        T: Tracer<Score = S>,
    {
        let rows = seq1.len();
        self.best.clear();
        self.best.resize(rows, S::zero());
        self.colgap.clear();
        self.colgap.resize(rows, S::zero());

        for col in 0..seq2.len() {
            tracer.col_start(col);
            let s2 = seq2.at(col);

            // Cells above the first row score zero
            let mut diag = S::zero();
            let mut up = S::zero();
            let mut rowgap = S::zero();

            for row in 0..rows {
                let open = up + scoring.seq1_gap_open(row);
                let extend = rowgap + scoring.seq1_gap_extend(row);
                rowgap = if row > 0 && extend > open {
                    tracer.row_gap_extend(row, col, extend);
                    extend
                } else {
                    tracer.row_gap_open(row, col, open);
                    open
                };

                let left = self.best[row];
                let open = left + scoring.seq2_gap_open(col);
                let extend = self.colgap[row] + scoring.seq2_gap_extend(col);
                let colgap = if col > 0 && extend > open {
                    tracer.col_gap_extend(row, col, extend);
                    extend
                } else {
                    tracer.col_gap_open(row, col, open);
                    open
                };
                self.colgap[row] = colgap;

                let equiv = diag + scoring.score(row, seq1.at(row), col, s2);
                diag = left;

                // Ties: diagonal first, then row gap, then column gap
                let best = max(equiv, max(rowgap, colgap));
                let best = if best <= S::zero() {
                    tracer.none(row, col);
                    S::zero()
                } else if equiv == best {
                    tracer.equivalent(row, col, best);
                    best
                } else if rowgap == best {
                    tracer.gap_row(row, col, best);
                    best
                } else {
                    tracer.gap_col(row, col, best);
                    best
                };

                self.best[row] = best;
                up = best;
            }
            tracer.col_end(col);
        }
    }
}
