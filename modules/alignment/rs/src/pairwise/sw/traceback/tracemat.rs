use std::marker::PhantomData;

use eyre::{Result, ensure};

use crate::pairwise::sw::algo::{BestDirectionTracer, GapTracer, Tracer};
use crate::pairwise::{Op, Step, scoring};

use super::{Path, TraceMat};

// Per-cell layout: two bits for the best direction plus one bit per gap matrix telling
// whether the gap was extended (set) or opened (unset) at this cell.
const DIRECTION: u8 = 0b0011;
const START: u8 = 0b0000;
const GAP_ROW: u8 = 0b0001;
const GAP_COL: u8 = 0b0010;
const EQUIVALENT: u8 = 0b0011;
const ROW_GAP_EXTEND: u8 = 0b0100;
const COL_GAP_EXTEND: u8 = 0b1000;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    Best,
    RowGap,
    ColGap,
}

/// Dense matrix of scan decisions stored in column-major order.
#[derive(Clone, Debug, Default)]
pub struct TraceMatrix<S: scoring::Score> {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
    _phantom: PhantomData<S>,
}

impl<S: scoring::Score> TraceMatrix<S> {
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            _phantom: PhantomData,
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        col * self.rows + row
    }

    #[inline(always)]
    fn set_direction(&mut self, row: usize, col: usize, direction: u8) {
        let ind = self.index(row, col);
        self.cells[ind] = (self.cells[ind] & !DIRECTION) | direction;
    }

    #[inline(always)]
    fn set_flag(&mut self, row: usize, col: usize, flag: u8, value: bool) {
        let ind = self.index(row, col);
        if value {
            self.cells[ind] |= flag;
        } else {
            self.cells[ind] &= !flag;
        }
    }
}

impl<S: scoring::Score> BestDirectionTracer for TraceMatrix<S> {
    type Score = S;

    #[inline(always)]
    fn gap_row(&mut self, row: usize, col: usize, _: Self::Score) {
        self.set_direction(row, col, GAP_ROW);
    }

    #[inline(always)]
    fn gap_col(&mut self, row: usize, col: usize, _: Self::Score) {
        self.set_direction(row, col, GAP_COL);
    }

    #[inline(always)]
    fn equivalent(&mut self, row: usize, col: usize, _: Self::Score) {
        self.set_direction(row, col, EQUIVALENT);
    }

    #[inline(always)]
    fn none(&mut self, row: usize, col: usize) {
        self.set_direction(row, col, START);
    }
}

impl<S: scoring::Score> GapTracer for TraceMatrix<S> {
    type Score = S;

    #[inline(always)]
    fn row_gap_open(&mut self, row: usize, col: usize, _: Self::Score) {
        self.set_flag(row, col, ROW_GAP_EXTEND, false);
    }

    #[inline(always)]
    fn row_gap_extend(&mut self, row: usize, col: usize, _: Self::Score) {
        self.set_flag(row, col, ROW_GAP_EXTEND, true);
    }

    #[inline(always)]
    fn col_gap_open(&mut self, row: usize, col: usize, _: Self::Score) {
        self.set_flag(row, col, COL_GAP_EXTEND, false);
    }

    #[inline(always)]
    fn col_gap_extend(&mut self, row: usize, col: usize, _: Self::Score) {
        self.set_flag(row, col, COL_GAP_EXTEND, true);
    }
}

impl<S: scoring::Score> Tracer for TraceMatrix<S> {
    type Score = S;
}

impl<S: scoring::Score> TraceMat for TraceMatrix<S> {
    fn reset(&mut self, newrows: usize, newcols: usize) {
        self.rows = newrows;
        self.cols = newcols;
        self.cells.clear();
        self.cells.resize(newrows * newcols, START);
    }

    fn trace(&self, row: usize, col: usize) -> Result<Path> {
        ensure!(
            row < self.rows && col < self.cols,
            "Trace start ({row}, {col}) is outside of the {}x{} matrix",
            self.rows,
            self.cols
        );

        let (end1, end2) = (row + 1, col + 1);
        let (mut row, mut col) = (row, col);
        let (mut start1, mut start2) = (end1, end2);

        // Runs are collected from the alignment end towards its start
        let mut runs: Vec<(Op, usize)> = Vec::new();
        let mut push = |op: Op| match runs.last_mut() {
            Some((last, len)) if *last == op => *len += 1,
            _ => runs.push((op, 1)),
        };

        let mut state = State::Best;
        loop {
            let cell = self.cells[self.index(row, col)];
            let next = match state {
                State::Best => match cell & DIRECTION {
                    START => break,
                    GAP_ROW => {
                        state = State::RowGap;
                        continue;
                    }
                    GAP_COL => {
                        state = State::ColGap;
                        continue;
                    }
                    _ => {
                        push(Op::Equivalent);
                        (start1, start2) = (row, col);
                        match (row.checked_sub(1), col.checked_sub(1)) {
                            (Some(r), Some(c)) => Some((r, c)),
                            _ => None,
                        }
                    }
                },
                State::RowGap => {
                    push(Op::GapFirst);
                    start1 = row;
                    if cell & ROW_GAP_EXTEND == 0 {
                        state = State::Best;
                    }
                    row.checked_sub(1).map(|r| (r, col))
                }
                State::ColGap => {
                    push(Op::GapSecond);
                    start2 = col;
                    if cell & COL_GAP_EXTEND == 0 {
                        state = State::Best;
                    }
                    col.checked_sub(1).map(|c| (row, c))
                }
            };

            match next {
                Some((r, c)) => (row, col) = (r, c),
                // Reached the matrix border
                None => break,
            }
        }
        ensure!(
            state == State::Best,
            "Traceback from ({}, {}) ended inside a gap",
            end1 - 1,
            end2 - 1
        );

        let ops = runs
            .into_iter()
            .rev()
            .flat_map(|(op, len)| Step::runs(op, len))
            .collect();
        Ok(Path {
            ops,
            seq1: start1..end1,
            seq2: start2..end2,
        })
    }
}
