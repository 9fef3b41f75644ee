use derive_more::Constructor;

use crate::pairwise::scoring::{equiv, gaps, symbols};

/// Scheme assembled from independent symbol, gap and equivalence scorers.
#[derive(Clone, Debug, Constructor)]
pub struct Delegate<S, G, E> {
    pub symbols: S,
    pub gaps: G,
    pub equiv: E,
}

impl<S, G: gaps::Scorer, E> gaps::Scorer for Delegate<S, G, E> {
    type Score = G::Score;

    #[inline(always)]
    fn seq1_gap_open(&self, pos: usize) -> Self::Score {
        self.gaps.seq1_gap_open(pos)
    }

    #[inline(always)]
    fn seq1_gap_extend(&self, pos: usize) -> Self::Score {
        self.gaps.seq1_gap_extend(pos)
    }

    #[inline(always)]
    fn seq2_gap_open(&self, pos: usize) -> Self::Score {
        self.gaps.seq2_gap_open(pos)
    }

    #[inline(always)]
    fn seq2_gap_extend(&self, pos: usize) -> Self::Score {
        self.gaps.seq2_gap_extend(pos)
    }
}

impl<S: symbols::Scorer, G, E> symbols::Scorer for Delegate<S, G, E> {
    type Score = S::Score;
    type Symbol = S::Symbol;

    #[inline(always)]
    fn score(&self, posa: usize, a: &Self::Symbol, posb: usize, b: &Self::Symbol) -> Self::Score {
        self.symbols.score(posa, a, posb, b)
    }
}

impl<S, G, E: equiv::Classifier> equiv::Classifier for Delegate<S, G, E> {
    type Symbol = E::Symbol;

    #[inline(always)]
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> equiv::Type {
        self.equiv.classify(s1, s2)
    }
}

impl<S, G, E> super::Scheme for Delegate<S, G, E>
where
    S: symbols::Scorer,
    G: gaps::Scorer<Score = S::Score>,
    E: equiv::Classifier<Symbol = S::Symbol>,
{
    type Score = S::Score;
    type Symbol = S::Symbol;
}
