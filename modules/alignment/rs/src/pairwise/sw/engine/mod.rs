use std::marker::PhantomData;

use eyre::Result;

use tracers::Tracers;

use crate::Alignable;
use crate::pairwise::sw::{algo, storage, traceback};
use crate::pairwise::{alignment, scoring};

mod tracers;

/// Smith-Waterman engine: scans the full matrix, keeps the alignment ends selected by
/// `Storage` and recovers the alignments from `TraceMat`.
/// Buffers are reused between calls, so a single engine per thread is enough.
pub struct Engine<S, Smb, Storage, TraceMat, Scheme>
where
    S: scoring::Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
    Storage: storage::Storage + algo::Tracer<Score = S>,
    TraceMat: traceback::TraceMat + algo::Tracer<Score = S>,
{
    algo: algo::FullScan<S>,
    scoring: Scheme,
    tracers: Tracers<S, Storage, TraceMat>,
    _symbols: PhantomData<Smb>,
}

impl<S, Smb, Storage, TraceMat, Scheme> Engine<S, Smb, Storage, TraceMat, Scheme>
where
    S: scoring::Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
    Storage: storage::Storage + algo::Tracer<Score = S>,
    TraceMat: traceback::TraceMat + algo::Tracer<Score = S>,
{
    pub fn new(storage: Storage, tracemat: TraceMat, scoring: Scheme) -> Self {
        Self {
            algo: algo::FullScan::new(),
            scoring,
            tracers: Tracers::new(storage, tracemat),
            _symbols: PhantomData,
        }
    }

    pub fn with_scoring(&mut self, scoring: Scheme) {
        self.scoring = scoring;
    }

    pub fn scoring(&self) -> &Scheme {
        &self.scoring
    }

    /// Best local alignments between the two sequences. Empty if either sequence is empty
    /// or no positive-scoring alignment exists.
    pub fn scan_all<S1, S2>(&mut self, seq1: &S1, seq2: &S2) -> Result<Vec<alignment::Alignment<S>>>
    where
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        if seq1.is_empty() || seq2.is_empty() {
            return Ok(vec![]);
        }

        self.tracers.reset(seq1.len(), seq2.len());
        self.algo.scan_all(seq1, seq2, &self.scoring, &mut self.tracers);
        self.finalize(seq1, seq2)
    }

    fn finalize<S1, S2>(&mut self, seq1: &S1, seq2: &S2) -> Result<Vec<alignment::Alignment<S>>>
    where
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        let seeds = self.tracers.storage.finalize();
        let mut result = Vec::with_capacity(seeds.len());
        for seed in seeds {
            let trace = self.tracers.tracemat.trace(seed.row, seed.col)?;
            debug_assert_eq!(trace.seq1.end, seed.row + 1);
            debug_assert_eq!(trace.seq2.end, seed.col + 1);

            let steps = alignment::utils::disambiguate(
                trace.ops,
                &self.scoring,
                seq1,
                trace.seq1.start,
                seq2,
                trace.seq2.start,
            );
            result.push(alignment::Alignment::new(
                seed.score,
                steps,
                trace.seq1,
                trace.seq2,
            ));
        }
        Ok(result)
    }
}
