use dyn_clone::DynClone;
use eyre::{Result, ensure};

use pairsim_alignment_rs::pairwise::scoring::SubstitutionModel;
use pairsim_alignment_rs::pairwise::sw;
use pairsim_core_rs::seq::{AminoAcid, Protein};

use crate::result::PairScore;

/// Scores a single pair of sequences. Every worker owns a clone of the scorer and may keep
/// scratch buffers in it between calls.
pub trait PairScorer: DynClone + Send + Sync {
    fn score(&mut self, seq1: &Protein, seq2: &Protein) -> Result<PairScore>;
}

dyn_clone::clone_trait_object!(PairScorer);

type Engine = sw::Engine<
    i32,
    AminoAcid,
    sw::storage::Best<i32>,
    sw::traceback::TraceMatrix<i32>,
    SubstitutionModel,
>;

/// Affine-gap Smith-Waterman under a substitution model.
pub struct SmithWaterman {
    engine: Engine,
}

impl SmithWaterman {
    pub fn new(model: SubstitutionModel) -> Self {
        Self {
            engine: Engine::new(
                sw::storage::Best::new(),
                sw::traceback::TraceMatrix::new(),
                model,
            ),
        }
    }

    pub fn model(&self) -> &SubstitutionModel {
        self.engine.scoring()
    }
}

// Scratch buffers are not worth copying
impl Clone for SmithWaterman {
    fn clone(&self) -> Self {
        Self::new(*self.model())
    }
}

impl PairScorer for SmithWaterman {
    fn score(&mut self, seq1: &Protein, seq2: &Protein) -> Result<PairScore> {
        // Every diagonal step adds at most the largest table entry, gaps only subtract
        let model = self.engine.scoring();
        let bound = seq1.len().min(seq2.len()) as i64 * model.max_substitution() as i64;
        ensure!(
            bound <= i32::MAX as i64,
            "Alignment score of {} x {} residues under {} may overflow",
            seq1.len(),
            seq2.len(),
            model.preset()
        );

        let best = self.engine.scan_all(seq1, seq2)?.pop();
        Ok(match best {
            Some(alignment) => PairScore::new(
                *alignment.score() as f64,
                alignment.matches(),
                alignment.similar(),
                alignment.len(),
            ),
            None => PairScore::default(),
        })
    }
}
