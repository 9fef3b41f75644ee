use derive_more::{Display, Error};

use pairsim_alignment_rs::pairwise::scoring::UnknownPreset;
use pairsim_core_rs::seq::InvalidResidue;

/// Failure categories of a similarity run. Returned wrapped into `eyre::Report`,
/// use `downcast_ref::<Error>()` to branch on them.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid run configuration, detected before any work starts.
    #[display("Invalid configuration: {_0}")]
    Configuration(#[error(not(source))] String),
    /// Input sequence with a residue outside of the amino acid alphabet.
    #[display("Sequence #{index} has invalid residue {symbol:?} at position {position}")]
    InvalidSequence {
        index: usize,
        position: usize,
        symbol: char,
    },
    /// Scoring of a single pair failed. Never aborts a run.
    #[display("Failed to score pair ({i}, {j}): {reason}")]
    PairComputation { i: usize, j: usize, reason: String },
    /// A worker died while processing a chunk. The whole run is discarded.
    #[display("Worker failed while processing chunk #{chunk}: {reason}")]
    WorkerFailure { chunk: usize, reason: String },
    #[display("Run was cancelled")]
    Cancelled,
}

impl From<InvalidResidue> for Error {
    fn from(value: InvalidResidue) -> Self {
        let (index, position, symbol) = value.dissolve();
        Error::InvalidSequence {
            index,
            position,
            symbol,
        }
    }
}

impl From<UnknownPreset> for Error {
    fn from(value: UnknownPreset) -> Self {
        Error::Configuration(value.to_string())
    }
}
