pub use pairsim_alignment_rs::pairwise::scoring::{Preset, SubstitutionModel};
pub use pairsim_core_rs::Cancellation;
pub use pairsim_core_rs::seq::Protein;

pub use aggregator::Aggregator;
pub use cache::PairCache;
pub use config::{Config, ConfigBuilder};
pub use error::Error;
pub use partition::{Chunk, partition, total_pairs};
pub use result::{
    PairOutcome, PairResult, PairScore, Progress, RunStatistics, Similarity, SimilarityMatrix,
};
pub use scorer::{PairScorer, SmithWaterman};
pub use simmat::{SimMat, SimMatBuilder};

mod aggregator;
mod cache;
mod config;
mod engine;
mod error;
mod partition;
mod result;
mod scorer;
mod simmat;
mod worker;
