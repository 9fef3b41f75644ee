pub use alignable::Alignable;
pub use pairsim_core_rs::num::Score;

mod alignable;
pub mod pairwise;
