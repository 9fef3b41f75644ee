pub use delegate::Delegate;
pub use model::{Preset, SubstitutionModel, UnknownPreset};

pub use crate::Score;

mod delegate;
pub mod equiv;
pub mod gaps;
pub mod matrices;
mod model;
pub mod symbols;

/// Everything the alignment engine needs to score and annotate an alignment.
pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<Score = <Self as Scheme>::Score, Symbol = <Self as Scheme>::Symbol>
    + equiv::Classifier<Symbol = <Self as Scheme>::Symbol>
{
    type Score: Score;
    type Symbol;
}

pub fn compose<S, G, E>(symbols: S, gaps: G, equiv: E) -> Delegate<S, G, E>
where
    S: symbols::Scorer,
    G: gaps::Scorer<Score = S::Score>,
    E: equiv::Classifier<Symbol = S::Symbol>,
{
    Delegate::new(symbols, gaps, equiv)
}
