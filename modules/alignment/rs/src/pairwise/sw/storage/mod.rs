pub use best::Best;

use crate::pairwise::scoring;
use crate::pairwise::sw::algo::Tracer;

mod best;

/// Cell where an optimal local alignment ends.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AlignmentSeed<S: scoring::Score> {
    pub row: usize,
    pub col: usize,
    pub score: S,
}

pub trait Storage: Tracer {
    fn reset(&mut self, newrows: usize, newcols: usize);

    fn finalize(&mut self) -> Vec<AlignmentSeed<<Self as Tracer>::Score>>;
}
