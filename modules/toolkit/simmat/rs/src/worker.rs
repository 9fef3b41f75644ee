use pairsim_core_rs::Cancellation;
use pairsim_core_rs::seq::Protein;

use crate::cache::PairCache;
use crate::error::Error;
use crate::partition::Chunk;
use crate::result::{PairOutcome, PairResult, PairScore};
use crate::scorer::PairScorer;

/// Per-thread state: a private scorer and a private LRU cache. Never shared between threads.
pub struct Worker {
    scorer: Box<dyn PairScorer>,
    // (content id of seq1, content id of seq2) -> score
    cache: PairCache<(usize, usize), PairScore>,
}

impl Worker {
    pub fn new(scorer: Box<dyn PairScorer>, cache_capacity: usize) -> Self {
        Self {
            scorer,
            cache: PairCache::new(cache_capacity),
        }
    }

    /// Prepare the worker for a new run. Content ids are only meaningful within a run,
    /// cached entries are dropped.
    pub fn reset(&mut self, scorer: Box<dyn PairScorer>, cache_capacity: usize) {
        self.scorer = scorer;
        self.cache.reset(cache_capacity);
    }

    pub fn cache(&self) -> &PairCache<(usize, usize), PairScore> {
        &self.cache
    }

    /// Score every pair of the chunk. `ids[k]` is the content id of `proteins[k]`: equal ids
    /// mean identical residues. Scoring failures are reported per pair, only cancellation
    /// interrupts the chunk.
    pub fn process(
        &mut self,
        chunk: &Chunk,
        proteins: &[Protein],
        ids: &[usize],
        cancel: &Cancellation,
    ) -> Result<Vec<PairOutcome>, Error> {
        let (hits, misses) = (self.cache.hits(), self.cache.misses());

        let mut outcomes = Vec::with_capacity(*chunk.len());
        for (i, j) in chunk.pairs() {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let (seq1, seq2) = (&proteins[i], &proteins[j]);
            let key = (ids[i], ids[j]);
            let score = match self.cache.get(&key) {
                Some(score) => Ok(score),
                None => self.scorer.score(seq1, seq2).inspect(|score| {
                    self.cache.put(key, *score);
                }),
            };

            outcomes.push(match score {
                Ok(score) => PairOutcome::Scored(PairResult::new(
                    i,
                    j,
                    &score,
                    seq1.len(),
                    seq2.len(),
                )),
                Err(err) => PairOutcome::Failed {
                    i,
                    j,
                    reason: format!("{err:#}"),
                },
            });
        }

        log::trace!(
            "Chunk #{}: {} pairs, {} cache hits, {} misses",
            chunk.index(),
            chunk.len(),
            self.cache.hits() - hits,
            self.cache.misses() - misses
        );
        Ok(outcomes)
    }
}
