use ahash::HashMap;
use eyre::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};

use pairsim_core_rs::seq::Protein;
use pairsim_core_rs::{Cancellation, parallelism};

use crate::config::Config;
use crate::engine::Engine;
use crate::error::Error;
use crate::result::{Progress, Similarity};
use crate::scorer::{PairScorer, SmithWaterman};

/// All-vs-all similarity matrix of protein sequences.
///
/// ```no_run
/// use pairsim_simmat_rs::{Config, SimMat};
///
/// let config = Config::builder().model_name("blosum62").build()?;
/// let mut simmat = SimMat::new(config)?;
/// let similarity = simmat.run(&["AAAA", "AAAA", "CCCC", "CCCC"])?;
/// assert_eq!(similarity.matrix()[(0, 1)], 16.0);
/// # Ok::<(), eyre::Report>(())
/// ```
pub struct SimMat {
    config: Config,
    scorer: Box<dyn PairScorer>,
    engine: Engine,
}

impl SimMat {
    /// Smith-Waterman under the configured model on a dedicated thread pool.
    pub fn new(config: Config) -> Result<Self> {
        Self::builder().with_config(config).build()
    }

    pub fn builder() -> SimMatBuilder {
        SimMatBuilder::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn threads(&self) -> usize {
        self.engine.threads()
    }

    /// Release per-thread scorers and caches.
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    pub fn run(&mut self, sequences: &[impl AsRef<str>]) -> Result<Similarity> {
        self.run_with(sequences, &Cancellation::new(), |_| {})
    }

    /// Run with a cancellation token and a progress observer. The observer is called on the
    /// calling thread after every aggregated chunk.
    pub fn run_with(
        &mut self,
        sequences: &[impl AsRef<str>],
        cancel: &Cancellation,
        observer: impl FnMut(&Progress),
    ) -> Result<Similarity> {
        // The whole input is validated before any work starts
        let proteins = sequences
            .iter()
            .enumerate()
            .map(|(ind, seq)| Protein::new(ind, seq.as_ref()).map_err(Error::from))
            .collect::<Result<Vec<_>, _>>()?;
        self.run_proteins(&proteins, cancel, observer)
    }

    pub fn run_proteins(
        &mut self,
        proteins: &[Protein],
        cancel: &Cancellation,
        mut observer: impl FnMut(&Progress),
    ) -> Result<Similarity> {
        let ids = content_ids(proteins);
        self.engine.run(
            &self.config,
            proteins,
            &ids,
            &*self.scorer,
            cancel,
            &mut observer,
        )
    }
}

// Index of the first sequence with identical residues
fn content_ids(proteins: &[Protein]) -> Vec<usize> {
    let mut first = HashMap::<&Protein, usize>::default();
    proteins
        .iter()
        .enumerate()
        .map(|(ind, protein)| *first.entry(protein).or_insert(ind))
        .collect()
}

#[derive(Default)]
pub struct SimMatBuilder {
    config: Option<Config>,
    thread_pool: Option<ThreadPool>,
    scorer: Option<Box<dyn PairScorer>>,
}

impl SimMatBuilder {
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Run on a caller-provided pool. Its size takes precedence over `Config::workers`.
    pub fn set_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    /// Replace the default Smith-Waterman scorer. Each worker thread receives its own clone.
    pub fn set_scorer(mut self, scorer: Box<dyn PairScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn build(self) -> Result<SimMat> {
        let config = self.config.unwrap_or_default();
        let pool = match self.thread_pool {
            Some(pool) => pool,
            None => {
                let threads = parallelism::available(*config.workers())
                    .map_err(|err| Error::Configuration(err.to_string()))?;
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|ind| format!("simmat-{ind}"))
                    .build()?
            }
        };
        let scorer = self
            .scorer
            .unwrap_or_else(|| Box::new(SmithWaterman::new(config.model().model())));

        Ok(SimMat {
            config,
            scorer,
            engine: Engine::new(pool),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_ids() {
        let proteins: Vec<_> = ["AC", "", "AC", "CA", "", "AC"]
            .iter()
            .enumerate()
            .map(|(ind, seq)| Protein::new(ind, seq).unwrap())
            .collect();
        assert_eq!(content_ids(&proteins), [0, 1, 0, 3, 1, 0]);
    }
}
