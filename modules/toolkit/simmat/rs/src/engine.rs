use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Instant;

use eyre::{Result, ensure};
use rayon::ThreadPool;
use thread_local::ThreadLocal;

use pairsim_core_rs::Cancellation;
use pairsim_core_rs::seq::Protein;

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::Error;
use crate::partition::{Chunk, partition, total_pairs};
use crate::result::{PairOutcome, Progress, Similarity};
use crate::scorer::PairScorer;
use crate::worker::Worker;

type Message<'a> = (&'a Chunk, std::result::Result<Vec<PairOutcome>, Error>);

/// Parallel dispatcher. Chunks are scored on the pool by thread-local workers, the calling
/// thread aggregates them in arrival order.
pub struct Engine {
    pool: ThreadPool,
    workers: ThreadLocal<RefCell<Worker>>,
}

impl Engine {
    pub fn new(pool: ThreadPool) -> Self {
        Self {
            pool,
            workers: ThreadLocal::new(),
        }
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Drop all worker states together with their caches.
    pub fn clear(&mut self) {
        self.workers.clear();
    }

    pub fn run(
        &mut self,
        config: &Config,
        proteins: &[Protein],
        ids: &[usize],
        scorer: &(dyn PairScorer + 'static),
        cancel: &Cancellation,
        observer: &mut dyn FnMut(&Progress),
    ) -> Result<Similarity> {
        if cancel.is_cancelled() {
            log::warn!("Similarity run was cancelled before it started");
            return Err(Error::Cancelled.into());
        }

        let n = proteins.len();
        let pairs_total = total_pairs(n);
        let chunks = partition(n, self.threads() * config.chunks_per_worker());
        log::info!(
            "Computing similarities of {} sequences: {} pairs in {} chunks, {} workers, {} model",
            n,
            pairs_total,
            chunks.len(),
            self.threads(),
            config.model()
        );
        let launched_at = Instant::now();

        // Soft-reset all workers
        let cache_capacity = *config.cache_capacity();
        for w in self.workers.iter_mut() {
            w.get_mut().reset(dyn_clone::clone_box(scorer), cache_capacity);
        }

        let mut aggregator = Aggregator::new(n);
        let mut failure: Option<Error> = None;
        let has_failed = AtomicBool::new(false);
        let workers = &self.workers;
        let pool = &self.pool;

        let (tx, rx) = mpsc::channel::<Message>();
        pool.in_place_scope(|s| {
            for chunk in &chunks {
                let tx = tx.clone();
                let has_failed = &has_failed;
                s.spawn(move |_| {
                    // Terminate early if any other chunk has failed
                    if has_failed.load(Ordering::Relaxed) {
                        return;
                    }
                    let result = if cancel.is_cancelled() {
                        Err(Error::Cancelled)
                    } else {
                        panic::catch_unwind(AssertUnwindSafe(|| {
                            let mut worker = workers
                                .get_or(|| {
                                    RefCell::new(Worker::new(
                                        dyn_clone::clone_box(scorer),
                                        cache_capacity,
                                    ))
                                })
                                .borrow_mut();
                            worker.process(chunk, proteins, ids, cancel)
                        }))
                        .unwrap_or_else(|payload| {
                            Err(Error::WorkerFailure {
                                chunk: *chunk.index(),
                                reason: panic_message(&*payload),
                            })
                        })
                    };
                    if result.is_err() {
                        has_failed.store(true, Ordering::Relaxed);
                    }
                    // The receiver lives until the scope ends
                    let _ = tx.send((chunk, result));
                });
            }
            drop(tx);

            let (mut chunks_done, mut pairs_done) = (0, 0);
            while let Some((chunk, result)) = receive(&rx, pool) {
                match result {
                    Ok(outcomes) if failure.is_none() => {
                        for outcome in outcomes {
                            aggregator.apply(outcome);
                        }
                        chunks_done += 1;
                        pairs_done += chunk.len();

                        let progress =
                            Progress::new(chunks_done, chunks.len(), pairs_done, pairs_total);
                        log::debug!(
                            "Aggregated chunk #{} ({}/{} chunks, {}/{} pairs)",
                            chunk.index(),
                            chunks_done,
                            chunks.len(),
                            pairs_done,
                            pairs_total
                        );
                        observer(&progress);
                    }
                    Ok(_) => {}
                    Err(err) => {
                        if let Error::WorkerFailure { .. } = err {
                            log::error!("{err}");
                        }
                        // Worker failures take precedence over cancellation
                        let replace = match &failure {
                            None => true,
                            Some(Error::Cancelled) => matches!(err, Error::WorkerFailure { .. }),
                            Some(_) => false,
                        };
                        if replace {
                            failure = Some(err);
                        }
                    }
                }
            }
        });

        if let Some(err) = failure {
            match err {
                Error::Cancelled => log::warn!("Similarity run was cancelled"),
                // Worker states are not trusted after a panic
                _ => self.workers.clear(),
            }
            return Err(err.into());
        }
        ensure!(
            aggregator.processed() == pairs_total,
            "Only {} out of {} pairs were aggregated",
            aggregator.processed(),
            pairs_total
        );

        let (hits, misses) = self
            .workers
            .iter_mut()
            .map(|w| {
                let cache = w.get_mut().cache();
                (cache.hits(), cache.misses())
            })
            .fold((0, 0), |acc, x| (acc.0 + x.0, acc.1 + x.1));
        log::debug!("Pair caches: {hits} hits, {misses} misses");

        let similarity = aggregator.finish();
        let stats = similarity.statistics();
        log::info!(
            "Similarity run finished in {:.2?}: {} pairs ({} failed), min {:?}, max {:?}, mean {:?}",
            launched_at.elapsed(),
            stats.processed_pairs(),
            stats.failed_pairs(),
            stats.min(),
            stats.max(),
            stats.mean()
        );
        Ok(similarity)
    }
}

// Blocks until the next message. When the caller is one of the pool threads it keeps
// executing pending jobs instead, otherwise a single-thread pool would never progress.
fn receive<T>(rx: &Receiver<T>, pool: &ThreadPool) -> Option<T> {
    if pool.current_thread_index().is_none() {
        return rx.recv().ok();
    }
    loop {
        match rx.try_recv() {
            Ok(msg) => return Some(msg),
            Err(TryRecvError::Disconnected) => return None,
            Err(TryRecvError::Empty) => {
                if !matches!(rayon::yield_now(), Some(rayon::Yield::Executed)) {
                    std::thread::yield_now();
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::ThreadPoolBuilder;

    use crate::scorer::SmithWaterman;

    #[test]
    fn test_panic_message() {
        let payload = panic::catch_unwind(|| panic!("boom {}", 42)).unwrap_err();
        assert_eq!(panic_message(&*payload), "boom 42");

        let payload = panic::catch_unwind(|| panic!("static")).unwrap_err();
        assert_eq!(panic_message(&*payload), "static");
    }

    #[test]
    fn test_receive_on_pool_thread() {
        let pool = ThreadPoolBuilder::new()
            .num_threads(1)
            .use_current_thread()
            .build()
            .unwrap();
        assert_eq!(pool.current_thread_index(), Some(0));

        let total = pool.in_place_scope(|s| {
            let (tx, rx) = mpsc::channel();
            for x in 0..10 {
                let tx = tx.clone();
                s.spawn(move |_| {
                    let _ = tx.send(x);
                });
            }
            drop(tx);

            let mut total = 0;
            while let Some(x) = receive(&rx, &pool) {
                total += x;
            }
            total
        });
        assert_eq!(total, 45);
    }

    #[test]
    fn test_run_with_boxed_scorer() {
        let pool = ThreadPoolBuilder::new().num_threads(2).build().unwrap();
        let mut engine = Engine::new(pool);
        let config = Config::builder().chunks_per_worker(2).build().unwrap();
        let scorer: Box<dyn PairScorer> = Box::new(SmithWaterman::new(config.model().model()));

        let proteins: Vec<_> = ["AAAA", "AAAA", "CCCC", "WCW"]
            .iter()
            .enumerate()
            .map(|(ind, seq)| Protein::new(ind, seq).unwrap())
            .collect();
        let ids = [0, 0, 2, 3];

        // Workers are created on the first run and reset on the second one
        let mut runs = Vec::new();
        for _ in 0..2 {
            let mut chunks = 0;
            let similarity = engine
                .run(
                    &config,
                    &proteins,
                    &ids,
                    &*scorer,
                    &Cancellation::new(),
                    &mut |_: &Progress| chunks += 1,
                )
                .unwrap();
            assert!(chunks > 0);
            assert_eq!(*similarity.statistics().processed_pairs(), 6);
            assert!(similarity.matrix().is_symmetric());
            runs.push(similarity);
        }
        assert_eq!(runs[0].matrix(), runs[1].matrix());
        assert_eq!(runs[0].pairs(), runs[1].pairs());
    }
}
