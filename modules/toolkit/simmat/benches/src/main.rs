use std::time::Instant;

use eyre::Result;
use rayon::ThreadPoolBuilder;

use pairsim_core_rs::parallelism;
use pairsim_core_rs::seq::ALPHABET;
use pairsim_simmat_rs::{Cancellation, Config, Preset, SimMat};

const THREADS: Option<usize> = None;
const SEQUENCES: usize = 500;
const MIN_LENGTH: usize = 50;
const MAX_LENGTH: usize = 400;
// Fraction of sequences that repeat an earlier one, exercises the pair caches
const DUPLICATES: f64 = 0.1;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn sequences(seed: u64) -> Vec<String> {
    let mut state = seed;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut result: Vec<String> = Vec::with_capacity(SEQUENCES);
    while result.len() < SEQUENCES {
        if !result.is_empty() && (next() % 1000) as f64 / 1000.0 < DUPLICATES {
            let copy = result[next() as usize % result.len()].clone();
            result.push(copy);
            continue;
        }
        let length = MIN_LENGTH + next() as usize % (MAX_LENGTH - MIN_LENGTH + 1);
        let seq = (0..length)
            .map(|_| ALPHABET[next() as usize % ALPHABET.len()] as char)
            .collect();
        result.push(seq);
    }
    result
}

fn main() -> Result<()> {
    let threads = parallelism::available(THREADS)?;
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .use_current_thread()
        .build()?;

    let config = Config::builder().model(Preset::Blosum62).build()?;
    let mut simmat = SimMat::builder()
        .with_config(config)
        .set_thread_pool(pool)
        .build()?;

    let sequences = sequences(0x2545_f491_4f6c_dd1d);
    let launched_at = Instant::now();
    let similarity = {
        #[cfg(feature = "dhat-heap")]
        let _profiler = dhat::Profiler::new_heap();
        simmat.run_with(&sequences, &Cancellation::new(), |progress| {
            if progress.chunks_done() % 100 == 0 {
                eprintln!(
                    "{}/{} pairs",
                    progress.pairs_done(),
                    progress.pairs_total()
                );
            }
        })?
    };

    let stats = similarity.statistics();
    println!("Threads: {threads}");
    println!("Sequences: {}", stats.total_sequences());
    println!("Comparisons: {}", stats.total_comparisons());
    println!("Elapsed: {:.2?}", launched_at.elapsed());
    println!(
        "Min / max / mean: {:?} / {:?} / {:?}",
        stats.min(),
        stats.max(),
        stats.mean()
    );
    Ok(())
}
