use std::thread::available_parallelism;

use eyre::{ensure, Result};

fn _normalize(requested: Option<usize>, max: usize) -> Result<usize> {
    match requested {
        None => Ok(max.max(1)),
        Some(workers) => {
            ensure!(
                workers > 0,
                "Number of workers must be a positive integer, got {workers}"
            );
            Ok(workers)
        }
    }
}

/// Resolve the number of workers for a run. `None` means "one worker per logical core".
/// Explicit requests are honored as is, even when they exceed the number of cores.
pub fn available(requested: Option<usize>) -> Result<usize> {
    let max = match requested {
        Some(_) => 1,
        None => available_parallelism()?.get(),
    };
    _normalize(requested, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallelism_normalization() {
        for (workers, max, expected) in [
            (None, 4, 4),
            (None, 0, 1),
            (Some(1), 4, 1),
            (Some(3), 4, 3),
            (Some(16), 4, 16),
        ] {
            assert_eq!(_normalize(workers, max).unwrap(), expected);
        }
        assert!(_normalize(Some(0), 4).is_err());
    }

    #[test]
    fn test_default_is_positive() {
        assert!(available(None).unwrap() >= 1);
    }
}
