use derive_getters::Getters;
use eyre::Result;

use pairsim_alignment_rs::pairwise::scoring::Preset;

use crate::error::Error;

pub const DEFAULT_CACHE_CAPACITY: usize = 1024;
pub const DEFAULT_CHUNKS_PER_WORKER: usize = 4;

/// Immutable run configuration, shared by reference with every worker.
#[derive(Clone, PartialEq, Eq, Debug, Getters)]
pub struct Config {
    model: Preset,
    /// Number of worker threads, host logical cores when `None`
    workers: Option<usize>,
    /// Per-worker LRU capacity, 0 disables caching
    cache_capacity: usize,
    chunks_per_worker: usize,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: Preset::default(),
            workers: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            chunks_per_worker: DEFAULT_CHUNKS_PER_WORKER,
        }
    }
}

#[derive(Clone, Debug, Default)]
enum Model {
    #[default]
    Default,
    Preset(Preset),
    Named(String),
}

#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    model: Model,
    workers: Option<usize>,
    cache_capacity: Option<usize>,
    cache_disabled: bool,
    chunks_per_worker: Option<usize>,
}

impl ConfigBuilder {
    pub fn model(mut self, preset: Preset) -> Self {
        self.model = Model::Preset(preset);
        self
    }

    /// Select the substitution model by name, resolved in `build`.
    pub fn model_name(mut self, name: impl Into<String>) -> Self {
        self.model = Model::Named(name.into());
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    pub fn disable_cache(mut self) -> Self {
        self.cache_disabled = true;
        self
    }

    pub fn chunks_per_worker(mut self, chunks: usize) -> Self {
        self.chunks_per_worker = Some(chunks);
        self
    }

    pub fn build(self) -> Result<Config> {
        let model = match self.model {
            Model::Default => Preset::default(),
            Model::Preset(preset) => preset,
            Model::Named(name) => name.parse::<Preset>().map_err(Error::from)?,
        };

        if self.workers == Some(0) {
            return Err(Error::Configuration("Number of workers must be positive".into()).into());
        }

        let cache_capacity = match (self.cache_disabled, self.cache_capacity) {
            (true, _) => 0,
            (false, Some(0)) => {
                return Err(Error::Configuration(
                    "Cache capacity must be positive, use disable_cache() to turn caching off"
                        .into(),
                )
                .into());
            }
            (false, Some(capacity)) => capacity,
            (false, None) => DEFAULT_CACHE_CAPACITY,
        };

        let chunks_per_worker = self.chunks_per_worker.unwrap_or(DEFAULT_CHUNKS_PER_WORKER);
        if chunks_per_worker == 0 {
            return Err(
                Error::Configuration("Number of chunks per worker must be positive".into()).into(),
            );
        }

        Ok(Config {
            model,
            workers: self.workers,
            cache_capacity,
            chunks_per_worker,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(builder: ConfigBuilder) -> Error {
        builder
            .build()
            .unwrap_err()
            .downcast::<Error>()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(*config.model(), Preset::Blosum45);
        assert_eq!(*config.workers(), None);
        assert_eq!(*config.cache_capacity(), 1024);
        assert_eq!(*config.chunks_per_worker(), 4);
    }

    #[test]
    fn test_overrides() {
        let config = Config::builder()
            .model_name("PAM70")
            .workers(3)
            .cache_capacity(16)
            .chunks_per_worker(1)
            .build()
            .unwrap();
        assert_eq!(*config.model(), Preset::Pam70);
        assert_eq!(*config.workers(), Some(3));
        assert_eq!(*config.cache_capacity(), 16);
        assert_eq!(*config.chunks_per_worker(), 1);

        let config = Config::builder()
            .model(Preset::Blosum80)
            .cache_capacity(0)
            .disable_cache()
            .build()
            .unwrap();
        assert_eq!(*config.model(), Preset::Blosum80);
        assert_eq!(*config.cache_capacity(), 0);
    }

    #[test]
    fn test_rejected() {
        for builder in [
            Config::builder().workers(0),
            Config::builder().cache_capacity(0),
            Config::builder().chunks_per_worker(0),
            Config::builder().model_name("blosum100"),
        ] {
            assert!(matches!(category(builder), Error::Configuration(_)));
        }
    }
}
