//! Serialized access to the current record batch and request counter.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::records::{Record, RecordGenerator};

/// What one `/data` request observed.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Request count after this request's increment.
    pub request_count: u64,
    /// Whether this request replaced the batch.
    pub regenerated: bool,
    /// The batch to serve.
    pub records: Arc<Vec<Record>>,
}

/// Read-only view of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub request_count: u64,
    pub generations: u64,
    pub record_count: usize,
}

struct Inner {
    records: Arc<Vec<Record>>,
    request_count: u64,
    generations: u64,
    generator: RecordGenerator,
    regenerate_every: u64,
    rng: StdRng,
}

impl Inner {
    fn regenerate(&mut self) {
        let batch = self.generator.generate(&mut self.rng);
        self.records = Arc::new(batch);
        self.generations += 1;
    }
}

/// Service-wide data state, owned by the server instance.
///
/// Everything sits behind one mutex so the increment, the optional
/// regeneration and the read of a request form a single unit.
pub struct DataState {
    inner: Mutex<Inner>,
}

impl DataState {
    /// Create an empty state with an entropy-seeded random source.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an empty state with a reproducible random source.
    pub fn with_seed(config: &GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GeneratorConfig, rng: StdRng) -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Arc::new(Vec::new()),
                request_count: 0,
                generations: 0,
                generator: RecordGenerator::from_config(config),
                regenerate_every: config.regenerate_every.max(1),
                rng,
            }),
        }
    }

    /// Count a `/data` request and return the batch it should see.
    ///
    /// Requests whose count is a multiple of `regenerate_every` get a fresh
    /// batch. An empty batch is always filled, which covers the first request.
    pub fn next_snapshot(&self) -> Snapshot {
        let mut inner = self.inner.lock();
        inner.request_count += 1;

        let mut regenerated = false;
        if inner.request_count % inner.regenerate_every == 0 {
            inner.regenerate();
            regenerated = true;
        }
        if inner.records.is_empty() {
            inner.regenerate();
            regenerated = true;
        }

        Snapshot {
            request_count: inner.request_count,
            regenerated,
            records: Arc::clone(&inner.records),
        }
    }

    pub fn stats(&self) -> Stats {
        let inner = self.inner.lock();
        Stats {
            request_count: inner.request_count,
            generations: inner.generations,
            record_count: inner.records.len(),
        }
    }

    /// Swap in new generator settings. The current batch and counters are kept.
    pub fn apply_config(&self, config: &GeneratorConfig) {
        let mut inner = self.inner.lock();
        inner.generator = RecordGenerator::from_config(config);
        inner.regenerate_every = config.regenerate_every.max(1);
    }
}

impl Default for DataState {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}
