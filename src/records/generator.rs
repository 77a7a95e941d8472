//! Random record batch generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::records::{NodeStatus, Record};

/// Produces fresh batches of records.
///
/// The random source is passed in by the caller so the state holder can own a
/// single seeded `StdRng` and tests can make batches reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordGenerator {
    min_records: u32,
    max_records: u32,
}

impl RecordGenerator {
    /// Create a generator for batches of `min_records..=max_records` records.
    ///
    /// Bounds are swapped if given in the wrong order and the lower bound is
    /// clamped to 1; validated configs never hit either case.
    pub fn new(min_records: u32, max_records: u32) -> Self {
        let (lo, hi) = if min_records <= max_records {
            (min_records, max_records)
        } else {
            (max_records, min_records)
        };
        Self {
            min_records: lo.max(1),
            max_records: hi.max(1),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.min_records, config.max_records)
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min_records, self.max_records)
    }

    /// Generate one batch. Ids run from 1 to the batch length.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Record> {
        let count = rng.gen_range(self.min_records..=self.max_records);
        (1..=count)
            .map(|id| {
                let status = *NodeStatus::ALL
                    .choose(&mut *rng)
                    .unwrap_or(&NodeStatus::Ok);
                Record::new(id, status)
            })
            .collect()
    }
}

impl Default for RecordGenerator {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_batch_length_within_bounds() {
        let generator = RecordGenerator::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let batch = generator.generate(&mut rng);
            assert!((10..=20).contains(&batch.len()), "len {}", batch.len());
        }
    }

    #[test]
    fn test_ids_and_names_follow_position() {
        let generator = RecordGenerator::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let batch = generator.generate(&mut rng);
            for (i, record) in batch.iter().enumerate() {
                let expected = i as u32 + 1;
                assert_eq!(record.id, expected);
                assert_eq!(record.name, format!("Node_{}", expected));
            }
        }
    }

    #[test]
    fn test_all_statuses_and_lengths_reachable() {
        let generator = RecordGenerator::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut statuses = HashSet::new();
        let mut lengths = HashSet::new();
        for _ in 0..2000 {
            let batch = generator.generate(&mut rng);
            lengths.insert(batch.len());
            statuses.extend(batch.iter().map(|r| r.status));
        }
        assert_eq!(statuses.len(), 3);
        assert_eq!(lengths, (10..=20).collect::<HashSet<usize>>());
    }

    #[test]
    fn test_same_seed_same_batch() {
        let generator = RecordGenerator::default();
        let a = generator.generate(&mut StdRng::seed_from_u64(99));
        let b = generator.generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_size_and_normalized_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let fixed = RecordGenerator::new(5, 5);
        assert_eq!(fixed.generate(&mut rng).len(), 5);

        assert_eq!(RecordGenerator::new(20, 10).bounds(), (10, 20));
        assert_eq!(RecordGenerator::new(0, 0).bounds(), (1, 1));
    }
}
