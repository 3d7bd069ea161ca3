use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A sampler that uniformly samples indices from a dataset.
///
/// Like [`super::BalancedSampler`], randomness is injectable: with a base
/// seed, each epoch derives its RNG from `seed + epoch` and is reproducible
/// run-to-run; without one, every epoch draws from OS entropy.
#[derive(Debug)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    base_seed: Option<u64>,
    epoch: AtomicUsize,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it
    ///   defaults to the dataset size.
    /// * `seed`: Base seed for the per-epoch draws, `None` for OS entropy.
    pub fn new(replacement: bool, num_samples: Option<usize>, seed: Option<u64>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            base_seed: seed,
            epoch: AtomicUsize::new(0),
        }
    }

    fn epoch_rng(&self) -> StdRng {
        let epoch = self.epoch.fetch_add(1, Ordering::Relaxed) as u64;
        match self.base_seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(epoch)),
            None => StdRng::from_entropy(),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        let mut rng = self.epoch_rng();
        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);

        if self.replacement {
            let indices: Vec<usize> = (0..actual_num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect();
            Box::new(indices.into_iter())
        } else {
            if actual_num_samples > dataset_len {
                log::warn!(
                    "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement. \
                     Returning empty iterator.",
                    actual_num_samples,
                    dataset_len
                );
                return Box::new(std::iter::empty());
            }
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(&mut rng);
            indices.truncate(actual_num_samples);
            Box::new(indices.into_iter())
        }
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.num_samples.unwrap_or(dataset_len)
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
