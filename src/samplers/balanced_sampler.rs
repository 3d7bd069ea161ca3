use super::label_source::LabelSource;
use super::sampling_factor::SamplingFactor;
use super::traits::Sampler;
use crate::datasets::Dataset;
use crate::error::EquisampleError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A sampler that rebalances an imbalanced dataset by over- or
/// under-sampling every class to one uniform target size.
///
/// At construction the sampler resolves one label per dataset index, groups
/// the indices by class, and derives the per-class target size from a
/// [`SamplingFactor`]. Each epoch then yields exactly
/// `num_classes * class_size` indices: classes smaller than the target are
/// extended by cycling through their own indices, classes larger than the
/// target contribute a distinct subset. Cycling means that within one epoch
/// a small class's items are reused as evenly as possible, instead of the
/// skip-or-repeat lottery of independent draws with replacement.
///
/// With `shuffle` enabled, every epoch permutes each class's indices before
/// cycling and permutes the final sequence globally; a base seed makes the
/// per-epoch permutations reproducible. With `shuffle` disabled the
/// sequence is built once, in natural index order, and replayed identically
/// every epoch.
///
/// All validation happens here, before training starts: `iter` never fails.
///
/// ```
/// use equisample::samplers::{BalancedSampler, LabelSource, Sampler, SamplingFactor};
///
/// // 2 items of class "cat", 4 items of class "dog".
/// let labels = vec!["dog", "cat", "dog", "dog", "cat", "dog"];
/// let sampler = BalancedSampler::new(
///     6,
///     LabelSource::Explicit(labels),
///     SamplingFactor::OVERSAMPLING,
///     None,
///     false,
///     None,
/// )
/// .unwrap();
/// assert_eq!(sampler.len(6), 8); // 2 classes x 4 indices each
/// ```
#[derive(Debug)]
pub struct BalancedSampler<L> {
    /// Distinct labels in first-seen order. This order is the class
    /// iteration order of the unshuffled sequence, stable across epochs.
    classes: Vec<L>,
    /// Natural dataset indices of each class, aligned with `classes`.
    /// Invariant: the lists partition `0..dataset_len` exactly.
    class_indices: Vec<Vec<usize>>,
    /// Uniform per-class output size.
    class_size: usize,
    shuffle: bool,
    base_seed: Option<u64>,
    epoch: AtomicUsize,
    /// The memoized epoch sequence when `shuffle` is disabled.
    fixed_sequence: Option<Vec<usize>>,
}

impl<L> BalancedSampler<L>
where
    L: Clone + Hash + Eq + Debug,
{
    /// Creates a `BalancedSampler` from a label source.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    /// * `labels` - Where to obtain the label of every item, see
    ///   [`LabelSource`].
    /// * `sampling_factor` - The over/under-sampling control, see
    ///   [`SamplingFactor`].
    /// * `num_classes` - If `Some`, the expected number of distinct
    ///   classes; a mismatch with the resolved labels is rejected.
    /// * `shuffle` - If `true`, every epoch is independently permuted.
    /// * `seed` - Base seed for the per-epoch permutations. `None` draws
    ///   from OS entropy, so concurrent workers each randomize
    ///   independently.
    ///
    /// # Errors
    ///
    /// * `EmptyDataset` if `dataset_len` is 0.
    /// * `Configuration` if label resolution yields the wrong number of
    ///   labels, `num_classes` does not match the distinct labels, or the
    ///   sampling factor is invalid.
    pub fn new(
        dataset_len: usize,
        labels: LabelSource<L>,
        sampling_factor: SamplingFactor,
        num_classes: Option<usize>,
        shuffle: bool,
        seed: Option<u64>,
    ) -> Result<Self, EquisampleError> {
        if dataset_len == 0 {
            return Err(EquisampleError::EmptyDataset {
                context: "cannot balance a dataset with no items".to_string(),
            });
        }
        let labels = labels.resolve(dataset_len)?;
        let (classes, class_indices) = group_by_label(labels);
        Self::from_parts(classes, class_indices, sampling_factor, num_classes, shuffle, seed)
    }

    /// Creates a `BalancedSampler` reading labels out of the dataset
    /// itself: the label of item `i` is the second element of
    /// `dataset.get(i)`.
    ///
    /// # Errors
    ///
    /// As [`BalancedSampler::new`], plus `DatasetShape` if a `(data,
    /// label)` pair cannot be read at some index.
    pub fn from_dataset<D, T>(
        dataset: &D,
        sampling_factor: SamplingFactor,
        num_classes: Option<usize>,
        shuffle: bool,
        seed: Option<u64>,
    ) -> Result<Self, EquisampleError>
    where
        D: Dataset<Item = (T, L)>,
    {
        let mut labels = Vec::with_capacity(dataset.len());
        for index in 0..dataset.len() {
            let (_, label) =
                dataset
                    .get(index)
                    .map_err(|source| EquisampleError::DatasetShape {
                        index,
                        message: source.to_string(),
                    })?;
            labels.push(label);
        }
        Self::new(
            dataset.len(),
            LabelSource::Explicit(labels),
            sampling_factor,
            num_classes,
            shuffle,
            seed,
        )
    }

    fn from_parts(
        classes: Vec<L>,
        class_indices: Vec<Vec<usize>>,
        sampling_factor: SamplingFactor,
        num_classes: Option<usize>,
        shuffle: bool,
        seed: Option<u64>,
    ) -> Result<Self, EquisampleError> {
        if let Some(expected) = num_classes {
            if expected != classes.len() {
                return Err(EquisampleError::config(format!(
                    "num_classes is {expected} but the labels resolve to {} distinct classes",
                    classes.len()
                )));
            }
        }

        // The wraparound selection reduces modulo each class's natural
        // count, so no class may be empty.
        let mut min_count = usize::MAX;
        let mut max_count = 0;
        for (position, indices) in class_indices.iter().enumerate() {
            if indices.is_empty() {
                return Err(EquisampleError::EmptyDataset {
                    context: format!(
                        "class {:?} has no indices to sample from",
                        classes[position]
                    ),
                });
            }
            min_count = min_count.min(indices.len());
            max_count = max_count.max(indices.len());
        }

        let class_size = sampling_factor.class_size(min_count, max_count)?;

        let mut sampler = BalancedSampler {
            classes,
            class_indices,
            class_size,
            shuffle,
            base_seed: seed,
            epoch: AtomicUsize::new(0),
            fixed_sequence: None,
        };
        if !shuffle {
            sampler.fixed_sequence = Some(sampler.build_in_order());
        }
        Ok(sampler)
    }
}

impl BalancedSampler<usize> {
    /// Creates a `BalancedSampler` from per-class index lists instead of
    /// per-item labels: `class_indices[c]` holds the dataset indices
    /// belonging to class `c`, and the class label is its position.
    ///
    /// # Errors
    ///
    /// As [`BalancedSampler::new`], plus `Configuration` if the lists are
    /// not an exact partition of `0..dataset_len` (an index out of range,
    /// repeated across classes, or missing).
    pub fn from_class_indices(
        dataset_len: usize,
        class_indices: Vec<Vec<usize>>,
        sampling_factor: SamplingFactor,
        shuffle: bool,
        seed: Option<u64>,
    ) -> Result<Self, EquisampleError> {
        if dataset_len == 0 {
            return Err(EquisampleError::EmptyDataset {
                context: "cannot balance a dataset with no items".to_string(),
            });
        }

        let mut seen = vec![false; dataset_len];
        let mut covered = 0usize;
        for indices in &class_indices {
            for &index in indices {
                if index >= dataset_len {
                    return Err(EquisampleError::config(format!(
                        "class index {index} is out of range for dataset length {dataset_len}"
                    )));
                }
                if seen[index] {
                    return Err(EquisampleError::config(format!(
                        "dataset index {index} appears in more than one class"
                    )));
                }
                seen[index] = true;
                covered += 1;
            }
        }
        if covered != dataset_len {
            return Err(EquisampleError::config(format!(
                "class index lists cover {covered} of {dataset_len} dataset items"
            )));
        }

        let classes = (0..class_indices.len()).collect();
        Self::from_parts(classes, class_indices, sampling_factor, None, shuffle, seed)
    }
}

impl<L> BalancedSampler<L> {
    /// Number of distinct classes.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Uniform per-class output size after sampling.
    pub fn class_size(&self) -> usize {
        self.class_size
    }

    /// Distinct labels in class iteration order (first-seen).
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Natural (pre-sampling) item count of each class, aligned with
    /// [`BalancedSampler::classes`].
    pub fn natural_counts(&self) -> Vec<usize> {
        self.class_indices.iter().map(Vec::len).collect()
    }

    /// Wraparound selection over the natural index order of every class.
    fn build_in_order(&self) -> Vec<usize> {
        let mut sequence = Vec::with_capacity(self.classes.len() * self.class_size);
        for indices in &self.class_indices {
            for i in 0..self.class_size {
                sequence.push(indices[i % indices.len()]);
            }
        }
        sequence
    }

    /// Fresh per-class permutations, wraparound selection, then a global
    /// permutation of the concatenated sequence.
    fn build_shuffled(&self, rng: &mut StdRng) -> Vec<usize> {
        let mut sequence = Vec::with_capacity(self.classes.len() * self.class_size);
        for indices in &self.class_indices {
            let mut permuted = indices.clone();
            permuted.shuffle(rng);
            for i in 0..self.class_size {
                sequence.push(permuted[i % permuted.len()]);
            }
        }
        sequence.shuffle(rng);
        sequence
    }

    /// One RNG per epoch: `base_seed + epoch` when seeded (fresh but
    /// reproducible permutations), OS entropy otherwise.
    fn epoch_rng(&self) -> StdRng {
        let epoch = self.epoch.fetch_add(1, Ordering::Relaxed) as u64;
        match self.base_seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(epoch)),
            None => StdRng::from_entropy(),
        }
    }
}

impl<L: Debug + Send + Sync> Sampler for BalancedSampler<L> {
    /// Produces the index sequence for one epoch.
    ///
    /// The `dataset_len` argument is ignored: the sampler is bound to the
    /// dataset it was constructed against.
    fn iter(&self, _dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        let sequence = match &self.fixed_sequence {
            Some(sequence) => sequence.clone(),
            None => self.build_shuffled(&mut self.epoch_rng()),
        };
        Box::new(sequence.into_iter())
    }

    fn len(&self, _dataset_len: usize) -> usize {
        self.classes.len() * self.class_size
    }
}

/// Groups dataset indices by label, keeping the first-seen label order.
fn group_by_label<L: Clone + Hash + Eq>(labels: Vec<L>) -> (Vec<L>, Vec<Vec<usize>>) {
    let mut positions: HashMap<L, usize> = HashMap::new();
    let mut classes: Vec<L> = Vec::new();
    let mut class_indices: Vec<Vec<usize>> = Vec::new();
    for (index, label) in labels.into_iter().enumerate() {
        let position = match positions.get(&label) {
            Some(&position) => position,
            None => {
                let position = classes.len();
                classes.push(label.clone());
                positions.insert(label, position);
                class_indices.push(Vec::new());
                position
            }
        };
        class_indices[position].push(index);
    }
    (classes, class_indices)
}

#[cfg(test)]
#[path = "balanced_sampler_test.rs"]
mod tests;
