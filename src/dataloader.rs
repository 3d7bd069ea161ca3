//! # DataLoader
//!
//! Generic batching over a [`Dataset`], with the iteration order supplied
//! by a [`Sampler`]. One `DataLoader` instance iterates one epoch: the
//! sampler's index sequence is drawn at construction and consumed batch by
//! batch.
//!
//! ```rust
//! use equisample::dataloader::DataLoader;
//! use equisample::datasets::VecDataset;
//! use equisample::samplers::SequentialSampler;
//!
//! let data = vec![1, 2, 3, 4, 5, 6];
//! let dataset = VecDataset::new(data);
//! let sampler = SequentialSampler::new();
//! let loader = DataLoader::new(dataset, 2, sampler, false, None);
//! for batch in loader {
//!     let batch = batch.expect("no error expected");
//!     println!("batch: {:?}", batch);
//! }
//! ```

use crate::datasets::Dataset;
use crate::error::EquisampleError;
use crate::samplers::Sampler;

/// Type of the custom collate function.
///
/// Takes the samples of one batch and assembles them into whatever the
/// training loop consumes. The default is a plain `Vec` of samples.
pub type CollateFn<D> = Box<
    dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, EquisampleError>
        + Send
        + Sync,
>;

/// Generic data loader for batching and sampling.
///
/// # Type parameters
/// - `D`: The dataset type, implementing [`Dataset`].
/// - `S`: The sampler type, implementing [`Sampler`].
pub struct DataLoader<D: Dataset, S: Sampler> {
    /// The source dataset.
    pub dataset: D,
    /// The batch size.
    pub batch_size: usize,
    /// The sampler producing the iteration order.
    pub sampler: S,
    /// If `true`, an incomplete final batch is dropped.
    pub drop_last: bool,
    /// Optional collate function assembling samples into a batch.
    pub collate_fn: Option<CollateFn<D>>,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new `DataLoader`.
    ///
    /// # Arguments
    /// - `dataset`: The dataset to load from.
    /// - `batch_size`: The batch size.
    /// - `sampler`: The sampler producing the index sequence.
    /// - `drop_last`: If `true`, an incomplete final batch is dropped.
    /// - `collate_fn`: Optional custom collate function.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D>>,
    ) -> Self {
        let indices_iter = sampler.iter(dataset.len());
        Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
        }
    }

    /// Creates a `DataLoader` with the default collate function (plain
    /// aggregation into a `Vec`).
    pub fn with_default_collate(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Self
    where
        <D as Dataset>::Item: Clone,
    {
        let collate_fn = Box::new(|batch: Vec<<D as Dataset>::Item>| Ok(batch));
        Self::new(dataset, batch_size, sampler, drop_last, Some(collate_fn))
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, EquisampleError>;

    /// Returns the next batch of data.
    ///
    /// # Returns
    /// - `Some(Ok(batch))`: A batch ready for use.
    /// - `Some(Err(e))`: An error while fetching an item.
    /// - `None`: No data left this epoch.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            if let Some(idx) = self.indices_iter.next() {
                match self.dataset.get(idx) {
                    Ok(item) => batch.push(item),
                    Err(e) => return Some(Err(e)),
                }
            } else {
                break;
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        if let Some(ref collate_fn) = self.collate_fn {
            Some(collate_fn(batch))
        } else {
            Some(Ok(batch))
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
