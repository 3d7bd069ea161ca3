use crate::error::EquisampleError;
use std::fmt;

/// Where a sampler obtains the class label of every dataset item.
///
/// The three strategies mirror the ways callers usually hold labels: an
/// already-materialized label vector, a per-index accessor, or a bulk
/// accessor returning all labels at once. The choice is made once, at
/// sampler construction; resolution always yields one label per dataset
/// index, in index order.
///
/// A fourth strategy, reading the label out of the dataset item itself,
/// is provided by [`crate::samplers::BalancedSampler::from_dataset`].
pub enum LabelSource<L> {
    /// An explicit label vector, index-aligned with the dataset.
    Explicit(Vec<L>),
    /// A callback invoked once per index (`callback(index) -> label`).
    PerIndex(Box<dyn Fn(usize) -> L + Send + Sync>),
    /// A callback invoked once for the whole dataset
    /// (`callback() -> labels`), expected to return one label per index.
    Bulk(Box<dyn Fn() -> Vec<L> + Send + Sync>),
}

impl<L> LabelSource<L> {
    /// Wraps a per-index label callback.
    pub fn per_index(callback: impl Fn(usize) -> L + Send + Sync + 'static) -> Self {
        LabelSource::PerIndex(Box::new(callback))
    }

    /// Wraps a whole-dataset label callback.
    pub fn bulk(callback: impl Fn() -> Vec<L> + Send + Sync + 'static) -> Self {
        LabelSource::Bulk(Box::new(callback))
    }

    /// Produces the label of every item in `0..dataset_len`, index-aligned.
    ///
    /// # Errors
    ///
    /// Returns `EquisampleError::Configuration` if an explicit label vector
    /// or a bulk callback result does not have exactly `dataset_len`
    /// entries.
    pub(crate) fn resolve(self, dataset_len: usize) -> Result<Vec<L>, EquisampleError> {
        match self {
            LabelSource::Explicit(labels) => {
                if labels.len() != dataset_len {
                    return Err(EquisampleError::config(format!(
                        "explicit label vector has length {}, expected dataset length {}",
                        labels.len(),
                        dataset_len
                    )));
                }
                Ok(labels)
            }
            LabelSource::PerIndex(callback) => Ok((0..dataset_len).map(callback).collect()),
            LabelSource::Bulk(callback) => {
                let labels = callback();
                if labels.len() != dataset_len {
                    return Err(EquisampleError::config(format!(
                        "bulk label callback returned {} labels, expected dataset length {}",
                        labels.len(),
                        dataset_len
                    )));
                }
                Ok(labels)
            }
        }
    }
}

impl<L> fmt::Debug for LabelSource<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelSource::Explicit(labels) => {
                f.debug_tuple("Explicit").field(&labels.len()).finish()
            }
            LabelSource::PerIndex(_) => f.write_str("PerIndex(..)"),
            LabelSource::Bulk(_) => f.write_str("Bulk(..)"),
        }
    }
}

#[cfg(test)]
#[path = "label_source_test.rs"]
mod tests;
