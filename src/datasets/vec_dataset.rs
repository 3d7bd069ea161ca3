use super::traits::Dataset;
use crate::error::EquisampleError;

/// A simple dataset that wraps a `Vec` of items.
///
/// Each item in the `Vec` corresponds to a sample in the dataset. For
/// labeled data the item type is typically a `(data, label)` tuple, which
/// is the shape [`crate::samplers::BalancedSampler::from_dataset`] expects.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone + Send + 'static> {
    data: Vec<T>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    /// Creates a new `VecDataset` from a vector of items.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, L> VecDataset<(T, L)>
where
    T: Clone + Send + 'static,
    L: Clone + Send + 'static,
{
    /// Creates a labeled `VecDataset` by zipping a data vector with a label
    /// vector of the same length.
    ///
    /// # Errors
    ///
    /// Returns `EquisampleError::Configuration` if the two vectors have
    /// different lengths.
    pub fn from_pairs(data: Vec<T>, labels: Vec<L>) -> Result<Self, EquisampleError> {
        if data.len() != labels.len() {
            return Err(EquisampleError::config(format!(
                "data and label vectors must have the same length, got {} and {}",
                data.len(),
                labels.len()
            )));
        }
        Ok(Self {
            data: data.into_iter().zip(labels).collect(),
        })
    }
}

impl<T: Clone + Send + 'static> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns the item at the given index, cloned.
    ///
    /// # Errors
    ///
    /// Returns `EquisampleError::IndexOutOfBounds` if the index is out of
    /// bounds.
    fn get(&self, index: usize) -> Result<Self::Item, EquisampleError> {
        self.data
            .get(index)
            .cloned()
            .ok_or_else(|| EquisampleError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
