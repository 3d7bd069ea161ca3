use crate::error::EquisampleError;

/// Represents a dataset that can be iterated over and accessed by index.
///
/// A dataset is a collection of items, where each item can be a single
/// value, a tuple like `(features, label)`, or any other custom type that
/// implements `Send + 'static`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    ///
    /// This type must be `Send` and `'static` to allow for potential
    /// multi-threaded data loading in the future.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `EquisampleError` if the index is out of bounds or if there
    /// is an issue retrieving the item.
    fn get(&self, index: usize) -> Result<Self::Item, EquisampleError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
