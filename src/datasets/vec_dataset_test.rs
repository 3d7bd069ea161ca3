use super::*;
use crate::error::EquisampleError;

#[test]
fn test_vec_dataset_creation_and_len() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(dataset.len(), 3);
    assert!(!dataset.is_empty());

    let empty_dataset: VecDataset<i32> = VecDataset::new(vec![]);
    assert_eq!(empty_dataset.len(), 0);
    assert!(empty_dataset.is_empty());
}

#[test]
fn test_vec_dataset_get() {
    let dataset = VecDataset::new(vec![("a", 0usize), ("b", 1), ("c", 0)]);
    assert_eq!(dataset.get(0).unwrap(), ("a", 0));
    assert_eq!(dataset.get(2).unwrap(), ("c", 0));
}

#[test]
fn test_vec_dataset_get_out_of_bounds() {
    let dataset = VecDataset::new(vec![1, 2]);
    assert_eq!(
        dataset.get(2),
        Err(EquisampleError::IndexOutOfBounds { index: 2, len: 2 })
    );
}

#[test]
fn test_vec_dataset_from_pairs() {
    let dataset = VecDataset::from_pairs(vec![1.0f32, 2.0, 3.0], vec![0usize, 1, 1]).unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.get(1).unwrap(), (2.0, 1));
}

#[test]
fn test_vec_dataset_from_pairs_length_mismatch() {
    let result = VecDataset::from_pairs(vec![1.0f32, 2.0], vec![0usize]);
    assert!(matches!(
        result,
        Err(EquisampleError::Configuration { .. })
    ));
}
