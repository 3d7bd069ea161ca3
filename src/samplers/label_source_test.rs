use super::*;

#[test]
fn test_explicit_labels_resolve_in_order() {
    let source = LabelSource::Explicit(vec!["a", "b", "a"]);
    assert_eq!(source.resolve(3).unwrap(), vec!["a", "b", "a"]);
}

#[test]
fn test_explicit_labels_length_mismatch() {
    let source = LabelSource::Explicit(vec![0u8, 1]);
    assert!(matches!(
        source.resolve(3),
        Err(EquisampleError::Configuration { .. })
    ));
}

#[test]
fn test_per_index_callback_invoked_for_every_index() {
    let source = LabelSource::per_index(|index| index % 2);
    assert_eq!(source.resolve(5).unwrap(), vec![0, 1, 0, 1, 0]);
}

#[test]
fn test_bulk_callback_resolves() {
    let source = LabelSource::bulk(|| vec![1u8, 1, 0, 1]);
    assert_eq!(source.resolve(4).unwrap(), vec![1, 1, 0, 1]);
}

#[test]
fn test_bulk_callback_length_mismatch() {
    let source = LabelSource::bulk(|| vec![1u8, 1, 0]);
    assert!(matches!(
        source.resolve(4),
        Err(EquisampleError::Configuration { .. })
    ));
}
