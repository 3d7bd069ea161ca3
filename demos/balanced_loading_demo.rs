//! Balanced loading of an imbalanced dataset with `BalancedSampler` and
//! `DataLoader`.
//!
//! The dataset below has 4 items of class 0 and 16 of class 1. With
//! `SamplingFactor::OVERSAMPLING` every epoch yields 16 items per class;
//! with `Factor(-2.0)` the smallest class is doubled instead.

use equisample::{BalancedSampler, DataLoader, SamplingFactor, VecDataset};

fn main() {
    // Synthetic (features, label) pairs: 4 of class 0, 16 of class 1.
    let data: Vec<(Vec<f32>, u8)> = (0..20)
        .map(|i| (vec![i as f32, i as f32 * 0.5], u8::from(i >= 4)))
        .collect();
    let dataset = VecDataset::new(data);

    // Oversample the minority class up to the majority size. The fixed
    // seed makes every run print the same batches.
    let sampler = BalancedSampler::from_dataset(
        &dataset,
        SamplingFactor::OVERSAMPLING,
        Some(2),
        true,
        Some(42),
    )
    .expect("sampler configuration is valid");
    println!(
        "classes: {:?}, natural counts: {:?}, per-class size: {}",
        sampler.classes(),
        sampler.natural_counts(),
        sampler.class_size()
    );

    let loader = DataLoader::with_default_collate(dataset.clone(), 8, sampler, false);
    println!("\n--- Oversampled epoch, batches of 8 ---");
    for (i, batch) in loader.enumerate() {
        let batch = batch.expect("no error expected");
        let labels: Vec<u8> = batch.iter().map(|(_, label)| *label).collect();
        println!("batch {i}: labels {labels:?}");
    }

    // Doubling the minority class instead: 8 items per class.
    let sampler = BalancedSampler::from_dataset(
        &dataset,
        SamplingFactor::Factor(-2.0),
        Some(2),
        true,
        Some(42),
    )
    .expect("sampler configuration is valid");
    let loader = DataLoader::with_default_collate(dataset, 8, sampler, false);
    println!("\n--- Minority class doubled, batches of 8 ---");
    for (i, batch) in loader.enumerate() {
        let batch = batch.expect("no error expected");
        let labels: Vec<u8> = batch.iter().map(|(_, label)| *label).collect();
        println!("batch {i}: labels {labels:?}");
    }
}
