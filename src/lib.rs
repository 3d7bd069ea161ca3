//! # equisample
//!
//! Class-balanced index sampling for imbalanced datasets.
//!
//! The centerpiece is [`BalancedSampler`]: given one label per dataset
//! item, it computes a uniform per-class target size from a single
//! [`SamplingFactor`] and yields, each epoch, an index sequence in which
//! every class contributes exactly that many items. Small classes are
//! extended by cycling through their own indices rather than by random
//! draws with replacement, so within an epoch no item is skipped or
//! over-repeated unpredictably.
//!
//! Around it, the crate ships the usual data plumbing: a [`Dataset`]
//! trait with a [`VecDataset`] implementation, a [`Sampler`] trait with
//! sequential and uniform-random baselines, and a batching
//! [`DataLoader`].

pub mod dataloader;
pub mod datasets;
pub mod error;
pub mod samplers;

pub use dataloader::DataLoader;
pub use datasets::{Dataset, VecDataset};
pub use error::EquisampleError;
pub use samplers::{
    BalancedSampler, LabelSource, RandomSampler, Sampler, SamplingFactor, SequentialSampler,
};
