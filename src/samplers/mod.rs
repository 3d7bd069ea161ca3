pub mod balanced_sampler;
pub mod label_source;
pub mod random_sampler;
pub mod sampling_factor;
pub mod sequential_sampler;
pub mod traits;

pub use balanced_sampler::BalancedSampler;
pub use label_source::LabelSource;
pub use random_sampler::RandomSampler;
pub use sampling_factor::SamplingFactor;
pub use sequential_sampler::SequentialSampler;
pub use traits::Sampler;
