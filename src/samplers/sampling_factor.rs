use crate::error::EquisampleError;

/// Controls how large every class becomes after balancing.
///
/// A single value covers the whole over/under-sampling spectrum. The
/// resulting per-class size is uniform: every class is stretched or cut to
/// the same target, smaller classes by cyclic repetition of their indices,
/// larger classes by dropping the surplus.
///
/// * `Absolute(k)` sets the per-class size to `k` directly, `k >= 1`.
/// * `Factor(f)` with `0 < f <= 1` interpolates linearly between the
///   smallest class size (`f -> 0`) and the largest (`f = 1`).
/// * `Factor(f)` with `-1 < f < 0` undersamples the largest class by
///   `-f`; `Factor(-0.5)` halves it.
/// * `Factor(f)` with `f <= -1` oversamples the smallest class by `-f`;
///   `Factor(-2.0)` doubles it.
///
/// `Factor(0.0)` is rejected: undersampling to zero is never what a caller
/// wants, and silently coercing the boundary would hide the bug.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingFactor {
    /// Absolute per-class target size.
    Absolute(usize),
    /// Multi-range factor, see the type-level docs.
    Factor(f64),
}

impl SamplingFactor {
    /// Grow every class to the size of the largest one.
    pub const OVERSAMPLING: SamplingFactor = SamplingFactor::Factor(1.0);

    /// Shrink every class to the size of the smallest one.
    pub const UNDERSAMPLING: SamplingFactor = SamplingFactor::Factor(-1.0);

    /// Computes the uniform per-class target size from the smallest and
    /// largest natural class counts.
    ///
    /// A computed size of zero is clamped to 1 with a warning, so that a
    /// very small factor still yields a usable sampler.
    ///
    /// # Errors
    ///
    /// Returns `EquisampleError::Configuration` for `Absolute(0)`,
    /// `Factor(0.0)`, a factor above `1.0`, or a non-finite factor.
    pub fn class_size(
        &self,
        min_count: usize,
        max_count: usize,
    ) -> Result<usize, EquisampleError> {
        let size = match *self {
            SamplingFactor::Absolute(0) => {
                return Err(EquisampleError::config(
                    "absolute sampling factor must be at least 1",
                ));
            }
            SamplingFactor::Absolute(k) => k,
            SamplingFactor::Factor(f) if !f.is_finite() => {
                return Err(EquisampleError::config(format!(
                    "sampling factor must be finite, got {f}"
                )));
            }
            SamplingFactor::Factor(f) if f == 0.0 => {
                return Err(EquisampleError::config(
                    "sampling factor 0.0 is ambiguous (undersample to zero); \
                     use SamplingFactor::UNDERSAMPLING to shrink every class \
                     to the smallest one",
                ));
            }
            // Interpolate the class size between the smallest and largest class.
            SamplingFactor::Factor(f) if f > 0.0 && f <= 1.0 => {
                let span = (max_count - min_count) as f64;
                (min_count as f64 + f * span).round() as usize
            }
            // Undersample the largest class by a factor.
            SamplingFactor::Factor(f) if f > -1.0 && f < 0.0 => {
                (max_count as f64 * -f).round() as usize
            }
            // Oversample the smallest class by a factor.
            SamplingFactor::Factor(f) if f <= -1.0 => (min_count as f64 * -f).round() as usize,
            SamplingFactor::Factor(f) => {
                return Err(EquisampleError::config(format!(
                    "sampling factor {f} is outside the supported ranges \
                     (0, 1], (-1, 0) and (-inf, -1]"
                )));
            }
        };

        if size == 0 {
            log::warn!(
                "sampling factor {:?} yields a per-class size of 0 \
                 (min class {}, max class {}); clamping to 1",
                self,
                min_count,
                max_count
            );
            return Ok(1);
        }
        Ok(size)
    }
}

#[cfg(test)]
#[path = "sampling_factor_test.rs"]
mod tests;
