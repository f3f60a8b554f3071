//! Discrete distribution.

use crate::pbrt::*;

/// A probability mass function over a finite set of indices, built from
/// non-negative weights, with its cumulative distribution for inverse-CDF
/// sampling.
#[derive(Clone, Debug)]
pub struct DiscreteDistribution {
    /// Normalized probabilities.
    pub pmf: Vec<Float>,

    /// CDF for `pmf`. The last entry with positive probability is exactly 1.
    pub cdf: Vec<Float>,
}

impl DiscreteDistribution {
    /// Returns a new `DiscreteDistribution` for the given weights or `None`
    /// when they sum to zero or less. Negative weights are treated as zero.
    ///
    /// * `weights` - Unnormalized weights.
    pub fn new(weights: &[Float]) -> Option<Self> {
        let weights: Vec<Float> = weights.iter().map(|&w| max(w, 0.0)).collect();
        let total: Float = weights.iter().sum();
        if !(total > 0.0) {
            return None;
        }

        let pmf: Vec<Float> = weights.iter().map(|w| w / total).collect();

        let mut cdf = Vec::with_capacity(pmf.len());
        let mut acc = 0.0;
        for p in pmf.iter() {
            acc += p;
            cdf.push(acc);
        }

        // Absorb rounding error so every u in [0, 1) selects some index.
        if let Some(last) = pmf.iter().rposition(|&p| p > 0.0) {
            for c in cdf.iter_mut().skip(last) {
                *c = 1.0;
            }
        }

        Some(Self { pmf, cdf })
    }

    /// Returns the first index whose cumulative interval contains `u`, and
    /// its probability. Indices with zero probability are never returned.
    ///
    /// * `u` - The random sample in [0, 1).
    pub fn sample(&self, u: Float) -> (usize, Float) {
        let index = self
            .cdf
            .iter()
            .zip(self.pmf.iter())
            .position(|(&c, &p)| p > 0.0 && u < c)
            .unwrap_or_else(|| self.last_positive());
        (index, self.pmf[index])
    }

    /// Index of the last entry with positive probability.
    fn last_positive(&self) -> usize {
        self.pmf.iter().rposition(|&p| p > 0.0).unwrap_or(0)
    }
}
