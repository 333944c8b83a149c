//! Continuous measurements conditioned on a finite cause.
//!
//! A [`GaussianConditional`] attaches one Normal distribution to every value
//! of a finite cause. Reading a measurement `x` back gives the density of `x`
//! under each cause, which is a likelihood over the cause.
//!
//! # Example
//!
//! ```rust
//! use sorter_prob::{Domain, GaussianConditional, LabelSet};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! struct Animal;
//! impl Domain for Animal { const NAME: &'static str = "animal"; }
//!
//! // Body mass in kg
//! let mass = GaussianConditional::new(
//!     LabelSet::<Animal>::new(["cat", "dog"]).unwrap(),
//!     vec![4.0, 20.0],
//!     vec![1.0, 8.0],
//! ).unwrap();
//!
//! let l = mass.likelihoods(5.0).unwrap();
//! assert!(l.values()[0] > l.values()[1]);
//! ```

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::ProbError;
use crate::labels::{Domain, Label, LabelSet};
use crate::likelihood::Likelihood;

/// P(X | B) where X is real-valued and Normal for each value of B.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianConditional<B: Domain> {
    causes: LabelSet<B>,
    means: Vec<f64>,
    sigmas: Vec<f64>,
}

impl<B: Domain> GaussianConditional<B> {
    /// Create from parallel `(mean, sigma)` vectors, one pair per cause.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::InvalidDistribution`] if the vector lengths differ
    /// from the cause count, a mean is not finite, or a sigma is not a finite
    /// positive number.
    pub fn new(causes: LabelSet<B>, means: Vec<f64>, sigmas: Vec<f64>) -> Result<Self, ProbError> {
        if means.len() != causes.len() || sigmas.len() != causes.len() {
            return Err(ProbError::invalid_distribution(format!(
                "{} means and {} sigmas for {} values of {}",
                means.len(),
                sigmas.len(),
                causes.len(),
                B::NAME
            )));
        }
        for (i, (&mean, &sigma)) in means.iter().zip(sigmas.iter()).enumerate() {
            if !mean.is_finite() {
                return Err(ProbError::invalid_distribution(format!(
                    "mean for '{}' is not finite",
                    causes.names()[i]
                )));
            }
            if !(sigma.is_finite() && sigma > 0.0) {
                return Err(ProbError::invalid_distribution(format!(
                    "sigma for '{}' must be positive, got {}",
                    causes.names()[i],
                    sigma
                )));
            }
        }
        Ok(Self {
            causes,
            means,
            sigmas,
        })
    }

    /// Normal probability density function.
    ///
    /// pdf(x) = (1/√(2πσ²)) exp(-(x-μ)²/(2σ²))
    pub fn density(x: f64, mean: f64, sigma: f64) -> f64 {
        let z = (x - mean) / sigma;
        let normalization = 1.0 / (sigma * (2.0 * PI).sqrt());
        normalization * (-0.5 * z * z).exp()
    }

    pub fn causes(&self) -> &LabelSet<B> {
        &self.causes
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn sigmas(&self) -> &[f64] {
        &self.sigmas
    }

    /// Draw a measurement given the cause.
    ///
    /// Draws are not truncated: a physically non-negative quantity can come
    /// back negative when sigma is large relative to the mean.
    pub fn sample<R: Rng + ?Sized>(&self, cause: Label<B>, rng: &mut R) -> Result<f64, ProbError> {
        let b = self.causes.check(cause.index())?;
        let normal = Normal::new(self.means[b], self.sigmas[b])
            .map_err(|e| ProbError::invalid_distribution(e.to_string()))?;
        Ok(normal.sample(rng))
    }

    /// Density of `x` under every cause. Not normalized.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::InvalidInput`] if `x` is not finite.
    pub fn likelihoods(&self, x: f64) -> Result<Likelihood<B>, ProbError> {
        if !x.is_finite() {
            return Err(ProbError::invalid_input(format!(
                "measurement {} is not finite",
                x
            )));
        }
        let values = self
            .means
            .iter()
            .zip(self.sigmas.iter())
            .map(|(&mean, &sigma)| Self::density(x, mean, sigma))
            .collect();
        Likelihood::new(values)
    }
}
