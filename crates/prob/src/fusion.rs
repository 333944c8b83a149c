//! Naive Bayes fusion of independent evidence.
//!
//! Given a prior P(H) and likelihood vectors L₁..Lₖ from sensors that are
//! conditionally independent given H:
//!
//! ```text
//! P(H | e₁..eₖ) ∝ P(H) · L₁(H) · ... · Lₖ(H)
//! ```
//!
//! The product is taken elementwise and renormalized once at the end, so the
//! order in which sensors are fused doesn't matter.
//!
//! Conditioning is NOT plain composition: the unnormalized product has to be
//! rescaled, and when it vanishes everywhere the evidence is contradictory.
//! That case is reported as [`ProbError::DegenerateEvidence`] instead of
//! producing NaN.

use tracing::{trace, warn};

use crate::categorical::CategoricalDistribution;
use crate::error::ProbError;
use crate::labels::{Domain, LabelSet};
use crate::likelihood::Likelihood;

/// Compute the posterior `prior ⊙ Π likelihoods`, renormalized.
///
/// With no likelihoods the prior is returned unchanged.
///
/// # Errors
///
/// - [`ProbError::DimensionMismatch`] if a likelihood's length differs from the prior's
/// - [`ProbError::DegenerateEvidence`] if the product is zero for every value
///
/// # Example
///
/// ```rust
/// use sorter_prob::{fuse, CategoricalDistribution, Domain, Likelihood};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Disease;
/// impl Domain for Disease { const NAME: &'static str = "disease"; }
///
/// // 1% prevalence
/// let prior = CategoricalDistribution::<Disease>::from_names(["healthy", "sick"], vec![0.99, 0.01]).unwrap();
///
/// // Positive test: 5% false positives, 90% true positives
/// let positive = Likelihood::new(vec![0.05, 0.90]).unwrap();
///
/// let posterior = fuse(&prior, &[positive]).unwrap();
/// // Still unlikely to be sick: P(sick | +) ≈ 0.154
/// assert!(posterior.pmf()[1] < 0.2);
/// ```
pub fn fuse<D: Domain>(
    prior: &CategoricalDistribution<D>,
    likelihoods: &[Likelihood<D>],
) -> Result<CategoricalDistribution<D>, ProbError> {
    if likelihoods.is_empty() {
        return Ok(prior.clone());
    }
    let unnormalized = product(prior.pmf().to_vec(), likelihoods)?;
    normalize_posterior(prior.labels(), unnormalized)
}

/// Fuse likelihoods under a uniform prior.
///
/// Equivalent to normalizing the product of the likelihoods; with no
/// likelihoods the result is uniform.
pub fn fuse_likelihoods<D: Domain>(
    labels: &LabelSet<D>,
    likelihoods: &[Likelihood<D>],
) -> Result<CategoricalDistribution<D>, ProbError> {
    let uniform = CategoricalDistribution::uniform(labels.clone());
    fuse(&uniform, likelihoods)
}

fn product<D: Domain>(
    mut acc: Vec<f64>,
    likelihoods: &[Likelihood<D>],
) -> Result<Vec<f64>, ProbError> {
    for likelihood in likelihoods {
        if likelihood.len() != acc.len() {
            return Err(ProbError::DimensionMismatch {
                expected: acc.len(),
                got: likelihood.len(),
            });
        }
        for (a, l) in acc.iter_mut().zip(likelihood.values()) {
            *a *= l;
        }
        trace!(domain = D::NAME, unnormalized = ?acc, "fused likelihood");
    }
    Ok(acc)
}

fn normalize_posterior<D: Domain>(
    labels: &LabelSet<D>,
    unnormalized: Vec<f64>,
) -> Result<CategoricalDistribution<D>, ProbError> {
    let evidence: f64 = unnormalized.iter().sum();
    if evidence <= 0.0 || !evidence.is_finite() {
        warn!(domain = D::NAME, evidence, "evidence assigns no mass to any value");
        return Err(ProbError::DegenerateEvidence { domain: D::NAME });
    }
    let p = unnormalized.iter().map(|u| u / evidence).collect();
    Ok(CategoricalDistribution::from_normalized(labels.clone(), p))
}
