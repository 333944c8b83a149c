//! Probability distributions over a finite label set.

use rand::Rng;

use crate::error::ProbError;
use crate::labels::{Domain, Label, LabelSet};
use crate::PROB_TOLERANCE;

/// A probability distribution over the values of a finite domain.
///
/// Invariants:
/// - All probabilities are non-negative
/// - Probabilities sum to 1 (within tolerance)
/// - `pmf().len() == labels().len()`
///
/// # Example
///
/// ```rust
/// use sorter_prob::{CategoricalDistribution, Domain, LabelSet};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Weather;
/// impl Domain for Weather { const NAME: &'static str = "weather"; }
///
/// // Raw counts are fine, they get normalized
/// let labels = LabelSet::<Weather>::new(["sunny", "rainy"]).unwrap();
/// let d = CategoricalDistribution::new(labels, vec![30.0, 10.0]).unwrap();
/// assert!((d.pmf()[0] - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalDistribution<D: Domain> {
    labels: LabelSet<D>,
    p: Vec<f64>,
}

impl<D: Domain> CategoricalDistribution<D> {
    /// Create a distribution from non-negative weights (probabilities or counts).
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::InvalidDistribution`] if:
    /// - The number of weights differs from the number of labels
    /// - Any weight is negative or not finite
    /// - The weights sum to zero
    pub fn new(labels: LabelSet<D>, weights: Vec<f64>) -> Result<Self, ProbError> {
        if weights.len() != labels.len() {
            return Err(ProbError::invalid_distribution(format!(
                "{} weights for {} labels in {}",
                weights.len(),
                labels.len(),
                D::NAME
            )));
        }
        let p = normalize(&weights).map_err(|reason| {
            ProbError::invalid_distribution(format!("{} prior: {}", D::NAME, reason))
        })?;
        Ok(Self { labels, p })
    }

    /// Build the label set and the distribution in one go.
    pub fn from_names<I, S>(names: I, weights: Vec<f64>) -> Result<Self, ProbError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(LabelSet::new(names)?, weights)
    }

    /// Uniform distribution over the label set.
    pub fn uniform(labels: LabelSet<D>) -> Self {
        let n = labels.len();
        Self {
            labels,
            p: vec![1.0 / n as f64; n],
        }
    }

    /// Wrap an already-normalized vector.
    pub(crate) fn from_normalized(labels: LabelSet<D>, p: Vec<f64>) -> Self {
        debug_assert_eq!(labels.len(), p.len());
        Self { labels, p }
    }

    pub fn labels(&self) -> &LabelSet<D> {
        &self.labels
    }

    /// Look up a label by name.
    pub fn index_of(&self, name: &str) -> Result<Label<D>, ProbError> {
        self.labels.index_of(name)
    }

    /// The normalized probability vector, in label order.
    pub fn pmf(&self) -> &[f64] {
        &self.p
    }

    /// Probability of one label.
    pub fn prob(&self, label: Label<D>) -> Result<f64, ProbError> {
        let i = self.labels.check(label.index())?;
        Ok(self.p[i])
    }

    /// Mode: the label with highest probability.
    ///
    /// Returns the first label if there are ties.
    pub fn mode(&self) -> Label<D> {
        let mut best = 0;
        for (i, &p) in self.p.iter().enumerate() {
            if p > self.p[best] {
                best = i;
            }
        }
        Label::new(best)
    }

    /// Shannon entropy in nats. Outcomes with zero probability contribute 0.
    pub fn entropy(&self) -> f64 {
        self.p
            .iter()
            .filter(|&&x| x > PROB_TOLERANCE)
            .map(|&x| -x * x.ln())
            .sum()
    }

    /// Draw a label using the given random source.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Label<D> {
        self.sample_at(rng.gen::<f64>())
    }

    /// Inverse transform sampling from a uniform value in [0, 1).
    pub fn sample_at(&self, u: f64) -> Label<D> {
        Label::new(inverse_cdf(&self.p, u))
    }
}

/// Normalize weights to sum to 1, rejecting anything that is not a valid
/// unnormalized distribution.
pub(crate) fn normalize(weights: &[f64]) -> Result<Vec<f64>, String> {
    if weights.iter().any(|w| !w.is_finite()) {
        return Err("weights must be finite".to_string());
    }
    if weights.iter().any(|&w| w < 0.0) {
        return Err("negative weight".to_string());
    }
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return Err("weights sum to zero".to_string());
    }
    Ok(weights.iter().map(|w| w / sum).collect())
}

/// Pick index `i` for the first cumulative sum strictly greater than `u`.
///
/// If rounding leaves `u` past the last cumulative sum, the last index with
/// positive mass is returned.
pub(crate) fn inverse_cdf(p: &[f64], u: f64) -> usize {
    let mut cumsum = 0.0;
    for (i, &pi) in p.iter().enumerate() {
        cumsum += pi;
        if u < cumsum {
            return i;
        }
    }
    p.iter().rposition(|&pi| pi > 0.0).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::tests::Letter;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn abc(weights: Vec<f64>) -> CategoricalDistribution<Letter> {
        CategoricalDistribution::from_names(["A", "B", "C"], weights).unwrap()
    }

    #[test]
    fn test_normalizes_counts() {
        let d = CategoricalDistribution::<Letter>::from_names(
            ["cardboard", "paper", "can", "scrap_metal", "bottle"],
            vec![200.0, 300.0, 250.0, 200.0, 50.0],
        )
        .unwrap();
        let expected = [0.2, 0.3, 0.25, 0.2, 0.05];
        for (p, e) in d.pmf().iter().zip(expected.iter()) {
            assert!((p - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let result = CategoricalDistribution::<Letter>::from_names(["A", "B"], vec![1.0]);
        assert!(matches!(result, Err(ProbError::InvalidDistribution { .. })));
    }

    #[test]
    fn test_negative_weight() {
        let result = CategoricalDistribution::<Letter>::from_names(["A", "B"], vec![1.0, -0.5]);
        assert!(matches!(result, Err(ProbError::InvalidDistribution { .. })));
    }

    #[test]
    fn test_zero_sum() {
        let result = CategoricalDistribution::<Letter>::from_names(["A", "B"], vec![0.0, 0.0]);
        assert!(matches!(result, Err(ProbError::InvalidDistribution { .. })));
    }

    #[test]
    fn test_index_of() {
        let d = abc(vec![0.3, 0.4, 0.3]);
        assert_eq!(d.index_of("B").unwrap().index(), 1);
        assert!(matches!(
            d.index_of("D"),
            Err(ProbError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn test_sample_at_boundaries() {
        let d = abc(vec![0.3, 0.4, 0.3]);
        assert_eq!(d.sample_at(0.0).index(), 0);
        assert_eq!(d.sample_at(0.29).index(), 0);
        // Exactly on the first cumulative sum moves to the next label
        assert_eq!(d.sample_at(0.3).index(), 1);
        assert_eq!(d.sample_at(0.31).index(), 1);
        assert_eq!(d.sample_at(0.71).index(), 2);
        assert_eq!(d.sample_at(0.999_999).index(), 2);
    }

    #[test]
    fn test_sample_skips_zero_mass() {
        let d = abc(vec![0.0, 1.0, 0.0]);
        assert_eq!(d.sample_at(0.0).index(), 1);
        // Past the end lands on the last label with mass, not on C
        assert_eq!(d.sample_at(1.0).index(), 1);
    }

    #[test]
    fn test_sample_frequencies() {
        let d = abc(vec![0.3, 0.4, 0.3]);
        let mut rng = StdRng::seed_from_u64(3630);
        let n = 100_000;
        let mut counts = [0usize; 3];
        for _ in 0..n {
            counts[d.sample(&mut rng).index()] += 1;
        }
        for (count, expected) in counts.iter().zip([0.3, 0.4, 0.3]) {
            let freq = *count as f64 / n as f64;
            assert!((freq - expected).abs() < 0.02, "freq {freq} vs {expected}");
        }
    }

    #[test]
    fn test_mode_and_entropy() {
        let d = abc(vec![0.25, 0.5, 0.25]);
        assert_eq!(d.mode().index(), 1);

        let u = CategoricalDistribution::uniform(d.labels().clone());
        assert!((u.entropy() - 3.0_f64.ln()).abs() < 1e-12);
        // Ties resolve to the first label
        assert_eq!(u.mode().index(), 0);
    }
}
