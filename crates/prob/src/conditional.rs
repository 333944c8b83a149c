//! Conditional probability tables between two finite domains.

use rand::Rng;

use crate::categorical::{inverse_cdf, normalize, CategoricalDistribution};
use crate::error::ProbError;
use crate::labels::{Domain, Label, LabelSet};
use crate::likelihood::Likelihood;

/// P(A | B) for a finite effect `A` and a finite cause `B`.
///
/// Stored as a row-stochastic matrix where:
/// - `table[b][a]` = P(A = a | B = b)
/// - Each row sums to 1
///
/// # Example
///
/// ```rust
/// use sorter_prob::{CategoricalConditional, Domain, LabelSet};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Test;
/// impl Domain for Test { const NAME: &'static str = "test"; }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Health;
/// impl Domain for Health { const NAME: &'static str = "health"; }
///
/// let test_given_health = CategoricalConditional::new(
///     LabelSet::<Test>::new(["negative", "positive"]).unwrap(),
///     LabelSet::<Health>::new(["healthy", "sick"]).unwrap(),
///     vec![
///         vec![95.0, 5.0],  // healthy: 5% false positives
///         vec![10.0, 90.0], // sick: 90% true positives
///     ],
/// ).unwrap();
///
/// let positive = test_given_health.index_of("positive").unwrap();
/// let l = test_given_health.likelihoods(positive).unwrap();
/// assert!(l.values()[1] > l.values()[0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalConditional<A: Domain, B: Domain> {
    effects: LabelSet<A>,
    causes: LabelSet<B>,
    table: Vec<Vec<f64>>,
}

impl<A: Domain, B: Domain> CategoricalConditional<A, B> {
    /// Create a conditional from a cause-by-effect table of non-negative weights.
    ///
    /// Each row is normalized independently.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::InvalidDistribution`] if:
    /// - The table doesn't have one row per cause
    /// - A row doesn't have one entry per effect
    /// - A row has a negative entry or sums to zero
    pub fn new(
        effects: LabelSet<A>,
        causes: LabelSet<B>,
        table: Vec<Vec<f64>>,
    ) -> Result<Self, ProbError> {
        if table.len() != causes.len() {
            return Err(ProbError::invalid_distribution(format!(
                "P({} | {}) has {} rows for {} causes",
                A::NAME,
                B::NAME,
                table.len(),
                causes.len()
            )));
        }

        let mut normalized = Vec::with_capacity(table.len());
        for (i, row) in table.iter().enumerate() {
            if row.len() != effects.len() {
                return Err(ProbError::invalid_distribution(format!(
                    "P({} | {}) row {} has {} entries for {} effects",
                    A::NAME,
                    B::NAME,
                    i,
                    row.len(),
                    effects.len()
                )));
            }
            let row = normalize(row).map_err(|reason| {
                ProbError::invalid_distribution(format!(
                    "P({} | {}) row '{}': {}",
                    A::NAME,
                    B::NAME,
                    causes.names()[i],
                    reason
                ))
            })?;
            normalized.push(row);
        }

        Ok(Self {
            effects,
            causes,
            table: normalized,
        })
    }

    pub fn effects(&self) -> &LabelSet<A> {
        &self.effects
    }

    pub fn causes(&self) -> &LabelSet<B> {
        &self.causes
    }

    /// Look up an effect label by name.
    pub fn index_of(&self, effect: &str) -> Result<Label<A>, ProbError> {
        self.effects.index_of(effect)
    }

    /// P(A | B = cause) as a normalized row.
    pub fn row(&self, cause: Label<B>) -> Result<&[f64], ProbError> {
        let b = self.causes.check(cause.index())?;
        Ok(&self.table[b])
    }

    /// A single entry P(A = effect | B = cause).
    pub fn prob(&self, effect: Label<A>, cause: Label<B>) -> Result<f64, ProbError> {
        let a = self.effects.check(effect.index())?;
        Ok(self.row(cause)?[a])
    }

    /// Draw an effect given the cause.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::IndexOutOfRange`] if `cause` is not in the cause set.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        cause: Label<B>,
        rng: &mut R,
    ) -> Result<Label<A>, ProbError> {
        self.sample_at(cause, rng.gen::<f64>())
    }

    /// Inverse transform sampling of the row for `cause` at uniform value `u`.
    pub fn sample_at(&self, cause: Label<B>, u: f64) -> Result<Label<A>, ProbError> {
        Ok(Label::new(inverse_cdf(self.row(cause)?, u)))
    }

    /// Likelihood of each cause given an observed effect.
    ///
    /// This reads the column for `effect` out of the forward table and
    /// rescales it to sum to 1. It is the forward model used as a likelihood
    /// function of the cause, not a Bayes inversion: the cause prior is applied
    /// separately during fusion.
    ///
    /// # Errors
    ///
    /// - [`ProbError::IndexOutOfRange`] if `effect` is not in the effect set
    /// - [`ProbError::DegenerateEvidence`] if no cause can produce `effect`
    pub fn likelihoods(&self, effect: Label<A>) -> Result<Likelihood<B>, ProbError> {
        let a = self.effects.check(effect.index())?;
        let column: Vec<f64> = self.table.iter().map(|row| row[a]).collect();
        let column = Likelihood::<B>::new(column)?.normalized()?;
        Likelihood::new(column)
    }

    /// Marginal distribution of the effect: `P(a) = Σ_b P(b) · P(a | b)`.
    pub fn predict(
        &self,
        prior: &CategoricalDistribution<B>,
    ) -> Result<CategoricalDistribution<A>, ProbError> {
        if prior.pmf().len() != self.causes.len() {
            return Err(ProbError::DimensionMismatch {
                expected: self.causes.len(),
                got: prior.pmf().len(),
            });
        }

        let mut result = vec![0.0; self.effects.len()];
        for (a, result_elem) in result.iter_mut().enumerate() {
            for (b, &pb) in prior.pmf().iter().enumerate() {
                *result_elem += pb * self.table[b][a];
            }
        }

        Ok(CategoricalDistribution::from_normalized(
            self.effects.clone(),
            result,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::tests::{Digit, Letter};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // P(Letter | Digit) with letters A0..A2 and causes B0, B1
    fn sample_conditional() -> CategoricalConditional<Letter, Digit> {
        CategoricalConditional::new(
            LabelSet::new(["A0", "A1", "A2"]).unwrap(),
            LabelSet::new(["B0", "B1"]).unwrap(),
            vec![vec![0.2, 0.5, 0.3], vec![0.6, 0.2, 0.2]],
        )
        .unwrap()
    }

    #[test]
    fn test_rows_normalized() {
        let c = CategoricalConditional::<Letter, Digit>::new(
            LabelSet::new(["x", "y"]).unwrap(),
            LabelSet::new(["0", "1"]).unwrap(),
            vec![vec![1.0, 3.0], vec![5.0, 5.0]],
        )
        .unwrap();
        for b in c.causes().labels() {
            let sum: f64 = c.row(b).unwrap().iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
        let y = c.index_of("y").unwrap();
        let zero = c.causes().label(0).unwrap();
        assert!((c.prob(y, zero).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_zero_row_rejected() {
        let result = CategoricalConditional::<Letter, Digit>::new(
            LabelSet::new(["x", "y"]).unwrap(),
            LabelSet::new(["0", "1"]).unwrap(),
            vec![vec![1.0, 3.0], vec![0.0, 0.0]],
        );
        assert!(matches!(result, Err(ProbError::InvalidDistribution { .. })));
    }

    #[test]
    fn test_shape_rejected() {
        let rows = CategoricalConditional::<Letter, Digit>::new(
            LabelSet::new(["x", "y"]).unwrap(),
            LabelSet::new(["0", "1"]).unwrap(),
            vec![vec![1.0, 3.0]],
        );
        assert!(matches!(rows, Err(ProbError::InvalidDistribution { .. })));

        let ragged = CategoricalConditional::<Letter, Digit>::new(
            LabelSet::new(["x", "y"]).unwrap(),
            LabelSet::new(["0", "1"]).unwrap(),
            vec![vec![1.0, 3.0], vec![1.0]],
        );
        assert!(matches!(ragged, Err(ProbError::InvalidDistribution { .. })));
    }

    #[test]
    fn test_likelihoods_sum_to_one() {
        let c = sample_conditional();
        let a1 = c.index_of("A1").unwrap();
        let l = c.likelihoods(a1).unwrap();
        let sum: f64 = l.values().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        // Column [0.5, 0.2] rescaled
        assert!((l.values()[0] - 0.5 / 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_impossible_effect_is_degenerate() {
        let c = CategoricalConditional::<Letter, Digit>::new(
            LabelSet::new(["x", "y"]).unwrap(),
            LabelSet::new(["0", "1"]).unwrap(),
            vec![vec![1.0, 0.0], vec![1.0, 0.0]],
        )
        .unwrap();
        let y = c.index_of("y").unwrap();
        assert!(matches!(
            c.likelihoods(y),
            Err(ProbError::DegenerateEvidence { .. })
        ));
    }

    #[test]
    fn test_sample_in_range() {
        let c = sample_conditional();
        let mut rng = StdRng::seed_from_u64(7);
        let b0 = c.causes().label(0).unwrap();
        for _ in 0..100 {
            assert!(c.sample(b0, &mut rng).unwrap().index() < 3);
        }
        // Row B1 = [0.6, 0.2, 0.2]
        let b1 = c.causes().label(1).unwrap();
        assert_eq!(c.sample_at(b1, 0.59).unwrap().index(), 0);
        assert_eq!(c.sample_at(b1, 0.61).unwrap().index(), 1);
    }

    #[test]
    fn test_sample_out_of_range() {
        let c = sample_conditional();
        // Label from a larger set of the same domain
        let wide = LabelSet::<Digit>::new(["0", "1", "2"]).unwrap();
        let cause = wide.label(2).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            c.sample(cause, &mut rng),
            Err(ProbError::IndexOutOfRange { index: 2, size: 2, .. })
        ));
        let effect = LabelSet::<Letter>::new(["a", "b", "c", "d"])
            .unwrap()
            .label(3)
            .unwrap();
        assert!(matches!(
            c.likelihoods(effect),
            Err(ProbError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_predict_marginal() {
        let c = sample_conditional();
        let prior = CategoricalDistribution::from_names(["B0", "B1"], vec![0.5, 0.5]).unwrap();
        let marginal = c.predict(&prior).unwrap();
        assert!((marginal.pmf()[0] - 0.4).abs() < 1e-12);
        assert!((marginal.pmf()[1] - 0.35).abs() < 1e-12);
        assert!((marginal.pmf()[2] - 0.25).abs() < 1e-12);
    }
}
