//! Likelihood vectors over a finite domain.

use std::marker::PhantomData;

use crate::error::ProbError;
use crate::labels::{Domain, Label};

/// Unnormalized likelihood of each value of domain `D` given some evidence.
///
/// Entries are finite and non-negative but need not sum to 1. Only the
/// relative sizes matter once the vector is fused with a prior.
#[derive(Debug, Clone, PartialEq)]
pub struct Likelihood<D: Domain> {
    values: Vec<f64>,
    _domain: PhantomData<D>,
}

impl<D: Domain> Likelihood<D> {
    /// Create a likelihood vector.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::InvalidInput`] if the vector is empty or holds a
    /// negative or non-finite entry.
    pub fn new(values: Vec<f64>) -> Result<Self, ProbError> {
        if values.is_empty() {
            return Err(ProbError::invalid_input(format!(
                "likelihood over {} is empty",
                D::NAME
            )));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(ProbError::invalid_input(format!(
                "likelihood entry {} over {} is not a finite non-negative number",
                bad,
                D::NAME
            )));
        }
        Ok(Self {
            values,
            _domain: PhantomData,
        })
    }

    /// The raw entries in label order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Entry for one label.
    ///
    /// A label past the end carries no evidence here, so it reads as 0, the
    /// same weight fusion would give a value the sensor cannot produce.
    pub fn get(&self, label: Label<D>) -> f64 {
        self.values.get(label.index()).copied().unwrap_or(0.0)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed likelihood.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rescale so the entries sum to 1.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::DegenerateEvidence`] if every entry is zero.
    pub fn normalized(&self) -> Result<Vec<f64>, ProbError> {
        let sum: f64 = self.values.iter().sum();
        if sum <= 0.0 {
            return Err(ProbError::DegenerateEvidence { domain: D::NAME });
        }
        Ok(self.values.iter().map(|v| v / sum).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::tests::Letter;

    #[test]
    fn test_normalized() {
        let l = Likelihood::<Letter>::new(vec![1.0, 3.0]).unwrap();
        let n = l.normalized().unwrap();
        assert!((n[0] - 0.25).abs() < 1e-12);
        assert!((n[1] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_is_degenerate() {
        let l = Likelihood::<Letter>::new(vec![0.0, 0.0]).unwrap();
        assert_eq!(
            l.normalized(),
            Err(ProbError::DegenerateEvidence { domain: "letter" })
        );
    }

    #[test]
    fn test_get() {
        let l = Likelihood::<Letter>::new(vec![0.2, 0.8]).unwrap();
        let set = crate::labels::LabelSet::<Letter>::new(["a", "b", "c"]).unwrap();
        assert_eq!(l.get(set.label(1).unwrap()), 0.8);
        assert_eq!(l.get(set.label(2).unwrap()), 0.0);
        assert_eq!(l.len(), 2);
        assert!(!l.is_empty());
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        assert!(Likelihood::<Letter>::new(vec![0.5, -0.1]).is_err());
        assert!(Likelihood::<Letter>::new(vec![f64::NAN]).is_err());
        assert!(Likelihood::<Letter>::new(vec![]).is_err());
    }
}
