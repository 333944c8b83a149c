//! Expected-cost decisions over a finite belief.

use crate::error::ProbError;
use crate::labels::{Domain, Label, LabelSet};

/// Loss matrix: `costs[a][h]` is the cost of taking action `a` when the true
/// state is `h`.
///
/// # Example
///
/// ```rust
/// use sorter_prob::{CostTable, Domain, LabelSet};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Act;
/// impl Domain for Act { const NAME: &'static str = "act"; }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Sky;
/// impl Domain for Sky { const NAME: &'static str = "sky"; }
///
/// let table = CostTable::new(
///     LabelSet::<Act>::new(["umbrella", "none"]).unwrap(),
///     LabelSet::<Sky>::new(["dry", "rain"]).unwrap(),
///     vec![vec![1.0, 1.0], vec![0.0, 5.0]],
/// ).unwrap();
///
/// // 30% rain: expected costs [1.0, 1.5]
/// let action = table.decide(&[0.7, 0.3]).unwrap();
/// assert_eq!(table.actions().name(action), "umbrella");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable<A: Domain, H: Domain> {
    actions: LabelSet<A>,
    states: LabelSet<H>,
    costs: Vec<Vec<f64>>,
}

impl<A: Domain, H: Domain> CostTable<A, H> {
    /// Create a cost table with one row per action and one column per state.
    ///
    /// # Errors
    ///
    /// - [`ProbError::DimensionMismatch`] if the shape doesn't match the label sets
    /// - [`ProbError::InvalidInput`] if a cost is not finite
    pub fn new(
        actions: LabelSet<A>,
        states: LabelSet<H>,
        costs: Vec<Vec<f64>>,
    ) -> Result<Self, ProbError> {
        if costs.len() != actions.len() {
            return Err(ProbError::DimensionMismatch {
                expected: actions.len(),
                got: costs.len(),
            });
        }
        for row in &costs {
            if row.len() != states.len() {
                return Err(ProbError::DimensionMismatch {
                    expected: states.len(),
                    got: row.len(),
                });
            }
            if row.iter().any(|c| !c.is_finite()) {
                return Err(ProbError::invalid_input("cost table entries must be finite"));
            }
        }
        Ok(Self {
            actions,
            states,
            costs,
        })
    }

    pub fn actions(&self) -> &LabelSet<A> {
        &self.actions
    }

    pub fn states(&self) -> &LabelSet<H> {
        &self.states
    }

    /// Cost of `action` when the true state is `state`.
    pub fn cost(&self, action: Label<A>, state: Label<H>) -> Result<f64, ProbError> {
        let a = self.actions.check(action.index())?;
        let h = self.states.check(state.index())?;
        Ok(self.costs[a][h])
    }

    /// Expected cost of every action: `costs · belief`.
    ///
    /// # Errors
    ///
    /// - [`ProbError::DimensionMismatch`] if `belief` has the wrong length
    /// - [`ProbError::InvalidInput`] if an entry is negative or not finite
    pub fn expected_costs(&self, belief: &[f64]) -> Result<Vec<f64>, ProbError> {
        if belief.len() != self.states.len() {
            return Err(ProbError::DimensionMismatch {
                expected: self.states.len(),
                got: belief.len(),
            });
        }
        if let Some(bad) = belief.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(ProbError::invalid_input(format!(
                "belief entry {} over {} is not a finite non-negative number",
                bad,
                H::NAME
            )));
        }
        Ok(self
            .costs
            .iter()
            .map(|row| row.iter().zip(belief).map(|(c, p)| c * p).sum())
            .collect())
    }

    /// The action with minimal expected cost. Ties go to the lowest index.
    ///
    /// The belief is usually a posterior but any non-negative weighting works.
    pub fn decide(&self, belief: &[f64]) -> Result<Label<A>, ProbError> {
        let expected = self.expected_costs(belief)?;
        let mut best = 0;
        for (a, &cost) in expected.iter().enumerate() {
            if cost < expected[best] {
                best = a;
            }
        }
        Ok(Label::new(best))
    }
}
