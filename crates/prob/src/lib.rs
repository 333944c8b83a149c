//! # Prob - Discrete Bayesian Perception and Decision
//!
//! This crate implements the inference core of a small perception pipeline:
//! a prior over a finite hypothesis, noisy sensors modeled as conditional
//! distributions, naive Bayes fusion of their readings and an expected-cost
//! decision rule on top of the resulting posterior.
//!
//! ## Core Concepts
//!
//! - **Tagged domains**: every finite variable has its own [`Domain`] marker,
//!   so labels and likelihoods of unrelated variables can't be mixed up
//! - **Priors are categorical distributions**: built from counts or weights,
//!   normalized once at construction
//! - **Sensors are conditionals**: `table[b][a]` = P(reading = a | hypothesis = b),
//!   or a Normal per hypothesis for continuous readings
//! - **Fusion is elementwise product**: `posterior ∝ prior ⊙ L₁ ⊙ ... ⊙ Lₖ`
//! - **Decisions minimize expected cost**: `argmin_a Σₕ cost[a][h] · P(h)`
//!
//! ## Example: Diagnosis
//!
//! ```rust
//! use sorter_prob::{fuse, CategoricalConditional, CategoricalDistribution, CostTable, Domain, LabelSet};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! struct Health;
//! impl Domain for Health { const NAME: &'static str = "health"; }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! struct Test;
//! impl Domain for Test { const NAME: &'static str = "test"; }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! struct Treatment;
//! impl Domain for Treatment { const NAME: &'static str = "treatment"; }
//!
//! let health = LabelSet::<Health>::new(["healthy", "sick"]).unwrap();
//! let prior = CategoricalDistribution::new(health.clone(), vec![99.0, 1.0]).unwrap();
//!
//! let test = CategoricalConditional::new(
//!     LabelSet::<Test>::new(["negative", "positive"]).unwrap(),
//!     health.clone(),
//!     vec![vec![0.95, 0.05], vec![0.10, 0.90]],
//! ).unwrap();
//!
//! let positive = test.index_of("positive").unwrap();
//! let posterior = fuse(&prior, &[test.likelihoods(positive).unwrap()]).unwrap();
//!
//! let costs = CostTable::new(
//!     LabelSet::<Treatment>::new(["wait", "treat"]).unwrap(),
//!     health,
//!     vec![vec![0.0, 100.0], vec![5.0, 0.0]],
//! ).unwrap();
//!
//! // P(sick | +) ≈ 0.154, and missing a sick patient is expensive
//! let action = costs.decide(posterior.pmf()).unwrap();
//! assert_eq!(costs.actions().name(action), "treat");
//! ```

mod categorical;
mod conditional;
mod decision;
mod error;
mod fit;
mod fusion;
mod gaussian;
mod labels;
mod likelihood;

pub use categorical::CategoricalDistribution;
pub use conditional::CategoricalConditional;
pub use decision::CostTable;
pub use error::ProbError;
pub use fit::{fit_log_normal, LogNormal};
pub use fusion::{fuse, fuse_likelihoods};
pub use gaussian::GaussianConditional;
pub use labels::{Domain, Label, LabelSet};
pub use likelihood::Likelihood;

/// Tolerance for probability comparisons.
pub const PROB_TOLERANCE: f64 = 1e-9;
