//! Perceive, then decide.
//!
//! ```text
//!   Observation ──▶ likelihoods ──▶ fuse with prior ──▶ posterior
//!                                                          │
//!                                  cost table ──▶ argmin E[cost]
//!                                                          │
//!                                                          ▼
//!                                                       action
//! ```

use sorter_prob::{
    fuse, fuse_likelihoods, CategoricalDistribution, CostTable, Label, LabelSet, ProbError,
};
use tracing::{debug, info};

use crate::config::SorterConfig;
use crate::domain::{Action, Category};
use crate::error::SorterError;
use crate::sensors::{Observation, SensorModels};

/// Outcome of sorting one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub action: Label<Action>,
    pub posterior: CategoricalDistribution<Category>,
    /// Expected cost of every action under the posterior.
    pub expected_costs: Vec<f64>,
}

impl Decision {
    /// Expected cost of the chosen action.
    pub fn expected_cost(&self) -> f64 {
        self.expected_costs[self.action.index()]
    }
}

/// The sorting agent: sensor models plus a cost table over the same categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Sorter {
    models: SensorModels,
    costs: CostTable<Action, Category>,
}

impl Sorter {
    pub fn new(
        models: SensorModels,
        costs: CostTable<Action, Category>,
    ) -> Result<Self, SorterError> {
        let categories = models.categories();
        if costs.states().len() != categories.len() {
            return Err(ProbError::DimensionMismatch {
                expected: categories.len(),
                got: costs.states().len(),
            }
            .into());
        }
        if costs.states() != categories {
            return Err(ProbError::InvalidDistribution {
                reason: format!(
                    "cost table states {:?} differ from categories {:?}",
                    costs.states().names(),
                    categories.names()
                ),
            }
            .into());
        }
        Ok(Self { models, costs })
    }

    pub fn from_config(config: &SorterConfig) -> Result<Self, SorterError> {
        let models = SensorModels::from_config(config)?;
        let costs = CostTable::new(
            LabelSet::new(config.actions.iter().cloned())?,
            models.categories().clone(),
            config.costs.clone(),
        )?;
        Self::new(models, costs)
    }

    /// Sorter with the textbook tables.
    pub fn textbook() -> Result<Self, SorterError> {
        Self::from_config(&SorterConfig::default())
    }

    pub fn models(&self) -> &SensorModels {
        &self.models
    }

    pub fn costs(&self) -> &CostTable<Action, Category> {
        &self.costs
    }

    /// Posterior over categories given whatever readings are present.
    ///
    /// With no readings this is the prior.
    pub fn posterior(
        &self,
        observation: &Observation,
    ) -> Result<CategoricalDistribution<Category>, SorterError> {
        let likelihoods = self.models.likelihoods(observation)?;
        let posterior = fuse(self.models.prior(), &likelihoods)?;
        self.log_belief("posterior", observation, &posterior);
        Ok(posterior)
    }

    /// Belief from the readings alone, ignoring the prior.
    pub fn likelihood_only(
        &self,
        observation: &Observation,
    ) -> Result<CategoricalDistribution<Category>, SorterError> {
        let likelihoods = self.models.likelihoods(observation)?;
        let belief = fuse_likelihoods(self.models.categories(), &likelihoods)?;
        self.log_belief("likelihood", observation, &belief);
        Ok(belief)
    }

    /// Cheapest action in expectation under `belief`.
    pub fn decide(&self, belief: &[f64]) -> Result<Label<Action>, SorterError> {
        Ok(self.costs.decide(belief)?)
    }

    /// Posterior, decision and expected costs for one item.
    pub fn sort(&self, observation: &Observation) -> Result<Decision, SorterError> {
        let posterior = self.posterior(observation)?;
        let expected_costs = self.costs.expected_costs(posterior.pmf())?;
        let action = self.costs.decide(posterior.pmf())?;
        info!(
            action = self.costs.actions().name(action),
            expected_cost = expected_costs[action.index()],
            "sorted item"
        );
        Ok(Decision {
            action,
            posterior,
            expected_costs,
        })
    }

    fn log_belief(
        &self,
        kind: &str,
        observation: &Observation,
        belief: &CategoricalDistribution<Category>,
    ) {
        debug!(
            kind,
            readings = observation.len(),
            most_likely = self.models.categories().name(belief.mode()),
            entropy = belief.entropy(),
            "computed belief"
        );
    }
}
