//! Scoring sorting strategies on simulated items.
//!
//! A trial draws a true category from the prior, simulates all three sensor
//! readings for it, lets a [`Strategy`] form a belief from some of them,
//! decides, and pays the cost of that action for the true category.
//!
//! ```text
//!   prior ──▶ category ──▶ sensors ──▶ readings
//!                │                        │
//!                │                 Strategy (belief)
//!                │                        │
//!                │                    decide
//!                ▼                        ▼
//!           cost[action][category] ◀── action
//! ```
//!
//! Same seed, same items: [`compare_strategies`] runs every strategy against
//! an identically seeded source, so differences come from the strategies and
//! not from the draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sorter_prob::CategoricalDistribution;
use tracing::info;

use crate::agent::Sorter;
use crate::domain::Category;
use crate::error::SorterError;
use crate::sensors::Observation;

/// How a belief over categories is formed from one simulated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Ignore the sensors and act on the prior.
    PriorOnly,
    /// Weight sensor alone, no prior.
    WeightLikelihood,
    /// Detection sensor alone, no prior.
    DetectionLikelihood,
    /// Prior combined with the weight sensor.
    BayesWeight,
    /// Prior combined with all three sensors.
    BayesAllSensors,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::PriorOnly,
        Strategy::WeightLikelihood,
        Strategy::DetectionLikelihood,
        Strategy::BayesWeight,
        Strategy::BayesAllSensors,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::PriorOnly => "prior only",
            Strategy::WeightLikelihood => "weight likelihood",
            Strategy::DetectionLikelihood => "detection likelihood",
            Strategy::BayesWeight => "prior + weight",
            Strategy::BayesAllSensors => "prior + all sensors",
        }
    }

    /// Form this strategy's belief from a full set of readings.
    pub fn belief(
        &self,
        sorter: &Sorter,
        readings: &Observation,
    ) -> Result<CategoricalDistribution<Category>, SorterError> {
        match self {
            Strategy::PriorOnly => sorter.posterior(&Observation::new()),
            Strategy::WeightLikelihood => sorter.likelihood_only(&weight_only(readings)),
            Strategy::DetectionLikelihood => {
                let detection = Observation {
                    detection: readings.detection,
                    ..Observation::new()
                };
                sorter.likelihood_only(&detection)
            }
            Strategy::BayesWeight => sorter.posterior(&weight_only(readings)),
            Strategy::BayesAllSensors => sorter.posterior(readings),
        }
    }
}

fn weight_only(readings: &Observation) -> Observation {
    Observation {
        weight: readings.weight,
        ..Observation::new()
    }
}

/// Aggregate result of scoring one strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub strategy: Strategy,
    pub trials: usize,
    pub total_cost: f64,
    /// Trials whose action was also the cheapest action for the true category.
    pub correct: usize,
}

impl Evaluation {
    /// Average cost per item (0 for no trials).
    pub fn mean_cost(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_cost / self.trials as f64
        }
    }

    /// Fraction of trials with the best possible action.
    pub fn accuracy(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.correct as f64 / self.trials as f64
        }
    }
}

/// Score a strategy on `trials` simulated items.
pub fn evaluate<R: Rng + ?Sized>(
    sorter: &Sorter,
    strategy: Strategy,
    trials: usize,
    rng: &mut R,
) -> Result<Evaluation, SorterError> {
    let models = sorter.models();
    let costs = sorter.costs();

    let mut total_cost = 0.0;
    let mut correct = 0;

    for _ in 0..trials {
        let category = models.sample_category(rng);
        let readings = models.sample_observation(category, rng)?;
        let belief = strategy.belief(sorter, &readings)?;
        let action = sorter.decide(belief.pmf())?;

        total_cost += costs.cost(action, category)?;

        // Acting on certain knowledge of the category
        let mut certain = vec![0.0; models.categories().len()];
        certain[category.index()] = 1.0;
        if costs.decide(&certain)? == action {
            correct += 1;
        }
    }

    let evaluation = Evaluation {
        strategy,
        trials,
        total_cost,
        correct,
    };
    info!(
        strategy = strategy.name(),
        trials,
        mean_cost = evaluation.mean_cost(),
        accuracy = evaluation.accuracy(),
        "evaluated strategy"
    );
    Ok(evaluation)
}

/// Score several strategies on the same simulated items.
pub fn compare_strategies(
    sorter: &Sorter,
    strategies: &[Strategy],
    trials: usize,
    seed: u64,
) -> Result<Vec<Evaluation>, SorterError> {
    strategies
        .iter()
        .map(|&strategy| {
            let mut rng = StdRng::seed_from_u64(seed);
            evaluate(sorter, strategy, trials, &mut rng)
        })
        .collect()
}
