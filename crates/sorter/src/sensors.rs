//! Sensor models of the sorting cell.
//!
//! Three sensors look at every item:
//! - conductivity: binary, P(conductivity | category)
//! - detection: a three-way visual classifier, P(detection | category)
//! - weight: a scale, Normal in the weight given the category
//!
//! Each sensor can be simulated (sample a reading for a category) or read
//! backwards (likelihood of every category for an observed reading).

use rand::Rng;
use sorter_prob::{
    CategoricalConditional, CategoricalDistribution, GaussianConditional, Label, LabelSet,
    Likelihood,
};

use crate::config::SorterConfig;
use crate::domain::{Category, Conductivity, Detection};
use crate::error::SorterError;

/// Any subset of the three sensor readings for one item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Observation {
    pub conductivity: Option<Label<Conductivity>>,
    pub detection: Option<Label<Detection>>,
    pub weight: Option<f64>,
}

impl Observation {
    /// No readings at all.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conductivity(mut self, conductivity: Label<Conductivity>) -> Self {
        self.conductivity = Some(conductivity);
        self
    }

    pub fn with_detection(mut self, detection: Label<Detection>) -> Self {
        self.detection = Some(detection);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Number of sensors that produced a reading.
    pub fn len(&self) -> usize {
        usize::from(self.conductivity.is_some())
            + usize::from(self.detection.is_some())
            + usize::from(self.weight.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The category prior together with the three sensor conditionals.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorModels {
    prior: CategoricalDistribution<Category>,
    conductivity: CategoricalConditional<Conductivity, Category>,
    detection: CategoricalConditional<Detection, Category>,
    weight: GaussianConditional<Category>,
}

impl SensorModels {
    /// Build the models from configuration, validating every table.
    pub fn from_config(config: &SorterConfig) -> Result<Self, SorterError> {
        let categories = LabelSet::<Category>::new(config.categories.iter().cloned())?;
        let prior = CategoricalDistribution::new(categories.clone(), config.prior.clone())?;
        let conductivity = CategoricalConditional::new(
            LabelSet::new(config.conductivity.states.iter().cloned())?,
            categories.clone(),
            config.conductivity.table.clone(),
        )?;
        let detection = CategoricalConditional::new(
            LabelSet::new(config.detection.states.iter().cloned())?,
            categories.clone(),
            config.detection.table.clone(),
        )?;
        let weight = GaussianConditional::new(
            categories,
            config.weight.means.clone(),
            config.weight.sigmas.clone(),
        )?;

        Ok(Self {
            prior,
            conductivity,
            detection,
            weight,
        })
    }

    /// Models with the textbook tables.
    pub fn textbook() -> Result<Self, SorterError> {
        Self::from_config(&SorterConfig::default())
    }

    pub fn categories(&self) -> &LabelSet<Category> {
        self.prior.labels()
    }

    pub fn prior(&self) -> &CategoricalDistribution<Category> {
        &self.prior
    }

    pub fn conductivity(&self) -> &CategoricalConditional<Conductivity, Category> {
        &self.conductivity
    }

    pub fn detection(&self) -> &CategoricalConditional<Detection, Category> {
        &self.detection
    }

    pub fn weight(&self) -> &GaussianConditional<Category> {
        &self.weight
    }

    /// Draw a category from the prior.
    pub fn sample_category<R: Rng + ?Sized>(&self, rng: &mut R) -> Label<Category> {
        self.prior.sample(rng)
    }

    /// Draw a conductivity reading. Without a category one is drawn from the
    /// prior first.
    pub fn sample_conductivity<R: Rng + ?Sized>(
        &self,
        category: Option<Label<Category>>,
        rng: &mut R,
    ) -> Result<Label<Conductivity>, SorterError> {
        let category = category.unwrap_or_else(|| self.sample_category(rng));
        Ok(self.conductivity.sample(category, rng)?)
    }

    /// Draw a detection. Without a category one is drawn from the prior first.
    pub fn sample_detection<R: Rng + ?Sized>(
        &self,
        category: Option<Label<Category>>,
        rng: &mut R,
    ) -> Result<Label<Detection>, SorterError> {
        let category = category.unwrap_or_else(|| self.sample_category(rng));
        Ok(self.detection.sample(category, rng)?)
    }

    /// Draw a weight. Without a category one is drawn from the prior first.
    ///
    /// The Normal model is not truncated, so the weight can be negative.
    pub fn sample_weight<R: Rng + ?Sized>(
        &self,
        category: Option<Label<Category>>,
        rng: &mut R,
    ) -> Result<f64, SorterError> {
        let category = category.unwrap_or_else(|| self.sample_category(rng));
        Ok(self.weight.sample(category, rng)?)
    }

    /// Draw all three readings for one item of the given category.
    pub fn sample_observation<R: Rng + ?Sized>(
        &self,
        category: Label<Category>,
        rng: &mut R,
    ) -> Result<Observation, SorterError> {
        Ok(Observation {
            conductivity: Some(self.conductivity.sample(category, rng)?),
            detection: Some(self.detection.sample(category, rng)?),
            weight: Some(self.weight.sample(category, rng)?),
        })
    }

    pub fn likelihood_given_conductivity(
        &self,
        conductivity: Label<Conductivity>,
    ) -> Result<Likelihood<Category>, SorterError> {
        Ok(self.conductivity.likelihoods(conductivity)?)
    }

    pub fn likelihood_given_detection(
        &self,
        detection: Label<Detection>,
    ) -> Result<Likelihood<Category>, SorterError> {
        Ok(self.detection.likelihoods(detection)?)
    }

    /// Density of `weight` under each category's Normal. Not normalized.
    pub fn likelihood_given_weight(
        &self,
        weight: f64,
    ) -> Result<Likelihood<Category>, SorterError> {
        Ok(self.weight.likelihoods(weight)?)
    }

    /// One likelihood per available reading, in conductivity, detection,
    /// weight order. Each is computed on its own, independent of the others.
    pub fn likelihoods(
        &self,
        observation: &Observation,
    ) -> Result<Vec<Likelihood<Category>>, SorterError> {
        let mut likelihoods = Vec::with_capacity(observation.len());
        if let Some(c) = observation.conductivity {
            likelihoods.push(self.likelihood_given_conductivity(c)?);
        }
        if let Some(d) = observation.detection {
            likelihoods.push(self.likelihood_given_detection(d)?);
        }
        if let Some(w) = observation.weight {
            likelihoods.push(self.likelihood_given_weight(w)?);
        }
        Ok(likelihoods)
    }
}
