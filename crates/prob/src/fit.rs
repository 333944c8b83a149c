//! Fitting a log-normal model to positive measurements.
//!
//! A Normal model of a physically positive quantity (weight, length) puts mass
//! on negative values. The log-normal keeps the support on (0, ∞): if
//! ln(X) ~ N(μ, σ²) then X is log-normal with parameters (μ, σ).

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::Distribution;

use crate::error::ProbError;

/// Log-normal distribution with log-space mean `mu` and log-space standard
/// deviation `sigma`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormal {
    pub mu: f64,
    pub sigma: f64,
}

impl LogNormal {
    /// Create a log-normal distribution.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::InvalidInput`] if `mu` is not finite or `sigma` is
    /// negative or not finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, ProbError> {
        if !mu.is_finite() || !sigma.is_finite() || sigma < 0.0 {
            return Err(ProbError::invalid_input(format!(
                "log-normal parameters must be finite with sigma >= 0, got mu = {}, sigma = {}",
                mu, sigma
            )));
        }
        Ok(Self { mu, sigma })
    }

    /// Probability density at `x`. Zero for `x <= 0`.
    ///
    /// A zero-width fit is a point mass at `exp(mu)`.
    pub fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if self.sigma == 0.0 {
            return if (x.ln() - self.mu).abs() < 1e-10 {
                f64::INFINITY
            } else {
                0.0
            };
        }
        let z = (x.ln() - self.mu) / self.sigma;
        (-0.5 * z * z).exp() / (x * self.sigma * (2.0 * PI).sqrt())
    }

    /// E[X] = exp(μ + σ²/2)
    pub fn mean(&self) -> f64 {
        (self.mu + 0.5 * self.sigma * self.sigma).exp()
    }

    /// Draw a positive value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, ProbError> {
        let dist = rand_distr::LogNormal::new(self.mu, self.sigma)
            .map_err(|e| ProbError::invalid_input(e.to_string()))?;
        Ok(dist.sample(rng))
    }
}

/// Fit a log-normal to strictly positive samples.
///
/// Returns `mu = mean(ln x)` and `sigma = sqrt(var(ln x))` using the
/// population variance. A single sample gives `sigma = 0`.
///
/// # Errors
///
/// Returns [`ProbError::InvalidInput`] if `samples` is empty or any sample is
/// not a finite positive number.
///
/// # Example
///
/// ```rust
/// use sorter_prob::fit_log_normal;
///
/// let e = std::f64::consts::E;
/// let fit = fit_log_normal(&[e, e, e]).unwrap();
/// assert!((fit.mu - 1.0).abs() < 1e-12);
/// assert!(fit.sigma.abs() < 1e-12);
/// ```
pub fn fit_log_normal(samples: &[f64]) -> Result<LogNormal, ProbError> {
    if samples.is_empty() {
        return Err(ProbError::invalid_input("cannot fit a log-normal to zero samples"));
    }
    if let Some(bad) = samples.iter().find(|x| !(x.is_finite() && **x > 0.0)) {
        return Err(ProbError::invalid_input(format!(
            "log-normal samples must be positive, got {}",
            bad
        )));
    }

    let logs: Vec<f64> = samples.iter().map(|x| x.ln()).collect();
    let n = logs.len() as f64;
    let mu = logs.iter().sum::<f64>() / n;
    let variance = logs.iter().map(|l| (l - mu) * (l - mu)).sum::<f64>() / n;
    LogNormal::new(mu, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::E;

    #[test]
    fn test_fit_constant_samples() {
        let fit = fit_log_normal(&[E, E, E]).unwrap();
        assert!((fit.mu - 1.0).abs() < 1e-12);
        assert!(fit.sigma.abs() < 1e-12);
    }

    #[test]
    fn test_fit_population_variance() {
        // ln values: 0 and 2 → mean 1, population variance 1
        let fit = fit_log_normal(&[1.0, E * E]).unwrap();
        assert!((fit.mu - 1.0).abs() < 1e-12);
        assert!((fit.sigma - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_accepted() {
        let fit = fit_log_normal(&[10.0]).unwrap();
        assert!((fit.mu - 10.0_f64.ln()).abs() < 1e-12);
        assert_eq!(fit.sigma, 0.0);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(matches!(
            fit_log_normal(&[1.0, 0.0]),
            Err(ProbError::InvalidInput { .. })
        ));
        assert!(matches!(
            fit_log_normal(&[1.0, -3.0]),
            Err(ProbError::InvalidInput { .. })
        ));
        assert!(matches!(fit_log_normal(&[]), Err(ProbError::InvalidInput { .. })));
    }

    #[test]
    fn test_pdf() {
        let d = LogNormal::new(0.0, 1.0).unwrap();
        // At x = 1: 1/√(2π)
        assert!((d.pdf(1.0) - 0.398_942_280_4).abs() < 1e-9);
        assert_eq!(d.pdf(0.0), 0.0);
        assert_eq!(d.pdf(-2.0), 0.0);
    }

    #[test]
    fn test_refit_recovers_parameters() {
        let truth = LogNormal::new(3.0, 0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(3630);
        let samples: Vec<f64> = (0..20_000).map(|_| truth.sample(&mut rng).unwrap()).collect();
        assert!(samples.iter().all(|&x| x > 0.0));
        let fit = fit_log_normal(&samples).unwrap();
        assert!((fit.mu - 3.0).abs() < 0.03);
        assert!((fit.sigma - 0.5).abs() < 0.03);
    }
}
