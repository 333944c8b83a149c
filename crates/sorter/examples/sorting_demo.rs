//! Trash sorting with Bayesian perception
//!
//! Run with: cargo run -p trash-sorter --example sorting_demo
//! Verbose:  RUST_LOG=debug cargo run -p trash-sorter --example sorting_demo
//!
//! Pass a TOML file to replace the textbook tables:
//!   cargo run -p trash-sorter --example sorting_demo -- my_config.toml
//!
//! This example demonstrates:
//! - The category prior and sampling from it
//! - Simulating the three sensors
//! - Posteriors from one sensor and from all three
//! - Expected-cost decisions
//! - Scoring strategies on simulated items
//! - Fitting a log-normal weight model

use rand::rngs::StdRng;
use rand::SeedableRng;
use sorter_prob::fit_log_normal;
use tracing_subscriber::EnvFilter;
use trash_sorter::{compare_strategies, Observation, Sorter, SorterConfig, SorterError, Strategy};

fn main() -> Result<(), SorterError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SorterConfig::load(path)?,
        None => SorterConfig::default(),
    };
    let sorter = Sorter::from_config(&config)?;
    let models = sorter.models();
    let categories = models.categories();
    let mut rng = StdRng::seed_from_u64(3630);

    println!("=== Trash Sorting Robot ===\n");

    // -------------------------------------------------------------------------
    // 1. The Prior
    // -------------------------------------------------------------------------
    println!("1. Prior over categories");
    println!("------------------------");
    for label in categories.labels() {
        println!(
            "  {:<12} {:.3}",
            categories.name(label),
            models.prior().prob(label)?
        );
    }
    let draws: Vec<&str> = (0..8)
        .map(|_| categories.name(models.sample_category(&mut rng)))
        .collect();
    println!("  8 draws: {}", draws.join(", "));
    println!();

    // -------------------------------------------------------------------------
    // 2. What the sensors should report on average
    // -------------------------------------------------------------------------
    println!("2. Predicted readings before looking at an item");
    println!("-----------------------------------------------");
    let conductivity = models.conductivity().predict(models.prior())?;
    let detection = models.detection().predict(models.prior())?;
    println!("  P(conductivity) = {:.3?}", conductivity.pmf());
    println!("  P(detection)    = {:.3?}", detection.pmf());
    println!();

    // -------------------------------------------------------------------------
    // 3. Sorting simulated items
    // -------------------------------------------------------------------------
    println!("3. Sorting simulated items");
    println!("--------------------------");
    for _ in 0..5 {
        let truth = models.sample_category(&mut rng);
        let obs = models.sample_observation(truth, &mut rng)?;
        let decision = sorter.sort(&obs)?;
        println!(
            "  true {:<12} conductive={:<5} detected={:<9} weight={:>7.1}  → {:<9} (E[cost] {:.3}, P(truth) {:.3})",
            categories.name(truth),
            obs.conductivity.map_or("-", |c| models.conductivity().effects().name(c)),
            obs.detection.map_or("-", |d| models.detection().effects().name(d)),
            obs.weight.unwrap_or(f64::NAN),
            sorter.costs().actions().name(decision.action),
            decision.expected_cost(),
            decision.posterior.prob(truth)?,
        );
    }
    println!();

    // One sensor at a time
    let conductive = models.conductivity().index_of("true")?;
    let posterior = sorter.posterior(&Observation::new().with_conductivity(conductive))?;
    println!("  Conductive item: posterior = {:.3?}", posterior.pmf());
    println!();

    // -------------------------------------------------------------------------
    // 4. Strategy comparison
    // -------------------------------------------------------------------------
    println!("4. Average cost per item over 1000 simulated items");
    println!("--------------------------------------------------");
    for eval in compare_strategies(&sorter, &Strategy::ALL, 1000, 3630)? {
        println!(
            "  {:<22} mean cost {:.3}   best action {:>5.1}%",
            eval.strategy.name(),
            eval.mean_cost(),
            100.0 * eval.accuracy()
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // 5. A positive weight model
    // -------------------------------------------------------------------------
    println!("5. Log-normal fit of simulated bottle weights");
    println!("---------------------------------------------");
    let bottle = categories.index_of("bottle")?;
    let mut weights = Vec::new();
    let mut negative = 0;
    for _ in 0..1000 {
        let w = models.sample_weight(Some(bottle), &mut rng)?;
        if w > 0.0 {
            weights.push(w);
        } else {
            negative += 1;
        }
    }
    let fit = fit_log_normal(&weights)?;
    println!("  {} of 1000 Normal draws were not positive", negative);
    println!(
        "  ln(weight) ~ N({:.3}, {:.3}²), mean weight {:.1}",
        fit.mu,
        fit.sigma,
        fit.mean()
    );
    let resampled = fit.sample(&mut rng)?;
    println!("  A log-normal draw is always positive: {:.1}", resampled);

    Ok(())
}
