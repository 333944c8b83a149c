//! Property tests for the inference core.
//!
//! These check the invariants every constructed object must satisfy,
//! for arbitrary tables rather than hand-picked ones.

use proptest::prelude::*;
use sorter_prob::{
    fuse, CategoricalConditional, CategoricalDistribution, Domain, LabelSet, Likelihood,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Hypothesis;

impl Domain for Hypothesis {
    const NAME: &'static str = "hypothesis";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Reading;

impl Domain for Reading {
    const NAME: &'static str = "reading";
}

fn labels<D: Domain>(prefix: &str, n: usize) -> LabelSet<D> {
    LabelSet::new((0..n).map(|i| format!("{prefix}{i}"))).unwrap()
}

/// Non-negative weights with at least one strictly positive entry.
fn weights(n: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1000.0, n).prop_filter("non-zero sum", |w| {
        w.iter().sum::<f64>() > 1e-6
    })
}

fn likelihood(n: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..10.0, n)
}

proptest! {
    #[test]
    fn pmf_sums_to_one(w in (1usize..8).prop_flat_map(weights)) {
        let n = w.len();
        let d = CategoricalDistribution::new(labels::<Hypothesis>("h", n), w).unwrap();
        let sum: f64 = d.pmf().iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
        prop_assert!(d.pmf().iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn conditional_rows_sum_to_one(
        table in (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(weights(cols), rows)
        })
    ) {
        let rows = table.len();
        let cols = table[0].len();
        let c = CategoricalConditional::new(
            labels::<Reading>("r", cols),
            labels::<Hypothesis>("h", rows),
            table,
        ).unwrap();
        for b in c.causes().labels() {
            let sum: f64 = c.row(b).unwrap().iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }
        for a in c.effects().labels() {
            if let Ok(l) = c.likelihoods(a) {
                let sum: f64 = l.values().iter().sum();
                prop_assert!((sum - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn fusion_order_does_not_matter(
        (prior, a, b, c) in (2usize..6).prop_flat_map(|n| {
            (weights(n), likelihood(n), likelihood(n), likelihood(n))
        })
    ) {
        let n = prior.len();
        let prior = CategoricalDistribution::new(labels::<Hypothesis>("h", n), prior).unwrap();
        let a = Likelihood::new(a).unwrap();
        let b = Likelihood::new(b).unwrap();
        let c = Likelihood::new(c).unwrap();

        let forward = fuse(&prior, &[a.clone(), b.clone(), c.clone()]).unwrap();
        let backward = fuse(&prior, &[c, b, a]).unwrap();
        for (x, y) in forward.pmf().iter().zip(backward.pmf()) {
            prop_assert!((x - y).abs() < 1e-9);
        }
        let sum: f64 = forward.pmf().iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sampling_stays_in_range(w in (1usize..8).prop_flat_map(weights), u in 0.0f64..1.0) {
        let n = w.len();
        let d = CategoricalDistribution::new(labels::<Hypothesis>("h", n), w).unwrap();
        let label = d.sample_at(u);
        prop_assert!(label.index() < n);
        prop_assert!(d.pmf()[label.index()] > 0.0);
    }
}
