//! # Trash Sorter - Bayesian Perception for a Sorting Robot
//!
//! A simulated robot sorts trash into bins. It can't see the category of an
//! item directly; it has three noisy sensors:
//!
//! - **Conductivity**: metal or not, usually right
//! - **Detection**: a camera classifier that only knows bottle, cardboard and paper
//! - **Weight**: a scale, with a Normal weight model per category
//!
//! The robot combines a prior over categories with whatever readings it has
//! (naive Bayes fusion, see [`sorter_prob::fuse`]) and picks the bin with the
//! lowest expected cost.
//!
//! ## Example
//!
//! ```rust
//! use trash_sorter::{Observation, Sorter};
//!
//! let sorter = Sorter::textbook().unwrap();
//! let models = sorter.models();
//!
//! let obs = Observation::new()
//!     .with_conductivity(models.conductivity().index_of("true").unwrap())
//!     .with_weight(14.0);
//!
//! let decision = sorter.sort(&obs).unwrap();
//! assert_eq!(sorter.costs().actions().name(decision.action), "metal_bin");
//! ```
//!
//! ## Configuration
//!
//! All tables come from a [`SorterConfig`]. [`SorterConfig::default`] holds the
//! textbook values; [`SorterConfig::load`] reads a TOML file with the same
//! layout as `config/default.toml`.

pub mod agent;
pub mod config;
pub mod domain;
mod error;
pub mod evaluate;
pub mod sensors;

pub use agent::{Decision, Sorter};
pub use config::SorterConfig;
pub use domain::{Action, Category, Conductivity, Detection};
pub use error::SorterError;
pub use evaluate::{compare_strategies, evaluate, Evaluation, Strategy};
pub use sensors::{Observation, SensorModels};
