//! Finite domains of the sorting problem.

use sorter_prob::Domain;

/// The physical class of an item of trash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category;

impl Domain for Category {
    const NAME: &'static str = "category";
}

/// Binary conductivity reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Conductivity;

impl Domain for Conductivity {
    const NAME: &'static str = "conductivity";
}

/// Output of the visual classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Detection;

impl Domain for Detection {
    const NAME: &'static str = "detection";
}

/// Bin (or no-op) the robot can choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action;

impl Domain for Action {
    const NAME: &'static str = "action";
}
