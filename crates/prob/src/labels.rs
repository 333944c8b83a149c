//! Tagged label sets for finite-valued variables.
//!
//! Every finite variable in a model (the item category, a sensor reading, an
//! action) gets its own zero-sized [`Domain`] marker. Label sets, indices and
//! likelihood vectors carry that marker as a type parameter, so a conductivity
//! reading can never be used to index the category prior:
//!
//! ```compile_fail
//! use sorter_prob::{Domain, LabelSet};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! struct Fruit;
//! impl Domain for Fruit { const NAME: &'static str = "fruit"; }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! struct Color;
//! impl Domain for Color { const NAME: &'static str = "color"; }
//!
//! let fruit = LabelSet::<Fruit>::new(["apple", "pear"]).unwrap();
//! let color = LabelSet::<Color>::new(["red", "green"]).unwrap();
//! let red = color.index_of("red").unwrap();
//! fruit.name(red); // mismatched types
//! ```

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::ProbError;

/// Marker for a finite domain.
pub trait Domain: fmt::Debug + Clone + Copy + PartialEq + Eq + Hash + Send + Sync + 'static {
    /// Human-readable domain name, used in error messages and logs.
    const NAME: &'static str;
}

/// A typed index into a [`LabelSet`] of the same domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label<D: Domain> {
    index: usize,
    _domain: PhantomData<D>,
}

impl<D: Domain> Label<D> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _domain: PhantomData,
        }
    }

    /// Position of this label in its label set.
    pub fn index(self) -> usize {
        self.index
    }
}

impl<D: Domain> fmt::Display for Label<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", D::NAME, self.index)
    }
}

/// Ordered, unique names for the values of a finite variable.
///
/// The order fixes the index used by every distribution built on this set.
///
/// # Example
///
/// ```rust
/// use sorter_prob::{Domain, LabelSet};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Coin;
/// impl Domain for Coin { const NAME: &'static str = "coin"; }
///
/// let coin = LabelSet::<Coin>::new(["heads", "tails"]).unwrap();
/// let tails = coin.index_of("tails").unwrap();
/// assert_eq!(tails.index(), 1);
/// assert_eq!(coin.name(tails), "tails");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet<D: Domain> {
    names: Vec<String>,
    _domain: PhantomData<D>,
}

impl<D: Domain> LabelSet<D> {
    /// Create a label set from names in index order.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::InvalidDistribution`] if the set is empty or a name
    /// appears twice.
    pub fn new<I, S>(names: I) -> Result<Self, ProbError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ProbError::invalid_distribution(format!(
                "label set for {} is empty",
                D::NAME
            )));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(ProbError::invalid_distribution(format!(
                    "duplicate label '{}' in {}",
                    name,
                    D::NAME
                )));
            }
        }
        Ok(Self {
            names,
            _domain: PhantomData,
        })
    }

    /// Number of values in the domain.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of a label, for display.
    ///
    /// Infallible so it can sit inside formatting code. A label taken from a
    /// larger set of the same domain has no name here and shows as `"?"`; use
    /// [`LabelSet::label`] to check a label against this set.
    pub fn name(&self, label: Label<D>) -> &str {
        self.names
            .get(label.index)
            .map(String::as_str)
            .unwrap_or("?")
    }

    /// Look up a label by name.
    pub fn index_of(&self, name: &str) -> Result<Label<D>, ProbError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(Label::new)
            .ok_or_else(|| ProbError::UnknownLabel {
                domain: D::NAME,
                label: name.to_string(),
            })
    }

    /// Turn a raw index into a label, checking the range.
    pub fn label(&self, index: usize) -> Result<Label<D>, ProbError> {
        self.check(index).map(Label::new)
    }

    /// Iterate over every label in index order.
    pub fn labels(&self) -> impl Iterator<Item = Label<D>> {
        (0..self.names.len()).map(Label::new)
    }

    pub(crate) fn check(&self, index: usize) -> Result<usize, ProbError> {
        if index < self.names.len() {
            Ok(index)
        } else {
            Err(ProbError::IndexOutOfRange {
                domain: D::NAME,
                index,
                size: self.names.len(),
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct Letter;

    impl Domain for Letter {
        const NAME: &'static str = "letter";
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct Digit;

    impl Domain for Digit {
        const NAME: &'static str = "digit";
    }

    #[test]
    fn test_index_of() {
        let set = LabelSet::<Letter>::new(["A", "B", "C"]).unwrap();
        assert_eq!(set.index_of("B").unwrap().index(), 1);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_unknown_label() {
        let set = LabelSet::<Letter>::new(["A", "B"]).unwrap();
        let err = set.index_of("Z").unwrap_err();
        assert_eq!(
            err,
            ProbError::UnknownLabel {
                domain: "letter",
                label: "Z".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = LabelSet::<Letter>::new(["A", "B", "A"]);
        assert!(matches!(result, Err(ProbError::InvalidDistribution { .. })));
    }

    #[test]
    fn test_empty_rejected() {
        let result = LabelSet::<Letter>::new(Vec::<String>::new());
        assert!(matches!(result, Err(ProbError::InvalidDistribution { .. })));
    }

    #[test]
    fn test_label_range() {
        let set = LabelSet::<Digit>::new(["0", "1"]).unwrap();
        assert_eq!(set.label(1).unwrap().index(), 1);
        assert!(matches!(
            set.label(2),
            Err(ProbError::IndexOutOfRange { index: 2, size: 2, .. })
        ));
    }

    #[test]
    fn test_labels_iterate_in_order() {
        let set = LabelSet::<Letter>::new(["A", "B", "C"]).unwrap();
        let names: Vec<&str> = set.labels().map(|l| set.name(l)).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_foreign_label_name() {
        let small = LabelSet::<Digit>::new(["0", "1"]).unwrap();
        let wide = LabelSet::<Digit>::new(["0", "1", "2"]).unwrap();
        assert_eq!(small.name(wide.label(2).unwrap()), "?");
    }

    #[test]
    fn test_display() {
        let set = LabelSet::<Digit>::new(["0", "1"]).unwrap();
        let one = set.index_of("1").unwrap();
        assert_eq!(one.to_string(), "digit#1");
    }
}
