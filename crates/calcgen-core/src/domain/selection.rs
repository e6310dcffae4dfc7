//! Feature and library selections as sets of enums.
//!
//! A selection is a plain ordered set: no booleans to keep in sync, no
//! insertion-order effects. Iteration always runs in declaration order of
//! the underlying enum, which keeps every consumer (resolution, catalogs,
//! listings) deterministic no matter how the set was built.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::value_objects::{Feature, Library};

/// An ordered set of enum values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection<T: Ord>(BTreeSet<T>);

/// The features switched on for a blueprint.
pub type FeatureSet = Selection<Feature>;

/// The libraries switched on for a blueprint.
pub type LibrarySet = Selection<Library>;

impl<T: Ord + Copy> Selection<T> {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a value. Returns whether the set changed.
    pub fn insert(&mut self, value: T) -> bool {
        self.0.insert(value)
    }

    /// Remove a value. Returns whether it was present.
    pub fn remove(&mut self, value: T) -> bool {
        self.0.remove(&value)
    }

    pub fn contains(&self, value: T) -> bool {
        self.0.contains(&value)
    }

    /// Consuming insert, for fluent construction.
    pub fn with(mut self, value: T) -> Self {
        self.0.insert(value);
        self
    }

    /// Iterate in declaration order of the enum.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Ord + Copy> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Ord + Copy> Extend<T> for Selection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<'a, T: Ord + Copy> IntoIterator for &'a Selection<T> {
    type Item = T;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl LibrarySet {
    /// Whether any third-party (non-bundled) library is selected.
    pub fn has_third_party(&self) -> bool {
        self.iter().any(|library| !library.is_bundled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_does_not_matter() {
        let forward: FeatureSet = [Feature::Trigonometric, Feature::Statistical, Feature::Memory]
            .into_iter()
            .collect();
        let backward: FeatureSet = [Feature::Memory, Feature::Statistical, Feature::Trigonometric]
            .into_iter()
            .collect();

        assert_eq!(forward, backward);
        let order: Vec<Feature> = forward.iter().collect();
        assert_eq!(
            order,
            vec![Feature::Memory, Feature::Trigonometric, Feature::Statistical]
        );
    }

    #[test]
    fn duplicate_inserts_are_idempotent() {
        let mut set = LibrarySet::new();
        assert!(set.insert(Library::Numpy));
        assert!(!set.insert(Library::Numpy));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn third_party_detection_ignores_bundled_math() {
        let bundled_only = LibrarySet::new().with(Library::Math);
        assert!(!bundled_only.has_third_party());

        let with_numpy = bundled_only.with(Library::Numpy);
        assert!(with_numpy.has_third_party());
    }

    #[test]
    fn remove_reports_presence() {
        let mut set = FeatureSet::new().with(Feature::Memory);
        assert!(set.remove(Feature::Memory));
        assert!(!set.remove(Feature::Memory));
        assert!(set.is_empty());
    }
}
