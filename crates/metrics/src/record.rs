//! Evaluation record: one ranked prediction list and its ground truth

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// One ranked prediction list paired with the set of items judged relevant
///
/// Both fields share the item type `T`, so deduplication and membership use the same
/// equality and hashing. The record is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord<T: Eq + Hash> {
    /// Item identifiers in rank order, best match first; duplicates allowed
    predicted: Vec<T>,
    /// Ground-truth relevant items
    relevant: HashSet<T>,
}

impl<T: Eq + Hash> EvaluationRecord<T> {
    /// Create a record from a ranked list and a collection of relevant items
    ///
    /// Duplicate relevant items collapse into one.
    pub fn new(
        predicted: impl IntoIterator<Item = T>,
        relevant: impl IntoIterator<Item = T>,
    ) -> Self {
        Self {
            predicted: predicted.into_iter().collect(),
            relevant: relevant.into_iter().collect(),
        }
    }

    /// Predicted items in rank order
    pub fn predicted(&self) -> &[T] {
        &self.predicted
    }

    /// Relevant items
    pub fn relevant(&self) -> &HashSet<T> {
        &self.relevant
    }

    /// Whether `item` is in the relevant set
    pub fn is_relevant(&self, item: &T) -> bool {
        self.relevant.contains(item)
    }
}
