//! Set-overlap precision and its rank-cutoff variant

use crate::record::EvaluationRecord;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::trace;

/// Fraction of distinct predicted items that are relevant
///
/// Returns 0.0 when nothing was predicted.
pub fn precision<T: Eq + Hash>(record: &EvaluationRecord<T>) -> f64 {
    distinct_precision(record.predicted(), record.relevant())
}

/// Precision over the first `k` predicted items
///
/// A `k` larger than the list uses the whole list. Returns 0.0 for `k == 0` or an
/// empty prediction.
pub fn precision_at_k<T: Eq + Hash>(record: &EvaluationRecord<T>, k: usize) -> f64 {
    let predicted = record.predicted();
    if k == 0 || predicted.is_empty() {
        return 0.0;
    }

    let cutoff = k.min(predicted.len());
    let score = distinct_precision(&predicted[..cutoff], record.relevant());
    trace!(k, cutoff, score, "Computed precision@k");
    score
}

fn distinct_precision<T: Eq + Hash>(predicted: &[T], relevant: &HashSet<T>) -> f64 {
    if predicted.is_empty() {
        return 0.0;
    }

    let distinct: HashSet<&T> = predicted.iter().collect();
    let hits = distinct
        .iter()
        .filter(|&&item| relevant.contains(item))
        .count();

    hits as f64 / distinct.len() as f64
}
