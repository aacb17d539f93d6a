//! Average Precision@k and its batch mean
//!
//! AP@k is normalized by `min(k, |relevant|)`, not by the number of hits found, so a
//! ranking that misses relevant items inside the cutoff is penalized for them. A record
//! with no relevant items has a zero denominator; AP@k reports that as
//! [`Error::UndefinedMetric`] rather than returning 0.0 or NaN.

use crate::record::EvaluationRecord;
use rankeval_core::error::{Error, Result};
use std::hash::Hash;
use tracing::{debug, trace};

const AP_AT_K: &str = "ap@k";

/// Average Precision over the first `k` predicted items
///
/// Each relevant item at rank `i` (1-based) contributes `hits / i`. Predicted items are
/// not deduplicated here: a relevant item repeated in the ranking counts as a hit each
/// time it appears.
///
/// Returns 0.0 for `k == 0`, an empty prediction, or no relevant item inside the cutoff.
///
/// # Errors
/// [`Error::UndefinedMetric`] when `k > 0`, the prediction is non-empty and the relevant
/// set is empty.
pub fn ap_at_k<T: Eq + Hash>(record: &EvaluationRecord<T>, k: usize) -> Result<f64> {
    let predicted = record.predicted();
    if k == 0 || predicted.is_empty() {
        return Ok(0.0);
    }

    let relevant = record.relevant();
    if relevant.is_empty() {
        return Err(Error::undefined_metric(
            AP_AT_K,
            format!("relevant set is empty, so the denominator min({k}, 0) is zero"),
        ));
    }

    let mut hits = 0usize;
    let mut precision_sum = 0.0;
    for (rank, item) in predicted.iter().take(k).enumerate() {
        if relevant.contains(item) {
            hits += 1;
            precision_sum += hits as f64 / (rank + 1) as f64;
        }
    }

    if hits == 0 {
        return Ok(0.0);
    }

    let denominator = k.min(relevant.len());
    let score = precision_sum / denominator as f64;
    trace!(k, hits, denominator, score, "Computed AP@k");
    Ok(score)
}

/// Mean of [`ap_at_k`] across `records`
///
/// Scores are summed in record order. Returns 0.0 for an empty batch.
///
/// # Errors
/// The first record whose AP@k is undefined aborts the whole batch; no partial mean is
/// produced.
pub fn map_at_k<T: Eq + Hash>(records: &[EvaluationRecord<T>], k: usize) -> Result<f64> {
    if records.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0.0;
    for (index, record) in records.iter().enumerate() {
        total += ap_at_k(record, k).inspect_err(|e| {
            debug!(index, k, "Aborting MAP@k: {e}");
        })?;
    }

    let score = total / records.len() as f64;
    debug!(records = records.len(), k, score, "Computed MAP@k");
    Ok(score)
}
