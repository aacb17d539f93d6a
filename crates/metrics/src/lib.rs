//! Information-retrieval quality metrics for ranked results
//!
//! This crate provides:
//! - Precision and Precision@k over a single evaluation record
//! - Average Precision@k (AP@k) and Mean Average Precision@k (MAP@k)
//! - A configured evaluator that scores a batch of records in one pass
//!
//! All metric functions are pure and may be called from any thread.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod average_precision;
pub mod evaluation;
pub mod precision;
pub mod record;

pub use average_precision::{ap_at_k, map_at_k};
pub use evaluation::{EvaluationResults, Evaluator, RecordMetrics};
pub use precision::{precision, precision_at_k};
pub use record::EvaluationRecord;
