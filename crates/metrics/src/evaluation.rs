//! Batch evaluation driven by [`MetricsConfig`]

use crate::average_precision::ap_at_k;
use crate::precision::{precision, precision_at_k};
use crate::record::EvaluationRecord;
use rankeval_core::config::{Config, EmptyRelevantPolicy, MetricsConfig};
use rankeval_core::error::{Error, Result};
use serde::Serialize;
use std::hash::Hash;
use tracing::{debug, trace, warn};

/// Scores for a single record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecordMetrics {
    /// Position of the record in the evaluated batch
    pub index: usize,
    pub precision: f64,
    pub precision_at_k: f64,
    pub average_precision_at_k: f64,
}

/// Scores for a whole batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResults {
    pub k: usize,
    pub total_records: usize,
    pub map_at_k: f64,
    pub records: Vec<RecordMetrics>,
}

/// Evaluates batches of records at a fixed cutoff
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: MetricsConfig,
}

impl Evaluator {
    /// Create an evaluator, rejecting an invalid configuration
    pub fn new(config: MetricsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an evaluator from the `[metrics]` section of a loaded config
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.metrics.clone())
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Score every record and the batch MAP@k
    ///
    /// Under [`EmptyRelevantPolicy::Fail`] the first record with an undefined AP@k aborts
    /// the batch, and the returned error names its index. Under
    /// [`EmptyRelevantPolicy::Zero`] such records score 0.0 and still count toward the
    /// mean.
    pub fn evaluate<T: Eq + Hash>(
        &self,
        records: &[EvaluationRecord<T>],
    ) -> Result<EvaluationResults> {
        let k = self.config.k;
        let mut scored = Vec::with_capacity(records.len());
        let mut ap_total = 0.0;

        for (index, record) in records.iter().enumerate() {
            let average_precision_at_k = self.average_precision(index, record)?;
            let metrics = RecordMetrics {
                index,
                precision: precision(record),
                precision_at_k: precision_at_k(record, k),
                average_precision_at_k,
            };
            trace!(?metrics, "Scored record");

            ap_total += average_precision_at_k;
            scored.push(metrics);
        }

        let map_at_k = if records.is_empty() {
            0.0
        } else {
            ap_total / records.len() as f64
        };
        debug!(total_records = records.len(), k, map_at_k, "Evaluated batch");

        Ok(EvaluationResults {
            k,
            total_records: records.len(),
            map_at_k,
            records: scored,
        })
    }

    fn average_precision<T: Eq + Hash>(
        &self,
        index: usize,
        record: &EvaluationRecord<T>,
    ) -> Result<f64> {
        match ap_at_k(record, self.config.k) {
            Ok(score) => Ok(score),
            Err(e)
                if e.is_undefined_metric()
                    && self.config.empty_relevant == EmptyRelevantPolicy::Zero =>
            {
                warn!(index, "Record has no relevant items, scoring AP@k as 0.0");
                Ok(0.0)
            }
            Err(e) => Err(Error::with_context(
                format!("Failed to evaluate record {index}"),
                e,
            )),
        }
    }
}
