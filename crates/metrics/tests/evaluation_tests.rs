//! Batch evaluation through a configured evaluator

use pretty_assertions::assert_eq;
use rankeval_core::config::{Config, EmptyRelevantPolicy, MetricsConfig};
use rankeval_metrics::{map_at_k, EvaluationRecord, Evaluator, RecordMetrics};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn evaluator(k: usize, empty_relevant: EmptyRelevantPolicy) -> Evaluator {
    Evaluator::new(MetricsConfig { k, empty_relevant }).expect("valid metrics config")
}

fn judgments() -> Vec<EvaluationRecord<u32>> {
    let json = r#"[
        {"predicted": [1, 2, 3, 4, 5], "relevant": [1, 3, 5]},
        {"predicted": [2, 4, 1, 3, 5], "relevant": [1, 2, 3]}
    ]"#;
    serde_json::from_str(json).expect("valid judgment JSON")
}

#[test]
fn test_evaluate_scores_every_record() {
    init_tracing();
    let records = judgments();
    let results = evaluator(3, EmptyRelevantPolicy::Fail)
        .evaluate(&records)
        .unwrap();

    assert_eq!(results.k, 3);
    assert_eq!(results.total_records, 2);
    assert_eq!(
        results.records.iter().map(|m| m.index).collect::<Vec<_>>(),
        vec![0, 1]
    );
    for metrics in &results.records {
        assert!((metrics.precision - 0.6).abs() < 1e-9);
        assert!((metrics.precision_at_k - 2.0 / 3.0).abs() < 1e-9);
        assert!((metrics.average_precision_at_k - 5.0 / 9.0).abs() < 1e-9);
    }
    assert!((results.map_at_k - 5.0 / 9.0).abs() < 1e-9);
}

#[test]
fn test_evaluate_matches_map_at_k() {
    let records = judgments();
    for k in 1..=6 {
        let results = evaluator(k, EmptyRelevantPolicy::Fail)
            .evaluate(&records)
            .unwrap();
        assert_eq!(results.map_at_k, map_at_k(&records, k).unwrap());
    }
}

#[test]
fn test_fail_policy_names_failing_record() {
    init_tracing();
    let mut records = judgments();
    records.push(EvaluationRecord::new(vec![7, 8], Vec::new()));

    let err = evaluator(3, EmptyRelevantPolicy::Fail)
        .evaluate(&records)
        .unwrap_err();

    assert!(err.is_undefined_metric());
    assert!(err.to_string().contains("Failed to evaluate record 2"));
}

#[test]
fn test_zero_policy_keeps_record_in_mean() {
    init_tracing();
    let mut records = judgments();
    records.push(EvaluationRecord::new(vec![7, 8], Vec::new()));

    let results = evaluator(3, EmptyRelevantPolicy::Zero)
        .evaluate(&records)
        .unwrap();

    assert_eq!(results.total_records, 3);
    assert_eq!(
        results.records[2],
        RecordMetrics {
            index: 2,
            precision: 0.0,
            precision_at_k: 0.0,
            average_precision_at_k: 0.0,
        }
    );
    assert!((results.map_at_k - (2.0 * 5.0 / 9.0) / 3.0).abs() < 1e-9);
}

#[test]
fn test_evaluator_from_loaded_config() {
    let config = Config::from_toml_str(
        r#"
        [metrics]
        k = 1
        empty_relevant = "zero"
    "#,
    )
    .unwrap();
    let results = Evaluator::from_config(&config)
        .unwrap()
        .evaluate(&judgments())
        .unwrap();

    // both rankings open with a relevant item
    assert_eq!(results.map_at_k, 1.0);
}

#[test]
fn test_results_serialize_to_json() {
    let results = evaluator(3, EmptyRelevantPolicy::Fail)
        .evaluate(&judgments())
        .unwrap();
    let value = serde_json::to_value(&results).unwrap();

    assert_eq!(value["k"], 3);
    assert_eq!(value["total_records"], 2);
    assert_eq!(value["records"].as_array().map(Vec::len), Some(2));
    assert!(value["records"][0]["average_precision_at_k"].is_f64());
}
