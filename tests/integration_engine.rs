mod common;

use std::sync::Arc;

use common::StaticMarketSource;
use common::StaticTransactionSource;
use common::TestFixtures;
use muraqib::Baseer;
use muraqib::Raqib;
use muraqib::constants::COINBASE_ADDRESS;
use pretty_assertions::assert_eq;
use serde_json::Value;

#[tokio::test]
async fn baseer_writes_dot_for_fetched_history() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = TestFixtures::config_in(dir.path());
    config.wallet_graph.limit = 7;

    let source = Arc::new(StaticTransactionSource::new(Some(vec![
        TestFixtures::tx("mint", &[], &["a"]),
        TestFixtures::tx("pay", &["a"], &["b", "c"]),
    ])));
    let baseer = Baseer::new(config.clone(), source.clone());

    let graph = baseer.analyze("a").await.unwrap().expect("graph should be built");

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(source.requests.lock().unwrap().clone(), vec![("a".to_string(), 7)]);

    let dot = std::fs::read_to_string(&config.wallet_graph.output).unwrap();
    assert!(dot.starts_with("digraph"));
    assert!(dot.contains(COINBASE_ADDRESS));
}

#[tokio::test]
async fn baseer_fetch_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = TestFixtures::config_in(dir.path());
    let baseer = Baseer::new(config.clone(), Arc::new(StaticTransactionSource::new(None)));

    let result = baseer.analyze("a").await.unwrap();

    assert!(result.is_none());
    assert!(!std::path::Path::new(&config.wallet_graph.output).exists());
}

#[tokio::test]
async fn baseer_empty_history_still_writes_an_empty_graph() {
    let dir = tempfile::tempdir().unwrap();
    let config = TestFixtures::config_in(dir.path());
    let baseer = Baseer::new(config.clone(), Arc::new(StaticTransactionSource::new(Some(Vec::new()))));

    let graph = baseer.analyze("a").await.unwrap().unwrap();

    assert!(graph.is_empty());
    assert!(std::path::Path::new(&config.wallet_graph.output).exists());
}

#[tokio::test]
async fn raqib_writes_report_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = TestFixtures::config_in(dir.path());
    let samples = TestFixtures::flat_with_volume_spike(30, 20);
    let raqib = Raqib::new(config.clone(), Arc::new(StaticMarketSource { samples: Some(samples) }));

    let rows = raqib.analyze("bitcoin").await.unwrap().unwrap();
    assert_eq!(rows.len(), 30);

    let report: Value = serde_json::from_str(&std::fs::read_to_string(&config.anomaly.output).unwrap()).unwrap();
    let report_rows = report.as_array().unwrap();
    assert_eq!(report_rows.len(), 30);
    assert_eq!(report_rows[20]["volume_spike"], Value::Bool(true));
    assert_eq!(report_rows[0]["return"], Value::Null);
}

#[tokio::test]
async fn raqib_fetch_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = TestFixtures::config_in(dir.path());
    let raqib = Raqib::new(config.clone(), Arc::new(StaticMarketSource { samples: None }));

    assert!(raqib.analyze("bitcoin").await.unwrap().is_none());
    assert!(!std::path::Path::new(&config.anomaly.output).exists());
}
