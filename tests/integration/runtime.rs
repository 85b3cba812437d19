//! End-to-end report runs against mocked market data and publisher

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use marketbrief::config::{Config, PublisherConfig};
use marketbrief::core::bootstrap::build_runtime;
use marketbrief::core::runtime::PublishOutcome;
use marketbrief::error::{RuntimeError, ScanError};
use marketbrief::models::analysis::MarketTrend;

use crate::test_utils::{chart_body, mock_chart, mock_closes, mock_quote_summary, mover};

fn run_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(21, 30, 0)
        .unwrap()
}

fn config(server: &MockServer, output_dir: &std::path::Path, watchlist: &[&str]) -> Config {
    Config {
        watchlist: watchlist.iter().map(|s| s.to_string()).collect(),
        top_movers_limit: 2,
        volatility_index: "VIX".to_string(),
        market_data_url: Url::parse(&server.uri()).expect("mock server uri"),
        output_dir: output_dir.to_string_lossy().into_owned(),
        ..Config::default()
    }
}

async fn mock_market(server: &MockServer) {
    mock_closes(server, "SPY", &[500.0, 501.0, 502.0, 503.0, 504.0, 507.0]).await;
    mock_closes(server, "QQQ", &[430.0, 428.0, 425.0, 424.0, 420.0]).await;
    mock_closes(server, "VIX", &[13.0, 14.25]).await;

    for (symbol, change, ratio) in [("NVDA", 6.0, 2.5), ("KO", 0.5, 1.0), ("TSLA", -7.0, 1.5)] {
        let (closes, volumes) = mover(60, change, ratio);
        mock_chart(server, symbol, chart_body(&closes, &volumes)).await;
    }
    mock_quote_summary(server, "NVDA", "NVIDIA", "Technology", 2.2e12).await;
}

#[tokio::test]
async fn run_archives_report_without_publisher() {
    let server = MockServer::start().await;
    mock_market(&server).await;
    let dir = tempfile::tempdir().expect("tempdir");

    let config = config(&server, dir.path(), &["KO", "TSLA", "DELISTED", "NVDA"]);
    let runtime = build_runtime(&config).expect("runtime");
    let run = runtime.run_once(run_time()).await.expect("run succeeds");

    assert_eq!(run.shortlist.symbols(), vec!["NVDA", "TSLA"]);
    assert_eq!(run.shortlist.analyzed, 3);
    assert_eq!(run.shortlist.skipped, 1);
    assert_eq!(run.shortlist.records[0].company_name, "NVIDIA");
    assert_eq!(run.shortlist.records[1].sector, "unknown");

    assert_eq!(run.summary.trend, Some(MarketTrend::Bullish));
    assert_eq!(run.summary.volatility_index, Some(14.25));
    assert_eq!(run.publish, PublishOutcome::Skipped);

    assert_eq!(run.local_copy, dir.path().join("newsletter_20240315_213000.html"));
    let saved = std::fs::read_to_string(&run.local_copy).expect("saved report");
    assert_eq!(saved, run.report.html);
    assert!(saved.contains("1. NVDA"));
    assert!(saved.contains("2. TSLA"));
    assert!(!saved.contains("KO"));
    assert_eq!(run.report.title, "Daily Market Movers - 15/03/2024 | Top Movers");
}

#[tokio::test]
async fn run_publishes_draft_when_configured() {
    let server = MockServer::start().await;
    mock_market(&server).await;
    Mock::given(method("POST"))
        .and(path("/v2/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": { "id": "post_99" } })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().expect("tempdir");

    let mut config = config(&server, dir.path(), &["NVDA", "KO"]);
    config.publisher = Some(PublisherConfig {
        api_url: Url::parse(&server.uri()).expect("mock server uri"),
        api_key: "key".to_string(),
        publication_id: "pub_1".to_string(),
    });

    let run = build_runtime(&config)
        .expect("runtime")
        .run_once(run_time())
        .await
        .expect("run succeeds");

    match run.publish {
        PublishOutcome::Published(receipt) => assert_eq!(receipt.id, "post_99"),
        other => panic!("expected published draft, got {other:?}"),
    }
    assert!(run.local_copy.exists());
}

#[tokio::test]
async fn publish_failure_keeps_local_copy() {
    let server = MockServer::start().await;
    mock_market(&server).await;
    Mock::given(method("POST"))
        .and(path("/v2/posts"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().expect("tempdir");

    let mut config = config(&server, dir.path(), &["NVDA"]);
    config.publisher = Some(PublisherConfig {
        api_url: Url::parse(&server.uri()).expect("mock server uri"),
        api_key: "wrong".to_string(),
        publication_id: "pub_1".to_string(),
    });

    let run = build_runtime(&config)
        .expect("runtime")
        .run_once(run_time())
        .await
        .expect("run succeeds");

    assert!(matches!(run.publish, PublishOutcome::Failed(_)));
    assert!(run.local_copy.exists());
}

#[tokio::test]
async fn empty_batch_aborts_before_archiving() {
    let server = MockServer::start().await;
    mock_market(&server).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let output_dir = dir.path().join("reports");

    let config = config(&server, &output_dir, &["DELISTED", "UNKNOWN"]);
    let err = build_runtime(&config)
        .expect("runtime")
        .run_once(run_time())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RuntimeError::Scan(ScanError::BatchEmpty { skipped: 2 })
    ));
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn summary_degrades_when_benchmarks_fail() {
    let server = MockServer::start().await;
    let (closes, volumes) = mover(60, 3.0, 1.0);
    mock_chart(&server, "NVDA", chart_body(&closes, &volumes)).await;
    let dir = tempfile::tempdir().expect("tempdir");

    let config = config(&server, dir.path(), &["NVDA"]);
    let run = build_runtime(&config)
        .expect("runtime")
        .run_once(run_time())
        .await
        .expect("run succeeds");

    assert!(run.summary.is_unavailable());
    assert!(run.report.html.contains("N/A"));
}
