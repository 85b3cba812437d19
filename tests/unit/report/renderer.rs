//! Unit tests for the HTML digest renderer

use chrono::NaiveDate;

use marketbrief::models::analysis::{BenchmarkMove, MarketSummary, MarketTrend, RankedShortlist};
use marketbrief::models::price::StaticInfo;
use marketbrief::report::{report_title, HtmlDigestRenderer, ReportRenderer};
use marketbrief::signals::engine::StockAnalyzer;

use crate::fixtures::mover_series;

fn shortlist() -> RankedShortlist {
    let top = StockAnalyzer::analyze(
        "ACME",
        &mover_series("ACME", 60, 6.0, 1.5),
        StaticInfo::new("<Acme & Co>", "Industrials"),
    )
    .unwrap();
    let second = StockAnalyzer::analyze(
        "DOWN",
        &mover_series("DOWN", 60, -3.0, 1.0),
        StaticInfo::default(),
    )
    .unwrap();
    RankedShortlist {
        records: vec![top, second],
        analyzed: 2,
        skipped: 1,
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

#[test]
fn test_report_title_format() {
    assert_eq!(
        report_title("Daily Market Movers", date()),
        "Daily Market Movers - 15/03/2024 | Top Movers"
    );
}

#[test]
fn test_render_keeps_rank_order_and_escapes() {
    let renderer = HtmlDigestRenderer::new("Daily Market Movers");
    let report = renderer.render(&shortlist(), &MarketSummary::unavailable(), date());

    assert_eq!(report.title, "Daily Market Movers - 15/03/2024 | Top Movers");
    assert!(report.html.contains("Top 2 movers"));
    let first = report.html.find("1. ACME").unwrap();
    let second = report.html.find("2. DOWN").unwrap();
    assert!(first < second);

    assert!(report.html.contains("&lt;Acme &amp; Co&gt;"));
    assert!(!report.html.contains("<Acme"));
    assert!(report.html.contains("+6.00%"));
    assert!(report.html.contains("-3.00%"));
    assert!(report.html.contains("DOWN | unknown"));
}

#[test]
fn test_render_unavailable_summary_as_na() {
    let renderer = HtmlDigestRenderer::new("Brief");
    let report = renderer.render(&shortlist(), &MarketSummary::unavailable(), date());
    assert!(report.html.contains("Volatility index: N/A"));
    assert!(report.html.contains("Trend: N/A"));
}

#[test]
fn test_render_summary_values() {
    let summary = MarketSummary {
        benchmark_a: Some(BenchmarkMove {
            symbol: "SPY".to_string(),
            change_pct: 0.8,
        }),
        benchmark_b: Some(BenchmarkMove {
            symbol: "QQQ".to_string(),
            change_pct: -1.25,
        }),
        volatility_index: Some(18.456),
        trend: Some(MarketTrend::Bullish),
    };
    let report = HtmlDigestRenderer::new("Brief").render(&shortlist(), &summary, date());
    assert!(report.html.contains("SPY: <span class=\"positive\">+0.80%</span>"));
    assert!(report.html.contains("QQQ: <span class=\"negative\">-1.25%</span>"));
    assert!(report.html.contains("Volatility index: 18.46"));
    assert!(report.html.contains("Trend: Bullish"));
}

#[test]
fn test_symbol_escaped_in_text_and_anchor() {
    let record = StockAnalyzer::analyze(
        "A&\"B",
        &mover_series("A&\"B", 60, 2.0, 1.0),
        StaticInfo::new("Tom's <Fund>", "Funds"),
    )
    .unwrap();
    let shortlist = RankedShortlist {
        records: vec![record],
        analyzed: 1,
        skipped: 0,
    };
    let report = HtmlDigestRenderer::new("Brief").render(&shortlist, &MarketSummary::unavailable(), date());

    assert!(report.html.contains("id=\"mover-A&amp;&quot;B\""));
    assert!(report.html.contains("1. A&amp;\"B"));
    assert!(report.html.contains("Tom's &lt;Fund&gt;"));
}
