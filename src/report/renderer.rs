//! Plain HTML digest of the ranked movers and market summary.

use chrono::NaiveDate;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::analysis::{AnalysisRecord, BenchmarkMove, MarketSummary, RankedShortlist};
use crate::models::signal::TrendSignal;
use crate::report::Report;

const DISCLAIMER: &str = "This analysis is generated automatically from historical data. \
It is not investment advice. Past performance does not guarantee future results.";

pub trait ReportRenderer {
    fn render(&self, shortlist: &RankedShortlist, summary: &MarketSummary, date: NaiveDate) -> Report;
}

/// `"{title} - dd/mm/YYYY | Top Movers"`
pub fn report_title(title: &str, date: NaiveDate) -> String {
    format!("{} - {} | Top Movers", title, date.format("%d/%m/%Y"))
}

pub struct HtmlDigestRenderer {
    title: String,
}

impl HtmlDigestRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn render_summary(summary: &MarketSummary) -> String {
        let benchmark = |b: &Option<BenchmarkMove>| match b {
            Some(b) => format!(
                "<li>{}: <span class=\"{}\">{}</span></li>",
                encode_text(&b.symbol),
                direction_class(b.change_pct),
                signed_pct(b.change_pct)
            ),
            None => "<li>N/A</li>".to_string(),
        };
        let volatility = summary
            .volatility_index
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "N/A".to_string());
        let trend = summary
            .trend
            .map(|t| t.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        format!(
            "<section class=\"market-summary\">\n<h2>Market summary</h2>\n<ul>\n{}\n{}\n<li>Volatility index: {}</li>\n<li>Trend: {}</li>\n</ul>\n</section>\n",
            benchmark(&summary.benchmark_a),
            benchmark(&summary.benchmark_b),
            volatility,
            trend
        )
    }

    fn render_record(rank: usize, record: &AnalysisRecord) -> String {
        let ind = &record.indicators;
        let trend_class = match record.signals.trend_signal {
            TrendSignal::Bullish => "signal-bullish",
            TrendSignal::Bearish => "signal-bearish",
            TrendSignal::Mixed => "signal-neutral",
        };

        format!(
            "<section class=\"stock\" id=\"mover-{anchor}\">\n\
<h3>{rank}. {symbol} <small>{name} | {sector}</small></h3>\n\
<p>${price:.2} <span class=\"{change_class}\">{change}</span></p>\n\
<table>\n\
<tr><th>RSI (14)</th><td>{rsi:.1}</td><th>SMA 20</th><td>${sma20:.2}</td><th>SMA 50</th><td>${sma50:.2}</td></tr>\n\
<tr><th>Vol vs avg</th><td>{vol:.2}x</td><th>52w position</th><td>{pos:.1}%</td><th>ATR</th><td>${atr:.2}</td></tr>\n\
</table>\n\
<p class=\"{trend_class}\">Trend: {trend} | RSI: {rsi_signal} | MA: {ma_signal}</p>\n\
</section>\n",
            anchor = encode_double_quoted_attribute(&record.symbol),
            symbol = encode_text(&record.symbol),
            name = encode_text(&record.company_name),
            sector = encode_text(&record.sector),
            price = ind.current_price,
            change_class = direction_class(ind.daily_change_pct),
            change = signed_pct(ind.daily_change_pct),
            rsi = ind.rsi14,
            sma20 = ind.sma20,
            sma50 = ind.sma50,
            vol = ind.volume_ratio,
            pos = ind.position_52w,
            atr = ind.atr14,
            trend = record.signals.trend_signal,
            rsi_signal = record.signals.rsi_signal,
            ma_signal = record.signals.ma_signal,
        )
    }
}

impl ReportRenderer for HtmlDigestRenderer {
    fn render(&self, shortlist: &RankedShortlist, summary: &MarketSummary, date: NaiveDate) -> Report {
        let title = report_title(&self.title, date);

        let mut html = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{}</title>\n</head>\n<body>\n<h1>{}</h1>\n<p>Technical analysis for {}</p>\n",
            encode_text(&title),
            encode_text(&self.title),
            date.format("%B %-d, %Y")
        );
        html.push_str(&Self::render_summary(summary));
        html.push_str(&format!("<h2>Top {} movers</h2>\n", shortlist.len()));
        for (i, record) in shortlist.records.iter().enumerate() {
            html.push_str(&Self::render_record(i + 1, record));
        }
        html.push_str(&format!(
            "<footer>\n<p class=\"disclaimer\">{}</p>\n</footer>\n</body>\n</html>\n",
            DISCLAIMER
        ));

        Report { title, html }
    }
}

fn direction_class(change: f64) -> &'static str {
    if change >= 0.0 {
        "positive"
    } else {
        "negative"
    }
}

fn signed_pct(change: f64) -> String {
    if change >= 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}
