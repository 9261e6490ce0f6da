//! Pulls OHLC history for the NIFTY 50 index (`^NSEI`) from the Yahoo Finance
//! chart API. The response is columnar (one timestamp array plus one array per
//! quote field), rows with missing fields are skipped.

use serde::Deserialize;

use crate::{
    api::PriceBar,
    error::{Error, Result},
};

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart/%5ENSEI";

#[derive(Deserialize, Debug)]
pub struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize, Debug)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug, Default)]
struct Quote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
}

/// Fetch index bars for the given range and interval, e.g. `("1mo", "1d")` or
/// `("5d", "5m")`.
pub async fn fetch_index_bars(range: &str, interval: &str) -> Result<Vec<PriceBar>> {
    let client = reqwest::Client::new();

    let response = client
        .get(CHART_URL)
        .query(&[("range", range), ("interval", interval)])
        .header("accept", "application/json")
        .send()
        .await?
        .error_for_status()?;
    let text = response.text().await?;

    let mut deserializer = serde_json::Deserializer::from_str(&text);
    let parsed: ChartResponse = serde_path_to_error::deserialize(&mut deserializer)?;

    let result = parsed
        .chart
        .result
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .ok_or(Error::YahooResponseIncomplete("chart result"))?;

    Ok(bars_from_chart(result))
}

/// Zip the columnar arrays into price bars, dropping any row where a field is
/// null (partially filled intervals show up that way).
pub fn bars_from_chart(result: ChartResult) -> Vec<PriceBar> {
    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    timestamps
        .into_iter()
        .enumerate()
        .filter_map(|(i, time)| {
            Some(PriceBar {
                time,
                open: *quote.open.get(i)?.as_ref()?,
                high: *quote.high.get(i)?.as_ref()?,
                low: *quote.low.get(i)?.as_ref()?,
                close: *quote.close.get(i)?.as_ref()?,
            })
        })
        .collect()
}

#[cfg(test)]
impl ChartResult {
    pub fn for_test(timestamp: Option<Vec<i64>>, quote_json: serde_json::Value) -> Self {
        Self {
            timestamp,
            indicators: Indicators {
                quote: serde_json::from_value(quote_json).unwrap(),
            },
        }
    }
}
