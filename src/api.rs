use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// One OHLC record for one time interval, as served by `GET /api/nifty`.
/// `time` is in Unix seconds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PriceBar {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Fetches the full NIFTY 50 history from the data service. One GET, no query
/// parameters, no auth. The endpoint is trusted to return bars ordered by time
/// ascending.
pub async fn fetch_nifty_bars(endpoint: &Url) -> Result<Vec<PriceBar>> {
    let url = endpoint
        .join("api/nifty")
        .map_err(|e| Error::UrlParsingFailed(endpoint.to_string(), e))?;

    let send_result = reqwest::get(url.clone()).await;
    let response = match send_result {
        Ok(response) => response,
        Err(err) if err.is_connect() => return Err(Error::Internet(url)),
        Err(err) => return Err(err.into()),
    };
    let text = response.error_for_status()?.text().await?;

    let mut deserializer = serde_json::Deserializer::from_str(&text);
    Ok(serde_path_to_error::deserialize(&mut deserializer)?)
}
