use std::sync::mpsc::Sender;

use url::Url;

use super::Event;
use crate::api;

/// One-shot load of the chart data. The outcome, success or failure, is
/// delivered to the main loop as an event. There is no retry and no timeout.
pub async fn load_bars(endpoint: Url, transmitter: Sender<Event>) {
    match api::fetch_nifty_bars(&endpoint).await {
        Ok(bars) => {
            let _ = transmitter.send(Event::BarsLoaded(bars));
        }
        Err(err) => {
            let _ = transmitter.send(Event::BarsLoadFailed(err.to_string()));
        }
    }
}
