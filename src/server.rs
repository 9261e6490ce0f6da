//! HTTP data service for the chart. Serves the on-disk OHLC history as JSON at
//! `GET /api/nifty` and can periodically refresh it from Yahoo Finance.

use std::time::Duration;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::{
    api::PriceBar,
    disk::{BarStore, DiskInterface},
    error::{Error, Result},
    nifty_log, yahoo,
};

/// How the handlers get at the bar store. The store is re-read per request so
/// a concurrent `nifty fetch` or the refresh task is picked up without
/// restarting the server.
#[derive(Clone)]
pub(crate) struct ServerState<F>
where
    F: Fn() -> BarStore + Clone + Send + Sync + 'static,
{
    load_store: F,
}

impl<F> ServerState<F>
where
    F: Fn() -> BarStore + Clone + Send + Sync + 'static,
{
    pub(crate) fn new(load_store: F) -> Self {
        Self { load_store }
    }
}

/// Start the data service. This function will block the current task during
/// server lifetime. It returns an error if the server fails to start or
/// crashes.
///
/// # Arguments
/// * `port` - Port to listen on.
/// * `refresh_hours` - If set, refetch bars from Yahoo Finance at this cadence.
pub async fn serve(port: u16, refresh_hours: Option<u64>) -> Result<()> {
    if let Some(hours) = refresh_hours {
        tokio::spawn(refresh_periodically(hours));
    }

    let app = router(ServerState::new(BarStore::load));

    let listener = TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| Error::PortBindingFailed(port, e))?;
    println!("Serving NIFTY data on http://localhost:{port}/api/nifty");
    axum::serve(listener, app)
        .await
        .map_err(Error::ServerCrashed)?;

    Ok(())
}

pub(crate) fn router<F>(state: ServerState<F>) -> Router
where
    F: Fn() -> BarStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/nifty", get(nifty_handler::<F>))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub(crate) async fn nifty_handler<F>(State(state): State<ServerState<F>>) -> Json<Vec<PriceBar>>
where
    F: Fn() -> BarStore + Clone + Send + Sync + 'static,
{
    Json((state.load_store)().into_bars())
}

pub(crate) async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn refresh_periodically(hours: u64) {
    let mut interval = tokio::time::interval(Duration::from_secs(hours * 60 * 60));
    loop {
        interval.tick().await;
        match yahoo::fetch_index_bars("1mo", "1d").await {
            Ok(bars) => {
                let mut store = BarStore::load();
                let inserted = store.merge(bars);
                match store.save() {
                    Ok(()) => nifty_log!("refresh: {inserted} new bars"),
                    Err(err) => nifty_log!("refresh: failed to save store: {err}"),
                }
            }
            Err(err) => nifty_log!("refresh: fetch failed: {err}"),
        }
    }
}
