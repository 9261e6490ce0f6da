use clap::{Parser, Subcommand};

use nifty_lib::{
    disk::{BarStore, Config, DiskInterface},
    server, tui, yahoo,
};

/// Top level CLI struct
#[derive(Parser)]
#[command(name = "nifty")]
#[command(about = "Terminal candlestick chart for the NIFTY 50 index")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the OHLC data service that the chart fetches from
    Serve {
        /// Port to listen on, defaults to the configured port
        #[arg(long)]
        port: Option<u16>,
        /// Refetch bars from Yahoo Finance every N hours
        #[arg(long)]
        refresh: Option<u64>,
    },
    /// Fetch bars from Yahoo Finance into the local store
    Fetch {
        /// Yahoo range, e.g. 5d, 1mo, 1y
        #[arg(long, default_value = "1mo")]
        range: String,
        /// Yahoo interval, e.g. 5m, 1d
        #[arg(long, default_value = "1d")]
        interval: String,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> nifty_lib::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => tui::run().await,
        Some(Command::Serve { port, refresh }) => {
            let port = port.unwrap_or_else(|| Config::load().port);
            server::serve(port, refresh).await
        }
        Some(Command::Fetch { range, interval }) => {
            let bars = yahoo::fetch_index_bars(&range, &interval).await?;
            let mut store = BarStore::load();
            let inserted = store.merge(bars);
            store.save()?;
            println!("Inserted {inserted} new bars ({} total)", store.bars().len());
            Ok(())
        }
        Some(Command::Config) => {
            let config = Config::load();
            println!("endpoint = {}", config.endpoint);
            println!("port = {}", config.port);
            Ok(())
        }
    }
}
