use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use combined_events::{EventsFetcher, ReqwestTransport};
use site_support::TracingLog;

/// Fetch the remote event feed and print it.
#[derive(Debug, Parser)]
#[command(name = "events-cli")]
struct Args {
    /// Pretty-print the fetched document
    #[arg(long)]
    pretty: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let transport = ReqwestTransport::new(Duration::from_secs(args.timeout_secs))?;
    let fetcher = EventsFetcher::new(transport, TracingLog::channel("combined_events"));

    tracing::info!("Fetching events...");
    let events = fetcher.fetch_events().await;

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        println!("{events}");
    }

    Ok(())
}
