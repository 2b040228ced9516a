use anyhow::{bail, Result};
use clap::Parser;
use cli::{Cli, Command};
use dotenv::dotenv;
use orders::{cancel, OrdersTracker, Reconciler};
use tokio::{select, signal, time};
use tracing::{error, info};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let stderr_log = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        );

    tracing_subscriber::registry().with(stderr_log).init();

    let config = cli.config();

    match cli.command {
        Command::List {
            account,
            watch_secs,
        } => {
            let reconciler = Reconciler::from_config(&config, account.chain_id)?;
            let tracker = OrdersTracker::new(reconciler);

            tracker.load(account.chain_id, account.address).await;

            let state = tracker.snapshot().await;
            let Some(secs) = watch_secs else {
                if state.error {
                    bail!("Failed to load orders for {}", account.address);
                }
                println!("{}", serde_json::to_string_pretty(&state.orders)?);
                return Ok(());
            };

            let mut shown = state.orders;
            println!("{}", serde_json::to_string_pretty(&shown)?);

            let mut interval = time::interval(cli::watch_interval(secs));
            interval.tick().await;

            loop {
                select! {
                    _ = interval.tick() => {
                        tracker.reload(false).await?;

                        let state = tracker.snapshot().await;
                        if state.orders != shown {
                            shown = state.orders;
                            println!("{}", serde_json::to_string_pretty(&shown)?);
                        }
                    }
                    res = signal::ctrl_c() => {
                        if let Err(err) = res {
                            error!("Unable to listen for shutdown signal: {err}");
                        }
                        info!("Stopping");
                        break;
                    }
                }
            }
        }

        Command::Cancel { account, hashes } => {
            let reconciler = Reconciler::from_config(&config, account.chain_id)?;
            let orders = reconciler
                .user_orders(account.chain_id, account.address)
                .await?;

            cancel::ensure_cancellable(&orders, &hashes)?;

            let txs = cancel::cancel_transactions(&hashes);

            info!(
                "Built {} cancellation {}",
                txs.len(),
                if txs.len() > 1 { "transactions" } else { "transaction" }
            );

            println!("{}", serde_json::to_string_pretty(&txs)?);
        }

        Command::Price { chain_id, token } => {
            let reconciler = Reconciler::from_config(&config, chain_id)?;
            let price = reconciler.order_book().native_price(chain_id, token).await?;

            println!("{price}");
        }
    }

    Ok(())
}
