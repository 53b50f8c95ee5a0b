//! Trading simulation driver.
//!
//! Spawns a pool of random-order producers against an in-process exchange
//! with a fixed `STOCK0..STOCKn` universe, streams every trade and warning
//! into a human-readable log file, and stops once the order cap is reached.

use clap::Parser;
use exchange::Exchange;
use std::path::PathBuf;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

mod producer;
mod sink;

use producer::ProducerConfig;
use sink::ChannelSink;

#[derive(Parser)]
#[command(name = "simulator")]
#[command(about = "Random-order trading simulation against the in-process exchange")]
struct Cli {
    /// Number of concurrent order producers
    #[arg(short, long, default_value_t = 5)]
    workers: usize,

    /// Size of the fixed symbol universe (STOCK0..STOCKn)
    #[arg(short = 'n', long, default_value_t = 1024)]
    symbols: usize,

    /// Stop after this many orders have been submitted
    #[arg(short = 'c', long, default_value_t = 10_000)]
    order_cap: u64,

    /// Upper bound for the random pause between orders, in milliseconds
    #[arg(long, default_value_t = 500)]
    max_delay_ms: u64,

    /// File receiving one line per trade and per unknown-symbol warning
    #[arg(long, default_value = "trades.log")]
    trade_log: PathBuf,

    /// Seed for deterministic order generation
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let symbols: Vec<String> = (0..cli.symbols).map(|i| format!("STOCK{i}")).collect();
    let (tx, rx) = mpsc::unbounded_channel();
    let exchange = Arc::new(Exchange::new(
        symbols.iter().cloned(),
        Arc::new(ChannelSink::new(tx)),
    ));

    let log_path = cli.trade_log.clone();
    let writer = tokio::task::spawn_blocking(move || sink::run_writer(&log_path, rx));

    info!(
        workers = cli.workers,
        symbols = cli.symbols,
        order_cap = cli.order_cap,
        seed = cli.seed,
        "simulation starting"
    );

    let claimed = Arc::new(AtomicU64::new(0));
    let symbols = Arc::new(symbols);
    let config = Arc::new(ProducerConfig {
        max_delay_ms: cli.max_delay_ms,
        ..ProducerConfig::default()
    });

    let mut producers = Vec::with_capacity(cli.workers);
    for worker in 0..cli.workers {
        producers.push(tokio::spawn(producer::run_producer(
            worker,
            Arc::clone(&exchange),
            Arc::clone(&symbols),
            Arc::clone(&config),
            Arc::clone(&claimed),
            cli.order_cap,
            cli.seed,
        )));
    }

    let mut submitted = 0u64;
    for task in producers {
        match task.await {
            Ok(count) => submitted += count,
            Err(err) => error!(%err, "producer task failed"),
        }
    }

    // Last sender lives inside the exchange; dropping it lets the writer
    // drain the channel and flush the file.
    drop(exchange);
    match writer.await {
        Ok(Ok((trades, warnings))) => info!(
            submitted,
            trades,
            warnings,
            trade_log = %cli.trade_log.display(),
            "simulation finished"
        ),
        Ok(Err(err)) => error!(%err, "trade log writer failed"),
        Err(err) => error!(%err, "trade log writer panicked"),
    }
}
