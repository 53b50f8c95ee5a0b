//! File-backed event sink.
//!
//! The exchange reports trades and unknown-symbol warnings from inside the
//! matching path, so the sink handed to it only forwards records onto an
//! unbounded channel; a dedicated writer drains the channel and appends one
//! human-readable line per record to the trade log.

use orderbook::{EventSink, Trade};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// One record on its way to the trade log.
pub enum LogRecord {
    Trade(Trade),
    UnknownSymbol(String),
}

/// Sink handed to the exchange: never blocks the matching path.
pub struct ChannelSink {
    tx: UnboundedSender<LogRecord>,
}

impl ChannelSink {
    pub fn new(tx: UnboundedSender<LogRecord>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn trade(&self, trade: &Trade) {
        let _ = self.tx.send(LogRecord::Trade(trade.clone()));
    }

    fn unknown_symbol(&self, symbol: &str) {
        let _ = self.tx.send(LogRecord::UnknownSymbol(symbol.to_string()));
    }
}

/// Drains the channel into the log file until every sender is gone.
/// Returns how many trades and warnings were written.
///
/// Runs on a blocking thread; the file is buffered and flushed on exit.
pub fn run_writer(path: &Path, mut rx: UnboundedReceiver<LogRecord>) -> io::Result<(u64, u64)> {
    let mut out = BufWriter::new(File::create(path)?);
    let mut trades = 0u64;
    let mut warnings = 0u64;

    while let Some(record) = rx.blocking_recv() {
        match record {
            LogRecord::Trade(trade) => {
                writeln!(out, "Trade executed: {trade}")?;
                trades += 1;
            }
            LogRecord::UnknownSymbol(symbol) => {
                writeln!(out, "Warning: unknown symbol {symbol}")?;
                warnings += 1;
            }
        }
    }
    out.flush()?;

    Ok((trades, warnings))
}
