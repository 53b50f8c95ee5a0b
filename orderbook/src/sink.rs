use crate::types::Trade;
use parking_lot::Mutex;

/// Where the core reports what it observed.
///
/// Implementations must not block: the book calls `trade` from inside its
/// critical section so that records come out in exactly the order the
/// matching pass produced them.
pub trait EventSink: Send + Sync {
    /// One call per execution.
    fn trade(&self, trade: &Trade);

    /// One call per submission that referenced an unlisted symbol.
    fn unknown_symbol(&self, symbol: &str);
}

/// Sink that keeps every record in memory, for tests and demos.
#[derive(Default)]
pub struct RecordingSink {
    trades: Mutex<Vec<Trade>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trades(&self) -> Vec<Trade> {
        self.trades.lock().clone()
    }

    pub fn trade_count(&self) -> usize {
        self.trades.lock().len()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }
}

impl EventSink for RecordingSink {
    fn trade(&self, trade: &Trade) {
        self.trades.lock().push(trade.clone());
    }

    fn unknown_symbol(&self, symbol: &str) {
        self.warnings.lock().push(symbol.to_string());
    }
}
