//! Price-priority order book for a single symbol.
//!
//! Core features:
//! - Price priority matching, strict FIFO among equal prices
//! - Partial fills and immediate execution
//! - Two price-sorted chains (bids descending, asks ascending) behind one
//!   critical section per book, safe to share across threads
//! - Executions pushed to an [`EventSink`] in observation order

pub mod chain;
pub mod sink;
pub mod types;

pub use chain::Chain;
pub use sink::{EventSink, RecordingSink};
pub use types::{Order, OrderId, RejectReason, Side, Trade};

use parking_lot::Mutex;

/// Limit order book for one symbol.
///
/// Submission inserts the order into its side chain and immediately runs the
/// matching pass, all inside the book's critical section, so after every
/// `submit` the book is quiescent: either a side is empty or the best bid is
/// strictly below the best ask.
pub struct OrderBook {
    symbol: String,
    sides: Mutex<Sides>,
}

struct Sides {
    bids: Chain,
    asks: Chain,
}

impl OrderBook {
    /// Creates an empty book for `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            sides: Mutex::new(Sides {
                bids: Chain::new(Side::Bid),
                asks: Chain::new(Side::Ask),
            }),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Inserts `order` and matches it against the opposite side.
    ///
    /// Rejected parameter shapes (non-positive quantity, negative price,
    /// wrong symbol) never touch a chain. Every execution is reported to
    /// `sink` before the call returns; a partially filled order stays at the
    /// head of its side with reduced quantity.
    ///
    /// Safe to call concurrently from any number of callers.
    pub fn submit(&self, order: Order, sink: &dyn EventSink) -> Result<(), RejectReason> {
        if order.qty <= 0 {
            return Err(RejectReason::NonPositiveQuantity(order.qty));
        }
        if order.px_ticks < 0 {
            return Err(RejectReason::NegativePrice(order.px_ticks));
        }
        if order.symbol != self.symbol {
            return Err(RejectReason::SymbolMismatch {
                book: self.symbol.clone(),
                order: order.symbol,
            });
        }

        let taker_side = order.side;
        let mut sides = self.sides.lock();
        match taker_side {
            Side::Bid => sides.bids.insert(Box::new(order)),
            Side::Ask => sides.asks.insert(Box::new(order)),
        }
        sides.match_crossing(taker_side, sink);
        Ok(())
    }

    /// Current best bid price (highest resting buy).
    pub fn best_bid(&self) -> Option<i64> {
        self.sides.lock().bids.best_price()
    }

    /// Current best ask price (lowest resting sell).
    pub fn best_ask(&self) -> Option<i64> {
        self.sides.lock().asks.best_price()
    }

    /// Number of resting orders on each side, `(bids, asks)`.
    pub fn resting_orders(&self) -> (usize, usize) {
        let sides = self.sides.lock();
        (sides.bids.len(), sides.asks.len())
    }

    /// Total unfilled quantity on each side, `(bids, asks)`.
    pub fn resting_qty(&self) -> (i64, i64) {
        let sides = self.sides.lock();
        (sides.bids.total_qty(), sides.asks.total_qty())
    }

    pub fn is_empty(&self) -> bool {
        let sides = self.sides.lock();
        sides.bids.is_empty() && sides.asks.is_empty()
    }
}

impl Sides {
    /// Runs the matching loop until no crossing remains.
    ///
    /// Each round reads both heads, fills `min(bid.qty, ask.qty)` at the
    /// maker's price (the head opposite `taker_side`, which was already
    /// resting when this pass began), reports the trade, and advances the
    /// head of any side whose order is exhausted. A single call can execute
    /// several trades when one aggressive order sweeps multiple resting
    /// orders.
    fn match_crossing(&mut self, taker_side: Side, sink: &dyn EventSink) {
        loop {
            let Some(bid) = self.bids.head_mut() else { return };
            let Some(ask) = self.asks.head_mut() else { return };
            if bid.px_ticks < ask.px_ticks {
                return; // no crossing
            }
            debug_assert_eq!(bid.symbol, ask.symbol);

            let traded = bid.qty.min(ask.qty);
            bid.qty -= traded;
            ask.qty -= traded;

            let (maker, taker, px_ticks, ts_ns) = match taker_side {
                Side::Bid => (ask.id, bid.id, ask.px_ticks, bid.ts_ns),
                Side::Ask => (bid.id, ask.id, bid.px_ticks, ask.ts_ns),
            };
            let bid_left = bid.qty;
            let ask_left = ask.qty;
            let trade = Trade {
                maker,
                taker,
                symbol: bid.symbol.clone(),
                px_ticks,
                qty: traded,
                remaining_bid_qty: bid_left,
                remaining_ask_qty: ask_left,
                ts_ns,
            };
            sink.trade(&trade);

            if bid_left == 0 {
                self.bids.pop_head();
            }
            if ask_left == 0 {
                self.asks.pop_head();
            }
        }
    }
}
