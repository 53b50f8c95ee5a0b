//! Exchange core providing multi-symbol order book management.
//!
//! The exchange owns one order book per symbol of a fixed universe and
//! routes every incoming order to its book, which matches it immediately.
//!
//! # Architecture
//! - The symbol universe is supplied at construction and never changes,
//!   so resolution is a plain `HashMap` lookup into per-symbol books
//! - Each book guards its own insert-plus-match critical section, so
//!   submissions for different symbols never contend with each other
//! - Every execution and every unknown-symbol submission is pushed to the
//!   shared [`EventSink`], in the order the books observed them

mod error;

pub use error::SubmitError;

use orderbook::{EventSink, Order, OrderBook};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Central hub for all trading operations.
///
/// The `Exchange` maintains a separate [`OrderBook`] for each symbol of the
/// universe it was constructed with. It holds no lock of its own: symbol
/// resolution is read-only, and all mutation happens inside the resolved
/// book's critical section, so any number of producers can call
/// [`Exchange::submit`] concurrently for arbitrary symbols.
pub struct Exchange {
    /// One order book per listed symbol. Membership is fixed at startup;
    /// only the books' contents change afterwards.
    books: HashMap<String, OrderBook>,
    /// Collaborator receiving every trade and unknown-symbol record.
    sink: Arc<dyn EventSink>,
}

impl Exchange {
    /// Creates an exchange listing exactly the given symbols.
    ///
    /// Symbols cannot be added or removed later; an order for anything
    /// outside this set is a defined error case, not undefined behavior.
    pub fn new<I, S>(symbols: I, sink: Arc<dyn EventSink>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let books: HashMap<String, OrderBook> = symbols
            .into_iter()
            .map(|symbol| {
                let symbol = symbol.into();
                let book = OrderBook::new(symbol.clone());
                (symbol, book)
            })
            .collect();
        info!(symbols = books.len(), "exchange listed");
        Self { books, sink }
    }

    /// Routes `order` to its symbol's book and matches it.
    ///
    /// An order for an unlisted symbol produces exactly one warning record
    /// on the sink and is discarded — a configuration/input error, not a
    /// transient condition, so there is no retry and no queuing. Invalid
    /// parameter shapes are rejected by the book before touching any chain.
    ///
    /// Rejections never affect other orders or other symbols.
    pub fn submit(&self, order: Order) -> Result<(), SubmitError> {
        let Some(book) = self.books.get(order.symbol.as_str()) else {
            warn!(symbol = %order.symbol, "order for unlisted symbol discarded");
            self.sink.unknown_symbol(&order.symbol);
            return Err(SubmitError::UnknownSymbol {
                symbol: order.symbol,
            });
        };
        book.submit(order, self.sink.as_ref())?;
        Ok(())
    }

    /// All listed symbols, in arbitrary order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }

    /// Number of listed symbols.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The book for `symbol`, if listed.
    pub fn book(&self, symbol: &str) -> Option<&OrderBook> {
        self.books.get(symbol)
    }

    /// Current `(best_bid, best_ask)` for `symbol`, `None` if unlisted.
    /// Either price may be `None` when that side is empty.
    pub fn best_prices(&self, symbol: &str) -> Option<(Option<i64>, Option<i64>)> {
        self.books
            .get(symbol)
            .map(|book| (book.best_bid(), book.best_ask()))
    }
}
