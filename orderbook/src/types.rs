use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which side of the book an order rests on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    /// The side this one trades against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u128);

/// Why a submission was refused before it touched a chain.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),
    #[error("price must be non-negative, got {0} ticks")]
    NegativePrice(i64),
    #[error("order for {order} submitted to the {book} book")]
    SymbolMismatch { book: String, order: String },
}

/// A single trade intent. `qty` is the unfilled remainder and is the only
/// field matching mutates; everything else is fixed at construction.
#[derive(Debug)]
pub struct Order {
    pub id: OrderId,
    pub symbol: String,
    pub side: Side,
    pub px_ticks: i64, // integer price ticks, one tick = 0.01
    pub qty: i64,      // integer lots
    pub ts_ns: u128,   // event time in ns
    /// Successor in the side chain this order currently rests in.
    pub(crate) next: Option<Box<Order>>,
}

impl Order {
    /// Builds an order, refusing the parameter shapes that must never reach
    /// a chain: zero or negative quantity, negative price.
    pub fn new(
        id: OrderId,
        symbol: impl Into<String>,
        side: Side,
        px_ticks: i64,
        qty: i64,
        ts_ns: u128,
    ) -> Result<Self, RejectReason> {
        if qty <= 0 {
            return Err(RejectReason::NonPositiveQuantity(qty));
        }
        if px_ticks < 0 {
            return Err(RejectReason::NegativePrice(px_ticks));
        }
        Ok(Self {
            id,
            symbol: symbol.into(),
            side,
            px_ticks,
            qty,
            ts_ns,
            next: None,
        })
    }
}

/// One execution between a resting (maker) and an incoming (taker) order.
///
/// `px_ticks` is always the maker's price, and `remaining_bid_qty` /
/// `remaining_ask_qty` are both heads' quantities immediately after the fill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub maker: OrderId,
    pub taker: OrderId,
    pub symbol: String,
    pub px_ticks: i64,
    pub qty: i64,
    pub remaining_bid_qty: i64,
    pub remaining_ask_qty: i64,
    pub ts_ns: u128,
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ ${}.{:02} (bid left {}, ask left {})",
            self.qty,
            self.symbol,
            self.px_ticks / 100,
            self.px_ticks % 100,
            self.remaining_bid_qty,
            self.remaining_ask_qty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_quantity() {
        let err = Order::new(OrderId(1), "AAPL", Side::Bid, 10_000, 0, 1).unwrap_err();
        assert_eq!(err, RejectReason::NonPositiveQuantity(0));

        let err = Order::new(OrderId(1), "AAPL", Side::Bid, 10_000, -5, 1).unwrap_err();
        assert_eq!(err, RejectReason::NonPositiveQuantity(-5));
    }

    #[test]
    fn sides_trade_against_each_other() {
        assert_eq!(Side::Bid.opposite(), Side::Ask);
        assert_eq!(Side::Ask.opposite(), Side::Bid);
    }

    #[test]
    fn rejects_negative_price() {
        let err = Order::new(OrderId(1), "AAPL", Side::Ask, -1, 100, 1).unwrap_err();
        assert_eq!(err, RejectReason::NegativePrice(-1));
    }

    #[test]
    fn trade_renders_price_with_two_decimals() {
        let trade = Trade {
            maker: OrderId(1),
            taker: OrderId(2),
            symbol: "STOCK1".to_string(),
            px_ticks: 1000,
            qty: 100,
            remaining_bid_qty: 0,
            remaining_ask_qty: 25,
            ts_ns: 42,
        };
        assert_eq!(
            trade.to_string(),
            "100 STOCK1 @ $10.00 (bid left 0, ask left 25)"
        );
    }
}
