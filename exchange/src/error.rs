use orderbook::RejectReason;
use thiserror::Error;

/// Why the exchange refused a submission.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The symbol is not part of the configured universe. The order was
    /// reported to the sink and discarded; nothing was queued or retried.
    #[error("unknown symbol {symbol:?}")]
    UnknownSymbol { symbol: String },

    /// The book refused the order before it touched a chain.
    #[error(transparent)]
    Rejected(#[from] RejectReason),
}
