//! Random order producers.
//!
//! Each producer models one independent trader: it draws orders from a
//! seeded RNG, submits them to the shared exchange, and pauses a random
//! moment between submissions. Producers stop once the run-wide order cap
//! has been claimed.

use exchange::Exchange;
use orderbook::{Order, OrderId, Side};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Shape of the generated order flow.
pub struct ProducerConfig {
    /// Lowest generated price, in ticks
    pub min_px_ticks: i64,
    /// Highest generated price, in ticks
    pub max_px_ticks: i64,
    /// Quantity is a multiple of 10 lots, up to this many multiples
    pub max_qty_lots: i64,
    /// Upper bound for the random pause between submissions
    pub max_delay_ms: u64,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            min_px_ticks: 10_000, // $100.00
            max_px_ticks: 20_000, // $200.00
            max_qty_lots: 10,
            max_delay_ms: 500,
        }
    }
}

/// Draws one order: fair-coin side, uniform symbol, quantity in multiples
/// of 10, uniform price within the configured band.
pub fn random_order(rng: &mut ChaCha8Rng, symbols: &[String], config: &ProducerConfig) -> Order {
    let side = if rng.gen_bool(0.5) { Side::Bid } else { Side::Ask };
    let symbol = &symbols[rng.gen_range(0..symbols.len())];
    let qty = rng.gen_range(1..=config.max_qty_lots) * 10;
    let px_ticks = rng.gen_range(config.min_px_ticks..=config.max_px_ticks);
    let ts_ns = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let id = OrderId(uuid::Uuid::new_v4().as_u128());

    Order::new(id, symbol.as_str(), side, px_ticks, qty, ts_ns)
        .expect("generated parameters are always in range")
}

/// One producer task. Claims order slots from the shared counter until the
/// cap is reached; returns how many orders it submitted.
pub async fn run_producer(
    worker: usize,
    exchange: Arc<Exchange>,
    symbols: Arc<Vec<String>>,
    config: Arc<ProducerConfig>,
    claimed: Arc<AtomicU64>,
    order_cap: u64,
    seed: u64,
) -> u64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(worker as u64));
    let mut submitted = 0u64;

    while claimed.fetch_add(1, Ordering::Relaxed) < order_cap {
        let order = random_order(&mut rng, &symbols, &config);
        debug!(
            worker,
            symbol = %order.symbol,
            side = ?order.side,
            qty = order.qty,
            px_ticks = order.px_ticks,
            "submitting"
        );
        if let Err(err) = exchange.submit(order) {
            warn!(worker, %err, "order rejected");
        }
        submitted += 1;

        if config.max_delay_ms > 0 {
            let pause = rng.gen_range(0..=config.max_delay_ms);
            tokio::time::sleep(Duration::from_millis(pause)).await;
        }
    }

    debug!(worker, submitted, "producer done");
    submitted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("STOCK{i}")).collect()
    }

    #[test]
    fn generated_orders_stay_in_range() {
        let symbols = symbols(8);
        let config = ProducerConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..200 {
            let order = random_order(&mut rng, &symbols, &config);
            assert!(order.qty >= 10 && order.qty <= 100);
            assert_eq!(order.qty % 10, 0, "quantity is a multiple of 10");
            assert!(order.px_ticks >= 10_000 && order.px_ticks <= 20_000);
            assert!(symbols.contains(&order.symbol));
        }
    }

    #[test]
    fn same_seed_draws_the_same_flow() {
        let symbols = symbols(16);
        let config = ProducerConfig::default();
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..100 {
            let x = random_order(&mut a, &symbols, &config);
            let y = random_order(&mut b, &symbols, &config);
            // ids and timestamps are minted per order; the drawn fields match
            assert_eq!(x.symbol, y.symbol);
            assert_eq!(x.side, y.side);
            assert_eq!(x.qty, y.qty);
            assert_eq!(x.px_ticks, y.px_ticks);
        }
    }
}
