//! Tickex Performance Lab
//!
//! Runs performance tests followed by a basic trading demo showing
//! order placement, matching, and trade execution.

use orderbook::{Order, OrderBook, OrderId, RecordingSink, Side};


/// Main entry point - runs performance tests and demo.
fn main() {
    println!("=== Tickex Performance Lab ===");

    latency_test::run_latency_tests();
    latency_test::run_throughput_test(10);

    println!("\n=== Basic Demo ===");
    run_basic_demo();
}

/// Demonstrates basic order book behavior with trade execution.
fn run_basic_demo() {
    let book = OrderBook::new("AAPL");
    let sink = RecordingSink::new();

    // Ask at $150.00, bid at $149.50 (creates a spread)
    let ask = Order::new(OrderId(1), "AAPL", Side::Ask, 15000, 100, 1_000_000_000).unwrap();
    let bid = Order::new(OrderId(2), "AAPL", Side::Bid, 14950, 50, 1_000_000_001).unwrap();

    println!("Submitting ask order: {} @ {}", ask.qty, ask.px_ticks);
    book.submit(ask, &sink).unwrap();

    println!("Submitting bid order: {} @ {}", bid.qty, bid.px_ticks);
    book.submit(bid, &sink).unwrap();

    println!("Best bid: {:?}", book.best_bid());
    println!("Best ask: {:?}", book.best_ask());

    // Crossing bid that partially fills the resting ask at the ask's price
    let crossing_bid = Order::new(OrderId(3), "AAPL", Side::Bid, 15000, 75, 1_000_000_002).unwrap();

    println!(
        "Submitting crossing bid: {} @ {}",
        crossing_bid.qty, crossing_bid.px_ticks
    );
    book.submit(crossing_bid, &sink).unwrap();

    let trades = sink.trades();
    println!("Trades executed: {}", trades.len());
    for trade in trades {
        println!("  Trade: {trade}");
    }

    println!("Final best bid: {:?}", book.best_bid()); // Original bid remains
    println!("Final best ask: {:?}", book.best_ask()); // 25 shares left of original ask
}
