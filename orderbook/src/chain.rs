use crate::types::{Order, Side};

// Singly linked chain of resting orders, owned through the orders' own
// successor links. The head slot is the top of book for its side:
// - Bids: non-increasing price from head to tail (highest first)
// - Asks: non-decreasing price from head to tail (lowest first)
pub struct Chain {
    /// Bid or ask?
    side: Side,
    /// Top of book; every further order is reached through `next` links
    head: Option<Box<Order>>,
    len: usize,
}

/// Whether a resting order at `resting_px` stays ahead of an incoming order
/// at `incoming_px`. Equal prices keep the resting order ahead, which is
/// what preserves arrival order within a price.
fn keeps_priority(side: Side, resting_px: i64, incoming_px: i64) -> bool {
    match side {
        Side::Bid => resting_px >= incoming_px,
        Side::Ask => resting_px <= incoming_px,
    }
}

impl Chain {
    /// Creates an empty chain for the given side.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            head: None,
            len: 0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Splices `order` immediately before the first resting order it
    /// outranks, or at the tail if it outranks none. A new order at an
    /// already-present price always lands behind the resting ones.
    pub fn insert(&mut self, mut order: Box<Order>) {
        debug_assert_eq!(order.side, self.side);
        let side = self.side;
        let mut slot = &mut self.head;
        while slot
            .as_ref()
            .map_or(false, |resting| keeps_priority(side, resting.px_ticks, order.px_ticks))
        {
            slot = &mut slot.as_mut().unwrap().next;
        }
        order.next = slot.take();
        *slot = Some(order);
        self.len += 1;
    }

    /// Detaches the head and promotes its successor in a single slot store.
    /// The returned order no longer belongs to any chain.
    pub fn pop_head(&mut self) -> Option<Box<Order>> {
        let mut head = self.head.take()?;
        self.head = head.next.take();
        self.len -= 1;
        Some(head)
    }

    pub fn head(&self) -> Option<&Order> {
        self.head.as_deref()
    }

    pub fn head_mut(&mut self) -> Option<&mut Order> {
        self.head.as_deref_mut()
    }

    /// Price at the top of book, `None` for an empty side.
    pub fn best_price(&self) -> Option<i64> {
        self.head().map(|order| order.px_ticks)
    }

    /// Number of resting orders.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Total unfilled quantity across the chain.
    pub fn total_qty(&self) -> i64 {
        self.iter().map(|order| order.qty).sum()
    }

    /// Walks the chain from the head in priority order.
    pub fn iter(&self) -> Orders<'_> {
        Orders {
            next: self.head.as_deref(),
        }
    }
}

pub struct Orders<'a> {
    next: Option<&'a Order>,
}

impl<'a> Iterator for Orders<'a> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let order = self.next?;
        self.next = order.next.as_deref();
        Some(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderId;

    fn order(id: u128, side: Side, px_ticks: i64, qty: i64) -> Box<Order> {
        Box::new(Order::new(OrderId(id), "NVDA", side, px_ticks, qty, id).unwrap())
    }

    fn prices(chain: &Chain) -> Vec<i64> {
        chain.iter().map(|o| o.px_ticks).collect()
    }

    fn ids(chain: &Chain) -> Vec<u128> {
        chain.iter().map(|o| o.id.0).collect()
    }

    #[test]
    fn new_chain_is_empty() {
        let bids = Chain::new(Side::Bid);
        assert!(bids.is_empty());
        assert_eq!(bids.len(), 0);
        assert_eq!(bids.best_price(), None);
    }

    #[test]
    fn bids_stay_sorted_descending() {
        let mut bids = Chain::new(Side::Bid);
        for (id, px) in [(1, 10_050), (2, 10_200), (3, 10_000), (4, 10_100)] {
            bids.insert(order(id, Side::Bid, px, 10));
        }

        assert_eq!(prices(&bids), vec![10_200, 10_100, 10_050, 10_000]);
        assert_eq!(bids.best_price(), Some(10_200));
    }

    #[test]
    fn asks_stay_sorted_ascending() {
        let mut asks = Chain::new(Side::Ask);
        for (id, px) in [(1, 10_300), (2, 10_150), (3, 10_400), (4, 10_200)] {
            asks.insert(order(id, Side::Ask, px, 10));
        }

        assert_eq!(prices(&asks), vec![10_150, 10_200, 10_300, 10_400]);
        assert_eq!(asks.best_price(), Some(10_150));
    }

    #[test]
    fn equal_prices_keep_arrival_order() {
        let mut asks = Chain::new(Side::Ask);
        asks.insert(order(1, Side::Ask, 10_200, 10));
        asks.insert(order(2, Side::Ask, 10_100, 20));
        asks.insert(order(3, Side::Ask, 10_200, 30));
        asks.insert(order(4, Side::Ask, 10_200, 40));

        // 2 outranks on price; 1, 3, 4 share a price in arrival order
        assert_eq!(ids(&asks), vec![2, 1, 3, 4]);
    }

    #[test]
    fn more_aggressive_order_becomes_head() {
        let mut bids = Chain::new(Side::Bid);
        bids.insert(order(1, Side::Bid, 10_000, 10));
        bids.insert(order(2, Side::Bid, 10_100, 10));

        assert_eq!(ids(&bids), vec![2, 1]);
        assert_eq!(bids.best_price(), Some(10_100));
    }

    #[test]
    fn pop_head_promotes_successor() {
        let mut asks = Chain::new(Side::Ask);
        asks.insert(order(1, Side::Ask, 10_100, 10));
        asks.insert(order(2, Side::Ask, 10_200, 20));

        let popped = asks.pop_head().expect("head exists");
        assert_eq!(popped.id.0, 1);
        assert!(popped.next.is_none(), "detached order keeps no link");
        assert_eq!(asks.best_price(), Some(10_200));
        assert_eq!(asks.len(), 1);

        let popped = asks.pop_head().expect("second head");
        assert_eq!(popped.id.0, 2);
        assert!(asks.is_empty());
        assert!(asks.pop_head().is_none());
    }

    #[test]
    fn total_qty_sums_the_chain() {
        let mut bids = Chain::new(Side::Bid);
        assert_eq!(bids.total_qty(), 0);
        bids.insert(order(1, Side::Bid, 10_000, 10));
        bids.insert(order(2, Side::Bid, 10_100, 25));
        assert_eq!(bids.total_qty(), 35);
    }
}
