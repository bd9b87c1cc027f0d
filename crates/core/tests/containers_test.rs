//! Container Integration Tests
//!
//! Exercises the public container API the way an application composes it:
//! pool slots carrying orders, a queue of handles, and per-venue counters in an
//! enum-keyed map.

use latencykit_core::prelude::*;
use latencykit_core::{impl_ordinal, MapError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Venue {
    Alpha,
    Beta,
    Gamma,
}
impl_ordinal!(Venue);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Order {
    id: u64,
    venue: Option<Venue>,
    quantity: u32,
}

#[test]
fn test_queue_capacity_scenario() {
    let mut queue = RingBufferQueue::<i32, 3>::new();
    assert!(queue.push(1));
    assert!(queue.push(2));
    assert!(queue.push(3));
    assert!(!queue.push(4));

    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(2));
    assert!(queue.push(4));
    assert_eq!(queue.pop(), Some(3));
    assert_eq!(queue.pop(), Some(4));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_pool_capacity_scenario() {
    let mut pool = PoolAllocator::<Order, 2>::new();
    let p1 = pool.allocate();
    let p2 = pool.allocate();
    assert!(p1.is_some() && p2.is_some());
    assert_ne!(p1, p2);
    assert_eq!(pool.allocate(), None);

    pool.deallocate_opt(p1);
    assert_eq!(pool.allocate(), p1);
}

#[test]
fn test_map_scenario() -> CoreResult<()> {
    let mut map = EnumKeyedMap::<Venue, i32, 3>::new();
    map.insert(Venue::Alpha, 10)?;
    map.insert(Venue::Beta, 20)?;
    assert_eq!(map.find(&Venue::Alpha), Some(&10));

    map.insert(Venue::Alpha, 15)?;
    assert_eq!(map.find(&Venue::Alpha), Some(&15));
    assert_eq!(map.size(), 2);
    assert_eq!(map.find(&Venue::Gamma), None);
    Ok(())
}

#[test]
fn test_order_pipeline() -> CoreResult<()> {
    let mut pool = PoolAllocator::<Order, 8>::new();
    let mut inbox = RingBufferQueue::<PoolHandle, 8>::new();
    let mut filled = EnumKeyedMap::<Venue, u32, 3>::new();

    let venues = [Venue::Alpha, Venue::Beta, Venue::Alpha, Venue::Gamma, Venue::Alpha];
    for (id, venue) in (1_u64..).zip(venues) {
        let order = Order {
            id,
            venue: Some(venue),
            quantity: 10,
        };
        let Ok(handle) = pool.allocate_with(order) else {
            return Err(CoreError::config("pool unexpectedly exhausted"));
        };
        assert!(inbox.push(handle));
    }
    assert_eq!(pool.live(), 5);

    let mut seen = Vec::new();
    while let Some(handle) = inbox.pop() {
        let Some(order) = pool.deallocate(handle) else {
            continue;
        };
        seen.push(order.id);
        if let Some(venue) = order.venue {
            *filled.index(venue)? += order.quantity;
        }
    }

    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    assert_eq!(pool.live(), 0);
    assert_eq!(pool.free_chain_len(), 8);

    let totals: Vec<(Venue, u32)> = filled.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(
        totals,
        vec![(Venue::Alpha, 30), (Venue::Beta, 10), (Venue::Gamma, 10)]
    );
    Ok(())
}

#[test]
fn test_map_errors_propagate() {
    fn fill(map: &mut EnumKeyedMap<u8, u8, 2>) -> CoreResult<()> {
        for key in 0..3 {
            map.insert(key, key)?;
        }
        Ok(())
    }

    let mut map = EnumKeyedMap::<u8, u8, 2>::new();
    let err = fill(&mut map);
    assert!(matches!(
        err.as_ref().map_err(CoreError::as_map_error),
        Err(Some(MapError::MapFull { capacity: 2 }))
    ));
    assert_eq!(map.size(), 2);
}

#[test]
fn test_pool_default_value_slots() {
    let mut pool = PoolAllocator::<Order, 1>::new();
    let Some(handle) = pool.allocate() else {
        return;
    };
    assert_eq!(pool.get(handle), None);
    assert_eq!(pool.write(handle, Order::default()), Ok(None));
    if let Some(order) = pool.get_mut(handle) {
        order.quantity = 3;
    }
    assert_eq!(pool.get(handle).map(|o| o.quantity), Some(3));
}
