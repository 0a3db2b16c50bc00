//! Preference-list behaviour under membership changes.

use corelib::ring::{HashRing, RingBuilder};
use proptest::prelude::*;
use replication::{ReplicationStrategy, SimpleStrategy};

fn ring_of(nodes: usize) -> HashRing {
    (0..nodes)
        .fold(RingBuilder::new().with_replicas(32), |b, i| b.add_node(format!("node{i}")))
        .build()
        .unwrap()
}

#[test]
fn test_removing_a_replica_promotes_the_next_node() {
    let mut ring = ring_of(5);
    let strategy = SimpleStrategy::new(3);
    let before = strategy.replicas_for_key(&ring, b"object-42").unwrap();

    ring.remove_node(before[1].as_str()).unwrap();
    let after = strategy.replicas_for_key(&ring, b"object-42").unwrap();

    assert_eq!(after.len(), 3);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[2]);
    assert!(!after.contains(&before[1]));
}

#[test]
fn test_single_node_ring() {
    let ring = ring_of(1);
    let replicas = SimpleStrategy::new(3).replicas_for_key(&ring, b"k").unwrap();
    assert_eq!(replicas.len(), 1);
    assert_eq!(replicas[0], "node0");
}

proptest! {
    #[test]
    fn prop_replicas_are_distinct_and_led_by_owner(
        key in prop::collection::vec(any::<u8>(), 0..32),
        nodes in 1usize..8,
        factor in 1usize..8,
    ) {
        let ring = ring_of(nodes);
        let replicas = SimpleStrategy::new(factor).replicas_for_key(&ring, &key).unwrap();

        prop_assert_eq!(replicas.len(), factor.min(nodes));
        prop_assert_eq!(&replicas[0], ring.lookup(&key).unwrap());
        let unique: std::collections::HashSet<_> = replicas.iter().collect();
        prop_assert_eq!(unique.len(), replicas.len());
    }
}
