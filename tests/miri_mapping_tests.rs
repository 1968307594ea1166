//! Miri tests for mapping layer memory safety.
//!
//! These tests focus on the low-level memory operations in the mapping layer - the
//! `MaybeUninit` slot arrays and their occupancy tracking - that are most likely to have
//! memory safety issues under Miri's strict checking.

use artmap::mapping::{
    direct_mapping::DirectMapping, indexed_mapping::IndexedMapping,
    sorted_keyed_mapping::SortedKeyedMapping, NodeMapping,
};

#[test]
fn miri_direct_mapping_basic_ops() {
    let mut dm = DirectMapping::<i32>::new();

    for i in 0..=255u8 {
        dm.add_child(i, i as i32);
        assert_eq!(*dm.seek_child(i).unwrap(), i as i32);
    }

    for i in 0..=255u8 {
        *dm.seek_child_mut(i).unwrap() = (i as i32) * 2;
        assert_eq!(*dm.seek_child(i).unwrap(), (i as i32) * 2);
    }

    for i in 0..=255u8 {
        assert_eq!(dm.delete_child(i), Some((i as i32) * 2));
        assert_eq!(dm.seek_child(i), None);
    }

    assert_eq!(dm.num_children(), 0);
}

#[test]
fn miri_direct_mapping_iterator() {
    let mut dm = DirectMapping::<Box<i32>>::new();

    // Box makes ownership issues visible to Miri.
    for i in 0..10u8 {
        dm.add_child(i, Box::new(i as i32));
    }

    let items: Vec<_> = dm.into_iter().collect();
    assert_eq!(items.len(), 10);

    for (key, boxed_val) in items {
        assert_eq!(*boxed_val, key as i32);
    }
}

#[test]
fn miri_direct_mapping_partial_drain_then_drop() {
    let mut dm = DirectMapping::<Box<i32>>::new();
    for i in 0..10u8 {
        dm.add_child(i, Box::new(i as i32));
    }
    let mut iter = dm.into_iter();
    assert!(iter.next().is_some());
    assert!(iter.next().is_some());
    // The rest is released by the iterator's own drop.
    drop(iter);
}

#[test]
fn miri_sorted_keyed_mapping_shift_ops() {
    let mut km = SortedKeyedMapping::<Box<i32>, 16>::new();

    // Out-of-order adds exercise the insert shifting.
    for key in [8u8, 2, 12, 4, 10, 6, 0, 14] {
        km.add_child(key, Box::new(key as i32));
    }
    assert_eq!(km.num_children(), 8);

    // Delete from the middle exercises the delete shifting.
    assert_eq!(km.delete_child(6).map(|b| *b), Some(6));
    assert_eq!(km.delete_child(8).map(|b| *b), Some(8));
    assert_eq!(km.seek_child(6), None);
    assert_eq!(km.seek_child(10).map(|b| **b), Some(10));

    // Remaining children released by drop.
}

#[test]
fn miri_sorted_keyed_mapping_into_iter() {
    let mut km = SortedKeyedMapping::<Box<i32>, 4>::new();
    for key in [3u8, 1, 2, 0] {
        km.add_child(key, Box::new(key as i32));
    }
    let items: Vec<_> = km.into_iter().collect();
    let keys: Vec<u8> = items.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![0, 1, 2, 3]);
}

#[test]
fn miri_indexed_mapping_slot_recycling() {
    let mut im = IndexedMapping::<Box<i32>, 48>::new();

    for i in 0..48u8 {
        im.add_child(i, Box::new(i as i32));
    }
    for i in (0..48u8).step_by(2) {
        assert_eq!(im.delete_child(i).map(|b| *b), Some(i as i32));
    }
    // Refill the recycled slots under different keys.
    for i in 100..124u8 {
        im.add_child(i, Box::new(i as i32));
    }
    assert_eq!(im.num_children(), 48);

    for i in (1..48u8).step_by(2) {
        assert_eq!(im.seek_child(i).map(|b| **b), Some(i as i32));
    }
    for i in 100..124u8 {
        assert_eq!(im.seek_child(i).map(|b| **b), Some(i as i32));
    }
}

#[test]
fn miri_grow_shrink_conversions() {
    // Walk a node's children up the whole width ladder and back, with boxed values so any
    // slot mishandling double-frees or leaks under Miri.
    let mut small = SortedKeyedMapping::<Box<i32>, 4>::new();
    for key in [3u8, 0, 2, 1] {
        small.add_child(key, Box::new(key as i32));
    }

    let mut sixteen = SortedKeyedMapping::<Box<i32>, 16>::from_resized(&mut small);
    assert_eq!(small.num_children(), 0);
    for key in 4..16u8 {
        sixteen.add_child(key, Box::new(key as i32));
    }

    let mut forty_eight = IndexedMapping::<Box<i32>, 48>::from_sorted(&mut sixteen);
    assert_eq!(sixteen.num_children(), 0);
    for key in 16..48u8 {
        forty_eight.add_child(key, Box::new(key as i32));
    }

    let mut direct = DirectMapping::from_indexed(&mut forty_eight);
    assert_eq!(forty_eight.num_children(), 0);
    assert_eq!(direct.num_children(), 48);

    for key in 40..48u8 {
        assert!(direct.delete_child(key).is_some());
    }
    let mut back_to_48 = IndexedMapping::<Box<i32>, 48>::from_direct(&mut direct);
    for key in 16..40u8 {
        assert!(back_to_48.delete_child(key).is_some());
    }
    let back_to_16 = SortedKeyedMapping::<Box<i32>, 16>::from_indexed(&mut back_to_48);
    assert_eq!(back_to_16.num_children(), 16);
    for key in 0..16u8 {
        assert_eq!(back_to_16.seek_child(key).map(|b| **b), Some(key as i32));
    }
}
