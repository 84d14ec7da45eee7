#![cfg(feature = "dev")]
//! Tests for the key-ordered interpolatable container and its cursor.
//!
//! ## Test Organization
//!
//! 1. **Container** - Ordered insertion, replacement, lookup
//! 2. **Cursor** - Jumps, sequential walks, range checks, in-place writes

use mapping_rs::internals::algorithms::container::{AxisCursor, InterpolatedMap};
use mapping_rs::internals::math::interpolation::{Interpolator, Selection};

fn sample() -> InterpolatedMap<f64, f64> {
    let mut map = InterpolatedMap::new(Interpolator::linear());
    map.insert(5.0, 50.0);
    map.insert(1.0, 10.0);
    map.insert(3.0, 30.0);
    map
}

// ============================================================================
// Container Tests
// ============================================================================

/// Entries stay sorted whatever the insertion order.
#[test]
fn test_insert_keeps_keys_sorted() {
    let map = sample();

    assert_eq!(map.keys().collect::<Vec<_>>(), vec![1.0, 3.0, 5.0]);
    assert_eq!(map.len(), 3);
    assert_eq!(map.first_key(), Some(1.0));
    assert_eq!(map.last_key(), Some(5.0));
}

/// Inserting at an existing key replaces the value.
#[test]
fn test_insert_replaces() {
    let mut map = sample();
    let idx = map.insert(3.0, 33.0);

    assert_eq!(idx, 1);
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(3.0), Some(&33.0));
}

/// Appending in order pushes; out-of-order appends fall back to insert.
#[test]
fn test_append() {
    let mut map = InterpolatedMap::<f64, f64>::new(Interpolator::linear());
    map.append(1.0, 1.0);
    map.append(2.0, 2.0);
    map.append(1.5, 1.5);
    map.append(2.0, 4.0);

    assert_eq!(
        map.entries(),
        &[(1.0, 1.0), (1.5, 1.5), (2.0, 4.0)]
    );
}

/// Exact lookup and interpolated lookup.
#[test]
fn test_lookup() {
    let map = sample();

    assert_eq!(map.find(3.0), Some(1));
    assert_eq!(map.find(4.0), None);
    assert_eq!(map.interpolated_value(4.0), 40.0);
    assert_eq!(map.interpolated_value(0.0), 10.0);
    assert!(matches!(map.select(3.0), Selection::Exact(v) if *v == 30.0));
    assert!(matches!(map.select(2.0), Selection::Blend { .. }));
}

/// `entry_or_insert_with` only creates missing entries.
#[test]
fn test_entry_or_insert_with() {
    let mut map = sample();

    let existing = map.entry_or_insert_with(3.0, || unreachable!());
    let created = map.entry_or_insert_with(4.0, || 40.0);

    assert_eq!(existing, 1);
    assert_eq!(created, 2);
    assert_eq!(map.len(), 4);
}

// ============================================================================
// Cursor Tests
// ============================================================================

/// The cursor starts at the first key and walks every key in order.
#[test]
fn test_cursor_walk() {
    let map = sample();
    let mut cursor = AxisCursor::begin(&map);

    let mut seen = vec![cursor.position()];
    while cursor.has_next(&map) {
        cursor.next(&map);
        seen.push(cursor.position());
    }
    assert_eq!(seen, vec![1.0, 3.0, 5.0]);
}

/// Range checks before, inside and after the keys.
#[test]
fn test_cursor_in_range() {
    let map = sample();

    assert!(!AxisCursor::at(&map, 0.0).in_range(&map));
    assert!(AxisCursor::at(&map, 1.0).in_range(&map));
    assert!(AxisCursor::at(&map, 4.0).in_range(&map));
    assert!(AxisCursor::at(&map, 5.0).in_range(&map));
    assert!(!AxisCursor::at(&map, 6.0).in_range(&map));
}

/// Cursors over an empty map are never in range and have no next entry.
#[test]
fn test_cursor_empty_map() {
    let map = InterpolatedMap::<f64, f64>::new(Interpolator::linear());
    let cursor = AxisCursor::begin(&map);

    assert!(!cursor.in_range(&map));
    assert!(!cursor.has_next(&map));
    assert_eq!(cursor.next_key(&map), None);
}

/// `iterate_to` walks past skipped keys and matches a fresh jump.
#[test]
fn test_cursor_iterate_to_matches_jump() {
    let map = sample();
    let mut walked = AxisCursor::begin(&map);

    walked.iterate_to(&map, 4.0);
    assert_eq!(walked, AxisCursor::at(&map, 4.0));
    assert_eq!(walked.next_key(&map), Some(5.0));

    walked.iterate_to(&map, 7.0);
    assert_eq!(walked, AxisCursor::at(&map, 7.0));
    assert!(!walked.has_next(&map));
}

/// `next()` past the last key panics.
#[test]
#[should_panic(expected = "without a next entry")]
fn test_cursor_next_past_end_panics() {
    let map = sample();
    let mut cursor = AxisCursor::at(&map, 5.0);
    cursor.next(&map);
}

/// Writing through a cursor creates entries at its position.
#[test]
fn test_cursor_entry_here() {
    let mut map = sample();
    let mut cursor = AxisCursor::at(&map, 4.0);

    let idx = cursor.entry_here(&mut map, || 44.0);
    assert_eq!(idx, 2);
    assert_eq!(cursor.exact_index(&map), Some(2));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec![1.0, 3.0, 4.0, 5.0]);
    assert_eq!(cursor, AxisCursor::at(&map, 4.0));
}
