//! Integration tests for the placement engine
//!
//! These tests verify the occupancy bookkeeping across the full placement
//! lifecycle:
//! - Footprint validation before any mutation
//! - Occupancy invariant (every covered tile references its object)
//! - Edge-kind classification for fence rendering
//! - Idempotent removal that never touches unrelated tiles

use paddock::catalog::placeables::PlaceableRegistry;
use paddock::core::config::SimulationConfig;
use paddock::world::map::WorldMap;
use paddock::world::tile::EdgeKind;

// ============================================================================
// Occupancy Invariant Tests
// ============================================================================

/// Every tile is occupied exactly when a live placeable covers it
#[test]
fn test_occupancy_matches_live_objects() {
    let mut map = WorldMap::new(30, 30);
    let registry = PlaceableRegistry::builtin();
    let config = SimulationConfig::default();

    map.create_prop("well", 2, 2, &registry);
    map.create_prop("tree", 6, 2, &registry);
    map.create_enclosure(10, 10, 5, 5, &config);

    for y in 0..30 {
        for x in 0..30 {
            let tile = map.get_tile(x, y).unwrap();
            let covered = map.props().iter().any(|p| p.covers(x, y))
                || map.enclosures().iter().any(|e| e.covers(x, y));
            assert_eq!(
                tile.occupant.is_some(),
                covered,
                "occupancy out of sync at ({x}, {y})"
            );
        }
    }
}

/// Exactly one main tile per placed object
#[test]
fn test_single_main_tile_per_object() {
    let mut map = WorldMap::new(30, 30);
    let registry = PlaceableRegistry::builtin();
    let config = SimulationConfig::default();

    map.create_prop("tree", 3, 3, &registry);
    map.create_enclosure(10, 10, 6, 4, &config);

    let mut main_tiles = 0;
    for y in 0..30 {
        for x in 0..30 {
            if map.get_tile(x, y).unwrap().is_main_tile {
                main_tiles += 1;
                // Main tiles sit on object origins
                assert!(
                    map.props().iter().any(|p| (p.x, p.y) == (x, y))
                        || map.enclosures().iter().any(|e| (e.x, e.y) == (x, y))
                );
            }
        }
    }
    assert_eq!(main_tiles, 2);
}

/// Validation precedes mutation: a rejected placement leaves no trace
#[test]
fn test_rejected_placement_mutates_nothing() {
    let mut map = WorldMap::new(30, 30);
    let registry = PlaceableRegistry::builtin();

    map.create_prop("well", 5, 5, &registry);

    // A 2x2 tree overlapping the well must be reported unplaceable
    assert!(!map.can_place_footprint(4, 4, 2, 2));
    // And the caller respecting the contract placed nothing, so the
    // neighbouring tiles are untouched
    assert!(map.get_tile(4, 4).unwrap().occupant.is_none());
    assert!(map.get_tile(4, 5).unwrap().occupant.is_none());
}

// ============================================================================
// Removal Tests
// ============================================================================

/// Removal clears exactly the footprint, and twice is as good as once
#[test]
fn test_removal_idempotent_and_scoped() {
    let mut map = WorldMap::new(30, 30);
    let registry = PlaceableRegistry::builtin();

    let tree = map.create_prop("tree", 3, 3, &registry).unwrap();
    let well = map.create_prop("well", 8, 3, &registry).unwrap();

    map.remove_prop(tree);
    map.remove_prop(tree); // must not panic or touch anything else

    assert!(map.get_tile(3, 3).unwrap().occupant.is_none());
    assert!(map.get_tile(4, 4).unwrap().occupant.is_none());
    assert_eq!(map.get_tile(8, 3).unwrap().occupant, Some(well));
    assert_eq!(map.props().len(), 1);
}

/// Removing an enclosure frees its tiles for new placements
#[test]
fn test_enclosure_teardown_frees_ground() {
    let mut map = WorldMap::new(30, 30);
    let registry = PlaceableRegistry::builtin();
    let config = SimulationConfig::default();

    let pen = map.create_enclosure(10, 10, 5, 5, &config);
    assert!(!map.can_place_footprint(12, 12, 1, 1));

    map.remove_enclosure(pen);
    assert!(map.can_place_footprint(12, 12, 1, 1));
    assert!(map.create_prop("well", 12, 12, &registry).is_some());
}

// ============================================================================
// Edge-Kind Classification Tests
// ============================================================================

/// The 5x5 enclosure at (10, 10) from the design notes
#[test]
fn test_edge_kind_reference_case() {
    let mut map = WorldMap::new(30, 30);
    let config = SimulationConfig::default();
    map.create_enclosure(10, 10, 5, 5, &config);

    let kind = |x: i32, y: i32| map.get_tile(x, y).unwrap().edge_kind;
    assert_eq!(kind(10, 10), Some(EdgeKind::TopLeft));
    assert_eq!(kind(14, 10), Some(EdgeKind::TopRight));
    assert_eq!(kind(12, 10), Some(EdgeKind::Top));
    assert_eq!(kind(12, 12), None);
}

/// Non-square enclosures classify each side independently
#[test]
fn test_edge_kind_rectangular() {
    let mut map = WorldMap::new(30, 30);
    let config = SimulationConfig::default();
    map.create_enclosure(2, 2, 7, 3, &config);

    let kind = |x: i32, y: i32| map.get_tile(x, y).unwrap().edge_kind;
    assert_eq!(kind(2, 2), Some(EdgeKind::TopLeft));
    assert_eq!(kind(8, 2), Some(EdgeKind::TopRight));
    assert_eq!(kind(8, 4), Some(EdgeKind::BottomRight));
    assert_eq!(kind(5, 2), Some(EdgeKind::Top));
    assert_eq!(kind(5, 4), Some(EdgeKind::Bottom));
    assert_eq!(kind(2, 3), Some(EdgeKind::Left));
    assert_eq!(kind(8, 3), Some(EdgeKind::Right));
    // The single interior row
    assert_eq!(kind(5, 3), None);
}
