//! Tile cells and enclosure border classification

use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, PlaceableId};

/// Border classification of an enclosure tile, used to pick fence sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Classify a tile offset (i, j) within a w x h enclosure rectangle
///
/// Corners are checked before sides; flipping that order would label the
/// corners as plain edges. Interior tiles classify as `None`.
pub fn classify_edge(i: u32, j: u32, width: u32, height: u32) -> Option<EdgeKind> {
    let right = i == width - 1;
    let bottom = j == height - 1;

    if i == 0 && j == 0 {
        Some(EdgeKind::TopLeft)
    } else if right && j == 0 {
        Some(EdgeKind::TopRight)
    } else if i == 0 && bottom {
        Some(EdgeKind::BottomLeft)
    } else if right && bottom {
        Some(EdgeKind::BottomRight)
    } else if j == 0 {
        Some(EdgeKind::Top)
    } else if bottom {
        Some(EdgeKind::Bottom)
    } else if i == 0 {
        Some(EdgeKind::Left)
    } else if right {
        Some(EdgeKind::Right)
    } else {
        None
    }
}

/// A single cell of the world grid
///
/// Every tile covered by a placed object references that object through
/// `occupant`; exactly one tile per object (its top-left origin) carries
/// `is_main_tile`. Renderers read these fields once per frame and must
/// tolerate `occupant == None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    /// Ground texture id (0 = untextured)
    pub texture: u16,
    /// Ground texture rotation
    pub orientation: Direction,
    /// Object covering this tile, if any (shared across a footprint)
    pub occupant: Option<PlaceableId>,
    /// True on the single origin tile of the occupying object
    pub is_main_tile: bool,
    /// True while an enclosure covers this tile
    pub is_enclosure: bool,
    /// Fence-border classification; `None` for interior and bare tiles
    pub edge_kind: Option<EdgeKind>,
}

impl Tile {
    pub fn new(texture: u16, orientation: Direction) -> Self {
        Self {
            texture,
            orientation,
            occupant: None,
            is_main_tile: false,
            is_enclosure: false,
            edge_kind: None,
        }
    }

    /// True when nothing may be placed over this tile
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some() || self.is_enclosure
    }

    /// Reset all occupancy bookkeeping, leaving the ground untouched
    pub fn clear_occupancy(&mut self) {
        self.occupant = None;
        self.is_main_tile = false;
        self.is_enclosure = false;
        self.edge_kind = None;
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(0, Direction::North)
    }
}
