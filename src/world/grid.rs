//! Fixed-size tile grid with occupancy validation

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::Direction;
use crate::world::tile::Tile;

/// Row-major store of the world's tiles
///
/// Coordinates are signed so callers can probe positions derived from
/// arithmetic without pre-checking; out-of-range lookups return `None`,
/// which placement code treats as "unplaceable here".
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::default(); (width * height) as usize],
        }
    }

    /// Roll random ground textures and orientations over the whole grid
    pub fn generate_ground(&mut self, rng: &mut ChaCha8Rng) {
        for tile in &mut self.tiles {
            tile.texture = rng.gen_range(1..=2);
            tile.orientation = Direction::ALL[rng.gen_range(0..4)];
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        self.index(x, y).map(|i| &self.tiles[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        self.index(x, y).map(move |i| &mut self.tiles[i])
    }

    /// Can a w x h footprint anchored at (x, y) be placed?
    ///
    /// Every covered tile must exist, be unoccupied and not belong to an
    /// enclosure. Runs before any mutation, so no rollback path exists.
    pub fn can_place_footprint(&self, x: i32, y: i32, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        for j in 0..height as i32 {
            for i in 0..width as i32 {
                match self.get(x + i, y + j) {
                    Some(tile) if !tile.is_occupied() => {}
                    _ => return false,
                }
            }
        }
        true
    }

    /// Footprint check plus a free 1-tile ring around it
    ///
    /// Used by the decorative scatter so footprints never visually touch.
    /// Ring tiles hanging off the map edge are ignored; the footprint
    /// itself must still be fully on the map.
    pub fn can_place_with_margin(&self, x: i32, y: i32, width: u32, height: u32) -> bool {
        if !self.can_place_footprint(x, y, width, height) {
            return false;
        }
        for j in -1..=height as i32 {
            for i in -1..=width as i32 {
                let on_ring =
                    i == -1 || j == -1 || i == width as i32 || j == height as i32;
                if !on_ring {
                    continue;
                }
                if let Some(tile) = self.get(x + i, y + j) {
                    if tile.is_occupied() {
                        return false;
                    }
                }
            }
        }
        true
    }
}
