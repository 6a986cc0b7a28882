//! Enclosures: fenced rectangles that own and update animals

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::types::{AnimalId, Bounds, PlaceableId, Vec2};
use crate::entity::animal::{Animal, Neighbor};

/// A fenced rectangle on the grid holding a bounded roster of animals
///
/// The outermost ring of tiles is the fence; animals roam the interior.
/// Capacity scales with interior area and is enforced only when adding —
/// the update loop never evicts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enclosure {
    pub id: PlaceableId,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub max_animals: usize,
    animals: Vec<Animal>,
}

impl Enclosure {
    /// Minimum side length: a 1-tile fence ring plus at least one interior tile
    pub const MIN_SIDE: u32 = 3;

    pub fn new(id: PlaceableId, x: i32, y: i32, width: u32, height: u32, config: &SimulationConfig) -> Self {
        let interior = (width.saturating_sub(1)) * (height.saturating_sub(1));
        Self {
            id,
            x,
            y,
            width,
            height,
            max_animals: (interior / config.tiles_per_animal) as usize,
            animals: Vec::new(),
        }
    }

    /// Interior rectangle animals may roam, in continuous tile coordinates
    ///
    /// One tile on each side is reserved for the fence; the far corner is
    /// additionally pulled in by the sprite extent (positions anchor a
    /// sprite's top-left) and by the configured fence inset.
    pub fn interior_bounds(&self, config: &SimulationConfig) -> Bounds {
        let min = Vec2::new(self.x as f32 + 1.0, self.y as f32 + 1.0);
        let max = Vec2::new(
            (self.x + self.width as i32) as f32 - 1.0,
            (self.y + self.height as i32) as f32 - 1.0,
        );
        Bounds::new(min, max)
            .shrink_max(config.sprite_extent)
            .inset(config.fence_inset)
    }

    /// Add an animal if capacity allows; returns false (roster unchanged)
    /// when the enclosure is full
    pub fn add_animal(&mut self, animal: Animal) -> bool {
        if self.animals.len() >= self.max_animals {
            return false;
        }
        self.animals.push(animal);
        true
    }

    /// Remove an animal by id, returning it if present
    pub fn remove_animal(&mut self, id: AnimalId) -> Option<Animal> {
        let index = self.animals.iter().position(|a| a.id == id)?;
        Some(self.animals.remove(index))
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn animals_mut(&mut self) -> &mut [Animal] {
        &mut self.animals
    }

    /// Does (tx, ty) fall on any tile of this enclosure's footprint?
    pub fn covers(&self, tx: i32, ty: i32) -> bool {
        tx >= self.x
            && tx < self.x + self.width as i32
            && ty >= self.y
            && ty < self.y + self.height as i32
    }

    /// Update every contained animal for one tick
    ///
    /// Animals are processed in roster insertion order, each seeing the
    /// already-committed positions of the animals before it. The order is
    /// fixed, so runs with the same seed reproduce exactly.
    pub fn update_animals(&mut self, dt: f32, config: &SimulationConfig, rng: &mut ChaCha8Rng) {
        let bounds = self.interior_bounds(config);

        for index in 0..self.animals.len() {
            let others: Vec<Neighbor> = self
                .animals
                .iter()
                .enumerate()
                .filter(|(other_index, _)| *other_index != index)
                .map(|(_, animal)| Neighbor {
                    position: animal.position,
                    radius: animal.collision_radius,
                })
                .collect();

            self.animals[index].update(dt, bounds, &others, config, rng);
        }
    }
}
