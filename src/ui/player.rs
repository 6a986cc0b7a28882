//! The player's map position and inventory

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::Vec2;

/// The camera-follow position the player steers, plus their item inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Continuous tile coordinates
    pub position: Vec2,
    /// Tiles per second
    pub speed: f32,
    inventory: AHashMap<String, u32>,
}

impl Player {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            speed,
            inventory: AHashMap::new(),
        }
    }

    /// Move along an input vector for one tick
    ///
    /// `dx`/`dy` are -1, 0 or 1 per axis from held keys; diagonal input
    /// is not normalized, so diagonals run faster.
    pub fn move_by(&mut self, dx: f32, dy: f32, dt: f32) {
        self.position.x += dx * self.speed * dt;
        self.position.y += dy * self.speed * dt;
    }

    pub fn add_to_inventory(&mut self, item: &str, quantity: u32) {
        *self.inventory.entry(item.to_string()).or_insert(0) += quantity;
    }

    /// Take items out; returns false (inventory unchanged) when there
    /// are not enough
    pub fn remove_from_inventory(&mut self, item: &str, quantity: u32) -> bool {
        match self.inventory.get_mut(item) {
            Some(count) if *count >= quantity => {
                *count -= quantity;
                true
            }
            _ => false,
        }
    }

    pub fn inventory_count(&self, item: &str) -> u32 {
        self.inventory.get(item).copied().unwrap_or(0)
    }
}
