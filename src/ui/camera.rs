//! View transform that keeps the player centered

use serde::{Deserialize, Serialize};

use crate::core::types::Vec2;

/// Camera offset in pixels, derived from the followed position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub offset: Vec2,
    pub tile_size: f32,
    pub viewport: (u32, u32),
}

impl Camera {
    pub fn new(tile_size: f32, viewport: (u32, u32)) -> Self {
        Self {
            offset: Vec2::default(),
            tile_size,
            viewport,
        }
    }

    /// Recenter on a position given in tile coordinates
    pub fn follow(&mut self, target: Vec2) {
        self.offset = Vec2::new(
            target.x * self.tile_size - self.viewport.0 as f32 / 2.0,
            target.y * self.tile_size - self.viewport.1 as f32 / 2.0,
        );
    }

    /// World pixels to screen pixels
    ///
    /// Rounds at transform time so adjacent tiles never show seams.
    pub fn apply(&self, world: Vec2) -> (i32, i32) {
        (
            (world.x - self.offset.x).round() as i32,
            (world.y - self.offset.y).round() as i32,
        )
    }

    /// Would a tile-sized sprite at these screen coordinates be visible?
    pub fn is_visible(&self, screen: (i32, i32)) -> bool {
        let margin = self.tile_size as i32;
        screen.0 >= -margin
            && screen.0 <= self.viewport.0 as i32
            && screen.1 >= -margin
            && screen.1 <= self.viewport.1 as i32
    }

    /// Viewport changed (window resize)
    pub fn set_viewport(&mut self, viewport: (u32, u32)) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_centers_target() {
        let mut camera = Camera::new(64.0, (1080, 720));
        camera.follow(Vec2::new(10.0, 5.0));

        // The followed point lands at the viewport center
        let screen = camera.apply(Vec2::new(10.0 * 64.0, 5.0 * 64.0));
        assert_eq!(screen, (540, 360));
    }

    #[test]
    fn test_apply_rounds() {
        let mut camera = Camera::new(64.0, (100, 100));
        camera.offset = Vec2::new(0.4, -0.6);
        assert_eq!(camera.apply(Vec2::new(0.0, 0.0)), (0, 1));
    }

    #[test]
    fn test_visibility_margin() {
        let camera = Camera::new(64.0, (1080, 720));
        assert!(camera.is_visible((0, 0)));
        assert!(camera.is_visible((-63, 10)));
        assert!(!camera.is_visible((-65, 10)));
        assert!(!camera.is_visible((1081, 10)));
    }
}
