//! Game session state and wiring

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::placeables::PlaceableRegistry;
use crate::catalog::sprites::SpriteTable;
use crate::core::config::SimulationConfig;
use crate::core::error::{PaddockError, Result};
use crate::core::types::{Tick, Vec2};
use crate::simulation::economy::Economy;
use crate::ui::camera::Camera;
use crate::ui::player::Player;
use crate::world::layout::{starting_layout, Layout};
use crate::world::map::WorldMap;

/// Screen pixels per tile
pub const TILE_SIZE: f32 = 64.0;

/// Default window resolution
pub const DEFAULT_VIEWPORT: (u32, u32) = (1080, 720);

/// Default map dimensions in tiles
pub const DEFAULT_MAP_SIZE: (u32, u32) = (70, 50);

/// Everything one running session owns
#[derive(Debug)]
pub struct GameState {
    pub config: SimulationConfig,
    pub registry: PlaceableRegistry,
    pub sprites: SpriteTable,
    pub map: WorldMap,
    pub economy: Economy,
    pub player: Player,
    pub camera: Camera,
    pub rng: ChaCha8Rng,
    pub tick: Tick,
}

impl GameState {
    /// Start a fresh session
    ///
    /// Validates the config and sprite tables up front (a bad sprite table
    /// leaves the game unplayable, so it aborts here rather than at render
    /// time), rolls the ground, applies the starting layout and scatters
    /// decorations.
    pub fn new_session(
        seed: u64,
        map_size: (u32, u32),
        config: SimulationConfig,
        registry: PlaceableRegistry,
    ) -> Result<Self> {
        config.validate().map_err(PaddockError::InvalidConfig)?;
        let sprites = SpriteTable::builtin();
        sprites.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut map = WorldMap::new(map_size.0, map_size.1);
        map.generate_ground(&mut rng);

        starting_layout().apply(&mut map, &registry, &config, &mut rng);

        let pool = registry.decoration_pool();
        map.scatter_decorations(10, 20, &pool, &registry, &config, &mut rng);

        let economy = Economy::new(config.starting_money);
        let player = Player::new(
            Vec2::new(map_size.0 as f32 / 2.0, map_size.1 as f32 / 2.0),
            2.0,
        );
        let mut camera = Camera::new(TILE_SIZE, DEFAULT_VIEWPORT);
        camera.follow(player.position);

        tracing::info!(seed, width = map_size.0, height = map_size.1, "session started");

        Ok(Self {
            config,
            registry,
            sprites,
            map,
            economy,
            player,
            camera,
            rng,
            tick: 0,
        })
    }

    /// Start a session from an explicit layout instead of the default
    pub fn with_layout(
        seed: u64,
        map_size: (u32, u32),
        config: SimulationConfig,
        registry: PlaceableRegistry,
        layout: &Layout,
    ) -> Result<Self> {
        let mut state = Self::new_session(seed, map_size, config, registry)?;
        state.map = WorldMap::new(map_size.0, map_size.1);
        state.map.generate_ground(&mut state.rng);
        layout.apply(&mut state.map, &state.registry, &state.config, &mut state.rng);
        Ok(state)
    }

    /// Total animals across every enclosure
    pub fn animal_count(&self) -> usize {
        self.map
            .enclosures()
            .iter()
            .map(|enclosure| enclosure.animals().len())
            .sum()
    }
}
