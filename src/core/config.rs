//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other. The config is built once at startup
//! and passed by reference into the systems that need it.

/// Configuration for the simulation systems
///
/// These values have been tuned to produce good pacing for small pens.
/// Changing them will affect how lively enclosures feel.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    // === ANIMAL STEERING ===
    /// Walking speed in tiles per second
    pub animal_speed: f32,

    /// Collision radius per animal, in tiles
    ///
    /// Two default animals may never be closer than twice this value
    /// center to center. A move that would violate it is rejected outright.
    pub collision_radius: f32,

    /// Distance to target below which the animal counts as arrived
    pub arrival_epsilon: f32,

    /// Bounds of the random interval between retarget decisions (seconds)
    pub retarget_interval_min: f32,
    pub retarget_interval_max: f32,

    /// Probability of entering idle instead of retargeting
    pub idle_chance: f32,

    /// Idle duration drawn when the retarget roll chooses to rest (seconds)
    pub idle_duration_min: f32,
    pub idle_duration_max: f32,

    /// Shorter idle drawn after arriving at a target (seconds)
    pub arrival_idle_min: f32,
    pub arrival_idle_max: f32,

    /// Shortest idle, drawn after a rejected (colliding) move (seconds)
    pub blocked_idle_min: f32,
    pub blocked_idle_max: f32,

    // === ANIMATION ===
    /// Seconds per frame while walking
    pub walk_frame_time: f32,

    /// Seconds per frame while idle (slower, calmer loop)
    pub idle_frame_time: f32,

    // === VITALS ===
    /// Hunger lost per second
    pub hunger_decay: f32,

    /// Thirst lost per second
    pub thirst_decay: f32,

    /// Happiness lost per second (half the hunger rate, so mood
    /// outlasts food as a pressure on the player)
    pub happiness_decay: f32,

    /// Health lost per second while hunger or thirst sits at zero
    pub health_decay: f32,

    // === ENCLOSURES ===
    /// Interior tiles required per animal of capacity
    ///
    /// A w x h enclosure holds (w-1)*(h-1) / tiles_per_animal animals.
    pub tiles_per_animal: u32,

    /// Sprite extent in tiles, subtracted from the far interior bound
    ///
    /// Positions anchor the sprite's top-left corner, so the roaming
    /// rectangle must end one sprite short of the fence.
    pub sprite_extent: f32,

    /// Extra inset when fence art is thinner than a full tile
    /// (fraction of a tile, applied to all four sides)
    pub fence_inset: f32,

    // === ECONOMY ===
    /// Currency at the start of a session
    pub starting_money: f64,

    /// Enclosure price per covered tile
    pub enclosure_price_per_tile: u32,

    /// Seconds of an object's income charged as its demolition fee
    pub bulldoze_income_window: f64,

    /// Upper bound on any demolition fee
    pub bulldoze_fee_cap: f64,

    // === DECORATION SCATTER ===
    /// Rejection-sampling attempts allowed per requested decoration
    ///
    /// Bounds the placement loop on a crowded map; the scatter is
    /// best-effort and may place fewer than requested.
    pub scatter_attempts_per_item: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            // Steering
            animal_speed: 0.8,
            collision_radius: 0.4,
            arrival_epsilon: 0.1,
            retarget_interval_min: 1.5,
            retarget_interval_max: 3.0,
            idle_chance: 0.3,
            idle_duration_min: 2.0,
            idle_duration_max: 4.0,
            arrival_idle_min: 1.0,
            arrival_idle_max: 2.5,
            blocked_idle_min: 0.5,
            blocked_idle_max: 1.5,

            // Animation
            walk_frame_time: 0.12,
            idle_frame_time: 0.25,

            // Vitals
            hunger_decay: 0.1,
            thirst_decay: 0.1,
            happiness_decay: 0.05,
            health_decay: 0.2,

            // Enclosures
            tiles_per_animal: 4,
            sprite_extent: 1.0,
            fence_inset: 0.0,

            // Economy
            starting_money: 500.0,
            enclosure_price_per_tile: 5,
            bulldoze_income_window: 30.0,
            bulldoze_fee_cap: 50.0,

            // Scatter
            scatter_attempts_per_item: 25,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.animal_speed <= 0.0 {
            return Err("animal_speed must be positive".into());
        }

        if self.collision_radius < 0.0 {
            return Err("collision_radius must not be negative".into());
        }

        if self.arrival_epsilon <= 0.0 {
            return Err("arrival_epsilon must be positive".into());
        }

        if !(0.0..=1.0).contains(&self.idle_chance) {
            return Err(format!(
                "idle_chance ({}) must lie in [0, 1]",
                self.idle_chance
            ));
        }

        // Every (min, max) pair must be ordered for the uniform draws
        let ranges = [
            ("retarget_interval", self.retarget_interval_min, self.retarget_interval_max),
            ("idle_duration", self.idle_duration_min, self.idle_duration_max),
            ("arrival_idle", self.arrival_idle_min, self.arrival_idle_max),
            ("blocked_idle", self.blocked_idle_min, self.blocked_idle_max),
        ];
        for (name, min, max) in ranges {
            if min <= 0.0 || max < min {
                return Err(format!("{name} range ({min}, {max}) is not ordered"));
            }
        }

        if self.tiles_per_animal == 0 {
            return Err("tiles_per_animal must be at least 1".into());
        }

        if self.fence_inset < 0.0 || self.fence_inset >= 0.5 {
            return Err(format!(
                "fence_inset ({}) must lie in [0, 0.5)",
                self.fence_inset
            ));
        }

        Ok(())
    }
}
