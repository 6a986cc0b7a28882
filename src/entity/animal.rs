//! Autonomous animal agents
//!
//! Each animal runs a small idle/walk state machine: it wanders toward
//! uniformly random targets inside its enclosure's interior rectangle,
//! pauses at random, refuses moves that would bring it within collision
//! range of a neighbour, and keeps its own animation frame bookkeeping.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::sprites::AnimationKind;
use crate::core::config::SimulationConfig;
use crate::core::types::{AnimalId, Bounds, Direction, Vec2};
use crate::entity::vitals::Vitals;

/// Movement state of the wander machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    Idle,
    Walking,
}

/// Position and radius of another animal, snapshotted for collision checks
#[derive(Debug, Clone, Copy)]
pub struct Neighbor {
    pub position: Vec2,
    pub radius: f32,
}

/// An animal living inside an enclosure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub species: String,
    /// Continuous tile coordinates of the sprite's top-left corner
    pub position: Vec2,
    pub vitals: Vitals,
    pub direction: Direction,
    pub state: MotionState,
    /// Minimum centre distance to any neighbour is the sum of both radii
    pub collision_radius: f32,

    target: Vec2,
    move_timer: f32,
    move_interval: f32,
    idle_timer: f32,
    idle_duration: f32,

    animation: AnimationKind,
    animation_timer: f32,
    /// Unbounded frame counter; renderers wrap it modulo the row's frames
    pub frame: u32,
}

impl Animal {
    pub fn new(
        species: impl Into<String>,
        position: Vec2,
        config: &SimulationConfig,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        Self {
            id: AnimalId::new(),
            species: species.into(),
            position,
            vitals: Vitals::default(),
            direction: Direction::South,
            state: MotionState::Walking,
            collision_radius: config.collision_radius,
            // Target starts on the spawn point, so the first update lands
            // as an arrival and eases the animal in through a short idle.
            target: position,
            move_timer: 0.0,
            move_interval: draw(rng, config.retarget_interval_min, config.retarget_interval_max),
            idle_timer: 0.0,
            idle_duration: 0.0,
            animation: AnimationKind::Walk,
            animation_timer: 0.0,
            frame: 0,
        }
    }

    /// Animation loop currently displayed
    pub fn current_animation(&self) -> AnimationKind {
        match self.state {
            MotionState::Idle => AnimationKind::Idle,
            MotionState::Walking => AnimationKind::Walk,
        }
    }

    /// Advance the animal by one tick
    ///
    /// `bounds` is the owning enclosure's interior rectangle; `others`
    /// holds every other animal in the same enclosure.
    pub fn update(
        &mut self,
        dt: f32,
        bounds: Bounds,
        others: &[Neighbor],
        config: &SimulationConfig,
        rng: &mut ChaCha8Rng,
    ) {
        let was_starving = self.vitals.is_starving();
        self.vitals.decay(dt, config);
        if !was_starving && self.vitals.is_starving() {
            tracing::debug!(species = %self.species, "animal is starving, health draining");
        }

        self.wander(dt, bounds, others, config, rng);

        // Reset the frame counter whenever the displayed loop changes
        let current = self.current_animation();
        if current != self.animation {
            self.animation = current;
            self.frame = 0;
            self.animation_timer = 0.0;
        }

        let frame_time = match self.animation {
            AnimationKind::Idle => config.idle_frame_time,
            AnimationKind::Walk => config.walk_frame_time,
        };
        self.animation_timer += dt;
        if self.animation_timer >= frame_time {
            self.animation_timer = 0.0;
            self.frame += 1;
        }
    }

    /// Would standing at `position` overlap any neighbour?
    pub fn collides_at(&self, position: Vec2, others: &[Neighbor]) -> bool {
        others.iter().any(|other| {
            position.distance(&other.position) < self.collision_radius + other.radius
        })
    }

    fn wander(
        &mut self,
        dt: f32,
        bounds: Bounds,
        others: &[Neighbor],
        config: &SimulationConfig,
        rng: &mut ChaCha8Rng,
    ) {
        if self.state == MotionState::Idle {
            self.idle_timer += dt;
            if self.idle_timer < self.idle_duration {
                return;
            }
            // Idle over: pick a fresh target immediately and start walking
            self.state = MotionState::Walking;
            self.idle_timer = 0.0;
            self.target = sample_point(bounds, rng);
            self.move_timer = 0.0;
            self.move_interval =
                draw(rng, config.retarget_interval_min, config.retarget_interval_max);
        }

        self.move_timer += dt;
        if self.move_timer >= self.move_interval {
            self.move_timer = 0.0;
            self.move_interval =
                draw(rng, config.retarget_interval_min, config.retarget_interval_max);

            if rng.gen::<f32>() < config.idle_chance {
                self.enter_idle(rng, config.idle_duration_min, config.idle_duration_max);
                return;
            }
            self.target = sample_point(bounds, rng);
        }

        let delta = self.target - self.position;
        let distance = delta.length();

        if distance < config.arrival_epsilon {
            self.enter_idle(rng, config.arrival_idle_min, config.arrival_idle_max);
            return;
        }

        let step = delta.normalize() * (config.animal_speed * dt);
        let candidate = bounds.clamp(self.position + step);

        if self.collides_at(candidate, others) {
            // Blocked: give the neighbour room and retarget after a beat.
            // Position and facing stay untouched this tick.
            self.enter_idle(rng, config.blocked_idle_min, config.blocked_idle_max);
            return;
        }

        self.position = candidate;

        // Face the dominant movement axis; ties fall through to vertical
        if step.x.abs() > step.y.abs() {
            self.direction = if step.x > 0.0 {
                Direction::East
            } else {
                Direction::West
            };
        } else {
            self.direction = if step.y > 0.0 {
                Direction::South
            } else {
                Direction::North
            };
        }
    }

    fn enter_idle(&mut self, rng: &mut ChaCha8Rng, min: f32, max: f32) {
        self.state = MotionState::Idle;
        self.idle_timer = 0.0;
        self.idle_duration = draw(rng, min, max);
    }
}

/// Uniform draw that tolerates a collapsed range
fn draw(rng: &mut ChaCha8Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

/// Uniform random point inside the rectangle
fn sample_point(bounds: Bounds, rng: &mut ChaCha8Rng) -> Vec2 {
    Vec2::new(
        draw(rng, bounds.min.x, bounds.max.x),
        draw(rng, bounds.min.y, bounds.max.y),
    )
}
