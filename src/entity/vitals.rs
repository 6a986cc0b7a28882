//! Bounded animal stats and their decay

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;

/// Care stats shared by all species, each bounded to [0, 100]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vitals {
    /// 100 = fed, 0 = starving
    pub hunger: f32,
    /// 100 = watered, 0 = dehydrated
    pub thirst: f32,
    /// 100 = content, 0 = miserable
    pub happiness: f32,
    /// 100 = healthy, 0 = dying
    pub health: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            hunger: 100.0,
            thirst: 100.0,
            happiness: 100.0,
            health: 100.0,
        }
    }
}

impl Vitals {
    /// Decay stats over elapsed time (called every tick, in any state)
    ///
    /// Health only drains while hunger or thirst sits at zero.
    pub fn decay(&mut self, dt: f32, config: &SimulationConfig) {
        self.hunger = (self.hunger - config.hunger_decay * dt).max(0.0);
        self.thirst = (self.thirst - config.thirst_decay * dt).max(0.0);
        self.happiness = (self.happiness - config.happiness_decay * dt).max(0.0);

        if self.hunger <= 0.0 || self.thirst <= 0.0 {
            self.health = (self.health - config.health_decay * dt).max(0.0);
        }
    }

    /// Increase hunger by the given amount (capped at 100)
    pub fn feed(&mut self, amount: f32) {
        self.hunger = (self.hunger + amount).min(100.0);
    }

    /// Increase thirst by the given amount (capped at 100)
    pub fn give_water(&mut self, amount: f32) {
        self.thirst = (self.thirst + amount).min(100.0);
    }

    /// Increase happiness by the given amount (capped at 100)
    pub fn play(&mut self, amount: f32) {
        self.happiness = (self.happiness + amount).min(100.0);
    }

    /// Increase health by the given amount (capped at 100)
    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(100.0);
    }

    /// True once starvation or dehydration is draining health
    pub fn is_starving(&self) -> bool {
        self.hunger <= 0.0 || self.thirst <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decay_rates() {
        let config = SimulationConfig::default();
        let mut vitals = Vitals::default();
        vitals.decay(10.0, &config);

        assert!((vitals.hunger - 99.0).abs() < 1e-4);
        assert!((vitals.thirst - 99.0).abs() < 1e-4);
        assert!((vitals.happiness - 99.5).abs() < 1e-4);
        // Not starving yet, health untouched
        assert_eq!(vitals.health, 100.0);
    }

    #[test]
    fn test_health_drains_while_starving() {
        let config = SimulationConfig::default();
        let mut vitals = Vitals {
            hunger: 0.0,
            ..Default::default()
        };
        vitals.decay(5.0, &config);
        assert!((vitals.health - 99.0).abs() < 1e-4);
    }

    #[test]
    fn test_feed_caps_at_100() {
        let mut vitals = Vitals {
            hunger: 95.0,
            ..Default::default()
        };
        vitals.feed(1000.0);
        assert_eq!(vitals.hunger, 100.0);
    }

    #[test]
    fn test_decay_floors_at_zero() {
        let config = SimulationConfig::default();
        let mut vitals = Vitals {
            hunger: 0.0,
            thirst: 0.0,
            happiness: 0.0,
            health: 0.5,
        };
        vitals.decay(100.0, &config);
        assert_eq!(vitals.hunger, 0.0);
        assert_eq!(vitals.thirst, 0.0);
        assert_eq!(vitals.happiness, 0.0);
        assert_eq!(vitals.health, 0.0);
    }

    proptest! {
        /// Any sequence of decay and care keeps every stat inside [0, 100]
        #[test]
        fn prop_stats_stay_bounded(
            dt in 0.0f32..1000.0,
            feed in 0.0f32..10_000.0,
            water in 0.0f32..10_000.0,
            play in 0.0f32..10_000.0,
            heal in 0.0f32..10_000.0,
        ) {
            let config = SimulationConfig::default();
            let mut vitals = Vitals::default();

            vitals.decay(dt, &config);
            vitals.feed(feed);
            vitals.give_water(water);
            vitals.play(play);
            vitals.heal(heal);
            vitals.decay(dt, &config);

            for stat in [vitals.hunger, vitals.thirst, vitals.happiness, vitals.health] {
                prop_assert!((0.0..=100.0).contains(&stat));
            }
        }
    }
}
