//! Passive income and the player's wallet

use serde::{Deserialize, Serialize};

use crate::catalog::placeables::PlaceableRegistry;
use crate::core::config::SimulationConfig;
use crate::world::map::WorldMap;

/// The player's money and the income rate derived from the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Economy {
    pub money: f64,
    /// Income rate computed by the last `accrue` call
    pub income_per_second: f64,
}

impl Economy {
    pub fn new(starting_money: f64) -> Self {
        Self {
            money: starting_money,
            income_per_second: 0.0,
        }
    }

    /// Income rate of everything currently placed
    ///
    /// Every animal earns its species income and every prop its type
    /// income; names the registry does not know contribute nothing.
    pub fn derive_income(map: &WorldMap, registry: &PlaceableRegistry) -> f64 {
        let mut total = 0.0;

        for enclosure in map.enclosures() {
            for animal in enclosure.animals() {
                total += registry.income_per_second(&animal.species);
            }
        }
        for prop in map.props() {
            total += registry.income_per_second(&prop.name);
        }
        total
    }

    /// Recompute the income rate and add the elapsed slice to the wallet
    pub fn accrue(&mut self, map: &WorldMap, registry: &PlaceableRegistry, dt: f64) {
        self.income_per_second = Self::derive_income(map, registry);
        self.money += self.income_per_second * dt;
    }

    pub fn can_afford(&self, cost: f64) -> bool {
        self.money >= cost
    }

    /// Deduct `cost`; returns false (wallet unchanged) when unaffordable
    pub fn spend(&mut self, cost: f64) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.money -= cost;
        true
    }

    /// Demolition fee for an object: a fixed window of its income, capped
    pub fn bulldoze_fee(income_per_second: f64, config: &SimulationConfig) -> f64 {
        (income_per_second * config.bulldoze_income_window).min(config.bulldoze_fee_cap)
    }
}
