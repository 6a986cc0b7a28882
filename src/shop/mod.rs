//! Shop and bulldozer flows
//!
//! The shop is the gatekeeper in front of the trusted-caller map
//! operations: it checks affordability and grid legality, then mutates.
//! Failures come back as typed errors the HUD turns into a readable
//! reason; the map itself never re-checks money.

use rand::Rng;
use thiserror::Error;

use crate::core::types::{AnimalId, PlaceableId, Vec2};
use crate::entity::animal::Animal;
use crate::game::GameState;
use crate::simulation::economy::Economy;
use crate::world::enclosure::Enclosure;
use crate::world::placeable::PlacedObject;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShopError {
    #[error("'{0}' is not for sale")]
    UnknownItem(String),

    #[error("cannot place there")]
    InvalidPlacement,

    #[error("enclosures must be at least {0}x{0} tiles")]
    EnclosureTooSmall(u32),

    #[error("that enclosure is full")]
    EnclosureFull,

    #[error("no such enclosure")]
    NoSuchEnclosure,

    #[error("'{0}' is not an animal")]
    NotAnAnimal(String),

    #[error("not enough money: need {needed:.0}, have {available:.0}")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("nothing to demolish there")]
    NothingThere,
}

pub type ShopResult<T> = Result<T, ShopError>;

fn charge(state: &mut GameState, cost: f64) -> ShopResult<()> {
    if !state.economy.spend(cost) {
        return Err(ShopError::InsufficientFunds {
            needed: cost,
            available: state.economy.money,
        });
    }
    Ok(())
}

/// Buy and place a prop at (x, y)
pub fn buy_prop(state: &mut GameState, name: &str, x: i32, y: i32) -> ShopResult<PlaceableId> {
    let Some((width, height)) = state.registry.footprint(name) else {
        return Err(ShopError::UnknownItem(name.to_string()));
    };
    if state.registry.is_animal(name) {
        return Err(ShopError::InvalidPlacement);
    }
    if !state.map.can_place_footprint(x, y, width, height) {
        return Err(ShopError::InvalidPlacement);
    }

    let price = state.registry.price(name).unwrap_or(0) as f64;
    charge(state, price)?;

    // Footprint was validated above; the map trusts us here
    let id = state
        .map
        .create_prop(name, x, y, &state.registry)
        .ok_or_else(|| ShopError::UnknownItem(name.to_string()))?;
    tracing::info!(name, x, y, price, "prop placed");
    Ok(id)
}

/// Buy and place an enclosure; price scales with covered area
pub fn buy_enclosure(
    state: &mut GameState,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) -> ShopResult<PlaceableId> {
    if width < Enclosure::MIN_SIDE || height < Enclosure::MIN_SIDE {
        return Err(ShopError::EnclosureTooSmall(Enclosure::MIN_SIDE));
    }
    if !state.map.can_place_footprint(x, y, width, height) {
        return Err(ShopError::InvalidPlacement);
    }

    let price = (state.config.enclosure_price_per_tile * width * height) as f64;
    charge(state, price)?;

    let id = state.map.create_enclosure(x, y, width, height, &state.config);
    tracing::info!(x, y, width, height, price, "enclosure built");
    Ok(id)
}

/// Buy an animal and drop it into an enclosure at a random interior spot
pub fn buy_animal(
    state: &mut GameState,
    species: &str,
    enclosure_id: PlaceableId,
) -> ShopResult<AnimalId> {
    if state.registry.get(species).is_none() {
        return Err(ShopError::UnknownItem(species.to_string()));
    }
    if !state.registry.is_animal(species) {
        return Err(ShopError::NotAnAnimal(species.to_string()));
    }

    let bounds = {
        let Some(enclosure) = state.map.enclosure(enclosure_id) else {
            return Err(ShopError::NoSuchEnclosure);
        };
        if enclosure.animals().len() >= enclosure.max_animals {
            return Err(ShopError::EnclosureFull);
        }
        enclosure.interior_bounds(&state.config)
    };

    let price = state.registry.price(species).unwrap_or(0) as f64;
    charge(state, price)?;

    let position = Vec2::new(
        sample(&mut state.rng, bounds.min.x, bounds.max.x),
        sample(&mut state.rng, bounds.min.y, bounds.max.y),
    );
    let animal = Animal::new(species, position, &state.config, &mut state.rng);
    let animal_id = animal.id;
    if let Some(enclosure) = state.map.enclosure_mut(enclosure_id) {
        enclosure.add_animal(animal);
    }

    tracing::info!(species, ?enclosure_id, price, "animal purchased");
    Ok(animal_id)
}

/// Demolish whatever occupies the tile at (x, y)
///
/// Charges the demolition fee (a capped window of the object's income)
/// and returns it. Demolishing an enclosure discards its animals.
pub fn bulldoze(state: &mut GameState, x: i32, y: i32) -> ShopResult<f64> {
    let Some(object) = state.map.placed_object_at(x, y) else {
        return Err(ShopError::NothingThere);
    };
    let id = object.id();
    let is_enclosure = object.is_enclosure();

    let income = match object {
        PlacedObject::Prop(prop) => state.registry.income_per_second(&prop.name),
        PlacedObject::Enclosure(enclosure) => enclosure
            .animals()
            .iter()
            .map(|animal| state.registry.income_per_second(&animal.species))
            .sum(),
    };
    let fee = Economy::bulldoze_fee(income, &state.config);
    charge(state, fee)?;

    if is_enclosure {
        state.map.remove_enclosure(id);
    } else {
        state.map.remove_prop(id);
    }
    tracing::info!(x, y, fee, "demolished");
    Ok(fee)
}

fn sample(rng: &mut rand_chacha::ChaCha8Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::placeables::PlaceableRegistry;
    use crate::core::config::SimulationConfig;
    use crate::game::GameState;
    use crate::world::layout::Layout;

    /// Session over an empty 30x30 map, no scatter noise
    fn empty_state() -> GameState {
        let layout = Layout {
            version: 1,
            name: None,
            props: vec![],
            enclosures: vec![],
        };
        GameState::with_layout(
            1,
            (30, 30),
            SimulationConfig::default(),
            PlaceableRegistry::builtin(),
            &layout,
        )
        .unwrap()
    }

    #[test]
    fn test_buy_prop_deducts_and_places() {
        let mut state = empty_state();
        let before = state.economy.money;

        let id = buy_prop(&mut state, "well", 3, 3).unwrap();
        assert_eq!(state.economy.money, before - 50.0);
        assert_eq!(state.map.get_tile(3, 3).unwrap().occupant, Some(id));
    }

    #[test]
    fn test_buy_prop_unknown() {
        let mut state = empty_state();
        assert_eq!(
            buy_prop(&mut state, "griffin", 3, 3),
            Err(ShopError::UnknownItem("griffin".into()))
        );
    }

    #[test]
    fn test_buy_prop_overlap_rejected_before_charge() {
        let mut state = empty_state();
        buy_prop(&mut state, "well", 3, 3).unwrap();
        let money = state.economy.money;

        assert_eq!(
            buy_prop(&mut state, "well", 3, 3),
            Err(ShopError::InvalidPlacement)
        );
        assert_eq!(state.economy.money, money);
    }

    #[test]
    fn test_buy_enclosure_and_animal() {
        let mut state = empty_state();
        let id = buy_enclosure(&mut state, 5, 5, 5, 5).unwrap();
        // 5 * 5 * 5 per tile = 125
        assert_eq!(state.economy.money, 500.0 - 125.0);

        let animal = buy_animal(&mut state, "sheep", id).unwrap();
        let enclosure = state.map.enclosure(id).unwrap();
        assert_eq!(enclosure.animals().len(), 1);
        assert_eq!(enclosure.animals()[0].id, animal);

        let bounds = enclosure.interior_bounds(&state.config);
        assert!(bounds.contains(enclosure.animals()[0].position));
    }

    #[test]
    fn test_buy_animal_capacity() {
        let mut state = empty_state();
        state.economy.money = 10_000.0;
        let id = buy_enclosure(&mut state, 5, 5, 5, 5).unwrap();

        for _ in 0..4 {
            buy_animal(&mut state, "sheep", id).unwrap();
        }
        let money = state.economy.money;
        assert_eq!(buy_animal(&mut state, "sheep", id), Err(ShopError::EnclosureFull));
        // Rejected before charging
        assert_eq!(state.economy.money, money);
    }

    #[test]
    fn test_buy_animal_rejects_prop_name() {
        let mut state = empty_state();
        let id = buy_enclosure(&mut state, 5, 5, 5, 5).unwrap();
        assert_eq!(
            buy_animal(&mut state, "well", id),
            Err(ShopError::NotAnAnimal("well".into()))
        );
    }

    #[test]
    fn test_enclosure_too_small() {
        let mut state = empty_state();
        assert_eq!(
            buy_enclosure(&mut state, 5, 5, 2, 5),
            Err(ShopError::EnclosureTooSmall(3))
        );
    }

    #[test]
    fn test_insufficient_funds() {
        let mut state = empty_state();
        state.economy.money = 10.0;
        let result = buy_prop(&mut state, "well", 3, 3);
        assert!(matches!(result, Err(ShopError::InsufficientFunds { .. })));
        // Nothing placed
        assert!(state.map.get_tile(3, 3).unwrap().occupant.is_none());
    }

    #[test]
    fn test_bulldoze_prop_charges_fee() {
        let mut state = empty_state();
        buy_prop(&mut state, "well", 3, 3).unwrap();
        let money = state.economy.money;

        // well earns 0.5/s -> fee 15, under the cap
        let fee = bulldoze(&mut state, 3, 3).unwrap();
        assert!((fee - 15.0).abs() < 1e-9);
        assert!((state.economy.money - (money - 15.0)).abs() < 1e-9);
        assert!(state.map.get_tile(3, 3).unwrap().occupant.is_none());
    }

    #[test]
    fn test_bulldoze_enclosure_fee_capped() {
        let mut state = empty_state();
        state.economy.money = 10_000.0;
        let id = buy_enclosure(&mut state, 5, 5, 5, 5).unwrap();
        for _ in 0..4 {
            buy_animal(&mut state, "sheep", id).unwrap();
        }

        // 4 sheep * 2.0/s * 30 s = 240, capped at 50
        let fee = bulldoze(&mut state, 7, 7).unwrap();
        assert!((fee - 50.0).abs() < 1e-9);
        assert!(state.map.enclosures().is_empty());
    }

    #[test]
    fn test_bulldoze_empty_tile() {
        let mut state = empty_state();
        assert_eq!(bulldoze(&mut state, 3, 3), Err(ShopError::NothingThere));
    }
}
