//! Tick system - orchestrates per-frame updates
//!
//! One tick runs to completion before the next begins: economy accrual,
//! then every enclosure's animals, then the camera. Rendering reads the
//! state afterward with no intervening mutation, so nothing here needs
//! synchronization.

use crate::game::GameState;

/// Advance the whole session by one frame's time slice
pub fn run_tick(state: &mut GameState, dt: f32) {
    state.economy.accrue(&state.map, &state.registry, dt as f64);

    state
        .map
        .update_animals(dt, &state.config, &mut state.rng);

    state.camera.follow(state.player.position);

    state.tick += 1;

    if state.tick % 600 == 0 {
        tracing::debug!(
            tick = state.tick,
            money = state.economy.money,
            income = state.economy.income_per_second,
            animals = state.animal_count(),
            "simulation heartbeat"
        );
    }
}
