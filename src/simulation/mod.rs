//! Per-frame simulation systems

pub mod economy;
pub mod tick;

pub use economy::Economy;
pub use tick::run_tick;
