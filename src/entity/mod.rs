//! Animal agents and their stats

pub mod animal;
pub mod vitals;

pub use animal::{Animal, MotionState, Neighbor};
pub use vitals::Vitals;
