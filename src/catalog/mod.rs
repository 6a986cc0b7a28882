//! Item and sprite configuration tables

pub mod placeables;
pub mod sprites;

pub use placeables::{ItemCategory, ItemDef, PlaceableRegistry};
pub use sprites::{AnimRow, AnimationKind, SpeciesSprites, SpriteTable};
