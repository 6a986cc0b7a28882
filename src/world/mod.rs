//! Tile grid, placed objects and the world map

pub mod enclosure;
pub mod grid;
pub mod layout;
pub mod map;
pub mod placeable;
pub mod tile;

pub use enclosure::Enclosure;
pub use grid::TileGrid;
pub use layout::{starting_layout, Layout};
pub use map::WorldMap;
pub use placeable::{PlacedObject, Prop};
pub use tile::{classify_edge, EdgeKind, Tile};
