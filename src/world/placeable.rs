//! Placed props and the tagged occupant view

use serde::{Deserialize, Serialize};

use crate::core::types::PlaceableId;
use crate::world::enclosure::Enclosure;

/// A decorative or income-earning object occupying grid tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prop {
    pub id: PlaceableId,
    pub name: String,
    pub x: i32,
    pub y: i32,
    /// Footprint in tiles, resolved from the registry at placement time
    pub width: u32,
    pub height: u32,
}

impl Prop {
    pub fn covers(&self, tx: i32, ty: i32) -> bool {
        tx >= self.x
            && tx < self.x + self.width as i32
            && ty >= self.y
            && ty < self.y + self.height as i32
    }
}

/// What a tile's occupant id resolves to
///
/// The grid stores bare ids; this view restores the object so callers
/// (bulldozer, renderer) can branch on the kind without downcasting.
#[derive(Debug, Clone, Copy)]
pub enum PlacedObject<'a> {
    Prop(&'a Prop),
    Enclosure(&'a Enclosure),
}

impl<'a> PlacedObject<'a> {
    pub fn id(&self) -> PlaceableId {
        match self {
            PlacedObject::Prop(prop) => prop.id,
            PlacedObject::Enclosure(enclosure) => enclosure.id,
        }
    }

    pub fn origin(&self) -> (i32, i32) {
        match self {
            PlacedObject::Prop(prop) => (prop.x, prop.y),
            PlacedObject::Enclosure(enclosure) => (enclosure.x, enclosure.y),
        }
    }

    pub fn footprint(&self) -> (u32, u32) {
        match self {
            PlacedObject::Prop(prop) => (prop.width, prop.height),
            PlacedObject::Enclosure(enclosure) => (enclosure.width, enclosure.height),
        }
    }

    pub fn is_enclosure(&self) -> bool {
        matches!(self, PlacedObject::Enclosure(_))
    }
}
