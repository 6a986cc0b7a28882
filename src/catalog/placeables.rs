//! Registry of purchasable and placeable item definitions
//!
//! Maps item type names to footprints, prices and passive income. The
//! registry is built once at startup (compiled-in defaults, optionally
//! overridden from a TOML file) and consulted by the map, shop and economy.
//! Lookups for unknown names are soft: they return `None` and callers treat
//! that as "rejected" or "no income".

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::Result;

/// What kind of item a registry entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Lives inside an enclosure, earns income
    Animal,
    /// Placed on the grid, may earn income
    Prop,
    /// Zero-income prop used by the procedural scatter
    Decoration,
}

/// A single item definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub name: String,
    pub category: ItemCategory,
    /// Footprint in tiles; animals occupy no grid tiles and use (0, 0)
    #[serde(default)]
    pub footprint: (u32, u32),
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub income_per_second: f64,
}

/// Document shape for TOML registry files
#[derive(Debug, Deserialize)]
struct RegistryDoc {
    #[serde(default)]
    item: Vec<ItemDef>,
}

/// Registry of every known item, indexed by name
#[derive(Debug, Clone)]
pub struct PlaceableRegistry {
    items: AHashMap<String, ItemDef>,
}

impl PlaceableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            items: AHashMap::new(),
        }
    }

    /// Registry with the built-in item set
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for def in builtin_items() {
            registry.register(def);
        }
        registry
    }

    /// Load item definitions from a TOML file on top of the built-ins
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let doc: RegistryDoc = toml::from_str(&text)?;
        let mut registry = Self::builtin();
        for def in doc.item {
            registry.register(def);
        }
        Ok(registry)
    }

    /// Register (or replace) an item definition
    pub fn register(&mut self, def: ItemDef) {
        self.items.insert(def.name.clone(), def);
    }

    pub fn get(&self, name: &str) -> Option<&ItemDef> {
        self.items.get(name)
    }

    /// Footprint in tiles; `None` for unknown names (placement-rejected)
    pub fn footprint(&self, name: &str) -> Option<(u32, u32)> {
        self.items.get(name).map(|def| def.footprint)
    }

    pub fn price(&self, name: &str) -> Option<u32> {
        self.items.get(name).map(|def| def.price)
    }

    /// Passive income per second; unknown names earn nothing
    pub fn income_per_second(&self, name: &str) -> f64 {
        self.items
            .get(name)
            .map(|def| def.income_per_second)
            .unwrap_or(0.0)
    }

    pub fn is_animal(&self, name: &str) -> bool {
        matches!(
            self.items.get(name),
            Some(ItemDef { category: ItemCategory::Animal, .. })
        )
    }

    /// Names of every decoration, sorted for deterministic scatter pools
    pub fn decoration_pool(&self) -> Vec<String> {
        let mut pool: Vec<String> = self
            .items
            .values()
            .filter(|def| def.category == ItemCategory::Decoration)
            .map(|def| def.name.clone())
            .collect();
        pool.sort();
        pool
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for PlaceableRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_items() -> Vec<ItemDef> {
    vec![
        ItemDef {
            name: "sheep".into(),
            category: ItemCategory::Animal,
            footprint: (0, 0),
            price: 100,
            income_per_second: 2.0,
        },
        ItemDef {
            name: "rooster".into(),
            category: ItemCategory::Animal,
            footprint: (0, 0),
            price: 80,
            income_per_second: 1.5,
        },
        ItemDef {
            name: "well".into(),
            category: ItemCategory::Prop,
            footprint: (1, 1),
            price: 50,
            income_per_second: 0.5,
        },
        ItemDef {
            name: "bush".into(),
            category: ItemCategory::Decoration,
            footprint: (1, 1),
            price: 0,
            income_per_second: 0.0,
        },
        ItemDef {
            name: "rock".into(),
            category: ItemCategory::Decoration,
            footprint: (1, 1),
            price: 0,
            income_per_second: 0.0,
        },
        ItemDef {
            name: "tree".into(),
            category: ItemCategory::Decoration,
            footprint: (2, 2),
            price: 0,
            income_per_second: 0.0,
        },
    ]
}
