//! Starting-layout documents
//!
//! A layout describes the props, enclosures and animals a fresh session
//! opens with. The shape is serde-friendly JSON so scenarios can be shipped
//! as data; `starting_layout()` is the compiled-in default. Applying a
//! layout runs the same validation the shop would, so a malformed document
//! degrades to skipped entries rather than corrupt occupancy.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::placeables::PlaceableRegistry;
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::Vec2;
use crate::entity::animal::Animal;
use crate::world::enclosure::Enclosure;
use crate::world::map::WorldMap;

/// Root structure for layout documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    /// Schema version (currently 1)
    pub version: u32,
    /// Optional human-readable name for this scenario
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub props: Vec<PropSpawn>,
    #[serde(default)]
    pub enclosures: Vec<EnclosureSpawn>,
}

/// A prop to place at session start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropSpawn {
    pub name: String,
    pub position: [i32; 2],
}

/// An enclosure with its initial animals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnclosureSpawn {
    pub position: [i32; 2],
    pub size: [u32; 2],
    #[serde(default)]
    pub animals: Vec<AnimalSpawn>,
}

/// An animal dropped into its enclosure at session start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalSpawn {
    pub species: String,
    pub position: [f32; 2],
}

impl Layout {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply this layout onto a map
    ///
    /// Entries that fail placement validation or overflow capacity are
    /// skipped with a warning; animal spawn positions clamp into their
    /// enclosure's interior. Returns how many objects were placed.
    pub fn apply(
        &self,
        map: &mut WorldMap,
        registry: &PlaceableRegistry,
        config: &SimulationConfig,
        rng: &mut ChaCha8Rng,
    ) -> usize {
        let mut placed = 0;

        for spawn in &self.props {
            let [x, y] = spawn.position;
            let Some((width, height)) = registry.footprint(&spawn.name) else {
                tracing::warn!(name = %spawn.name, "layout prop unknown to registry, skipped");
                continue;
            };
            if !map.can_place_footprint(x, y, width, height) {
                tracing::warn!(name = %spawn.name, x, y, "layout prop does not fit, skipped");
                continue;
            }
            map.create_prop(&spawn.name, x, y, registry);
            placed += 1;
        }

        for spawn in &self.enclosures {
            let [x, y] = spawn.position;
            let [width, height] = spawn.size;
            if width < Enclosure::MIN_SIDE || height < Enclosure::MIN_SIDE {
                tracing::warn!(x, y, width, height, "layout enclosure too small, skipped");
                continue;
            }
            if !map.can_place_footprint(x, y, width, height) {
                tracing::warn!(x, y, "layout enclosure does not fit, skipped");
                continue;
            }

            let id = map.create_enclosure(x, y, width, height, config);
            placed += 1;

            let Some(enclosure) = map.enclosure_mut(id) else {
                continue;
            };
            let bounds = enclosure.interior_bounds(config);
            for animal_spawn in &spawn.animals {
                let position = bounds.clamp(Vec2::new(
                    animal_spawn.position[0],
                    animal_spawn.position[1],
                ));
                let animal = Animal::new(animal_spawn.species.as_str(), position, config, rng);
                if !enclosure.add_animal(animal) {
                    tracing::warn!(
                        species = %animal_spawn.species,
                        "layout animal exceeds enclosure capacity, skipped"
                    );
                }
            }
        }

        placed
    }
}

/// The default opening scenario: a well, a sheep pen and a rooster pen
pub fn starting_layout() -> Layout {
    Layout {
        version: 1,
        name: Some("meadow".into()),
        props: vec![PropSpawn {
            name: "well".into(),
            position: [0, 0],
        }],
        enclosures: vec![
            EnclosureSpawn {
                position: [5, 5],
                size: [5, 5],
                animals: vec![
                    AnimalSpawn { species: "sheep".into(), position: [6.5, 6.5] },
                    AnimalSpawn { species: "sheep".into(), position: [7.5, 7.5] },
                    AnimalSpawn { species: "sheep".into(), position: [8.0, 6.0] },
                ],
            },
            EnclosureSpawn {
                position: [15, 10],
                size: [5, 6],
                animals: vec![
                    AnimalSpawn { species: "rooster".into(), position: [16.5, 12.5] },
                    AnimalSpawn { species: "rooster".into(), position: [18.0, 13.0] },
                    AnimalSpawn { species: "rooster".into(), position: [17.0, 14.0] },
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const SAMPLE_JSON: &str = r#"{
        "version": 1,
        "name": "test ranch",
        "props": [
            { "name": "well", "position": [2, 3] }
        ],
        "enclosures": [
            {
                "position": [10, 10],
                "size": [5, 5],
                "animals": [
                    { "species": "sheep", "position": [11.5, 11.5] }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_deserialize_layout() {
        let layout = Layout::from_json(SAMPLE_JSON).unwrap();
        assert_eq!(layout.version, 1);
        assert_eq!(layout.name.as_deref(), Some("test ranch"));
        assert_eq!(layout.props.len(), 1);
        assert_eq!(layout.enclosures.len(), 1);
        assert_eq!(layout.enclosures[0].animals[0].species, "sheep");
    }

    #[test]
    fn test_layout_roundtrip() {
        let layout = starting_layout();
        let json = layout.to_json().unwrap();
        let back = Layout::from_json(&json).unwrap();
        assert_eq!(back.enclosures.len(), 2);
        assert_eq!(back.enclosures[0].animals.len(), 3);
    }

    #[test]
    fn test_apply_sample() {
        let layout = Layout::from_json(SAMPLE_JSON).unwrap();
        let mut map = WorldMap::new(30, 30);
        let registry = PlaceableRegistry::builtin();
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let placed = layout.apply(&mut map, &registry, &config, &mut rng);
        assert_eq!(placed, 2);
        assert_eq!(map.props().len(), 1);
        assert_eq!(map.enclosures().len(), 1);
        assert_eq!(map.enclosures()[0].animals().len(), 1);
    }

    #[test]
    fn test_apply_starting_layout() {
        let mut map = WorldMap::new(70, 50);
        let registry = PlaceableRegistry::builtin();
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        starting_layout().apply(&mut map, &registry, &config, &mut rng);
        assert_eq!(map.props().len(), 1);
        assert_eq!(map.enclosures().len(), 2);
        assert_eq!(map.enclosures()[0].animals().len(), 3);
        assert_eq!(map.enclosures()[1].animals().len(), 3);

        // Spawn positions stay inside each interior
        for enclosure in map.enclosures() {
            let bounds = enclosure.interior_bounds(&config);
            for animal in enclosure.animals() {
                assert!(bounds.contains(animal.position));
            }
        }
    }

    #[test]
    fn test_apply_skips_bad_entries() {
        let layout = Layout {
            version: 1,
            name: None,
            props: vec![PropSpawn { name: "griffin".into(), position: [1, 1] }],
            enclosures: vec![EnclosureSpawn {
                position: [28, 28],
                size: [5, 5], // hangs off the 30x30 map
                animals: vec![],
            }],
        };
        let mut map = WorldMap::new(30, 30);
        let registry = PlaceableRegistry::builtin();
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(layout.apply(&mut map, &registry, &config, &mut rng), 0);
        assert!(map.props().is_empty());
        assert!(map.enclosures().is_empty());
    }
}
