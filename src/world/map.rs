//! World map: the tile grid plus every placed object
//!
//! All placement and removal goes through here so tile occupancy never
//! drifts out of sync with the prop and enclosure lists. Creation calls
//! follow a trusted-caller contract: the shop (or layout loader) validates
//! with `can_place_footprint` first, and the engine mutates without
//! re-checking. Removal is idempotent by design so teardown paths can
//! overlap safely.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::placeables::PlaceableRegistry;
use crate::core::config::SimulationConfig;
use crate::core::types::PlaceableId;
use crate::world::enclosure::Enclosure;
use crate::world::grid::TileGrid;
use crate::world::placeable::{PlacedObject, Prop};
use crate::world::tile::{classify_edge, Tile};

#[derive(Debug, Clone)]
pub struct WorldMap {
    grid: TileGrid,
    props: Vec<Prop>,
    enclosures: Vec<Enclosure>,
    next_id: u32,
}

impl WorldMap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid: TileGrid::new(width, height),
            props: Vec::new(),
            enclosures: Vec::new(),
            next_id: 1,
        }
    }

    /// Roll random ground over the whole grid
    pub fn generate_ground(&mut self, rng: &mut ChaCha8Rng) {
        self.grid.generate_ground(rng);
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        self.grid.get(x, y)
    }

    pub fn can_place_footprint(&self, x: i32, y: i32, width: u32, height: u32) -> bool {
        self.grid.can_place_footprint(x, y, width, height)
    }

    pub fn can_place_with_margin(&self, x: i32, y: i32, width: u32, height: u32) -> bool {
        self.grid.can_place_with_margin(x, y, width, height)
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    pub fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }

    pub fn enclosures_mut(&mut self) -> &mut [Enclosure] {
        &mut self.enclosures
    }

    pub fn prop(&self, id: PlaceableId) -> Option<&Prop> {
        self.props.iter().find(|prop| prop.id == id)
    }

    pub fn enclosure(&self, id: PlaceableId) -> Option<&Enclosure> {
        self.enclosures.iter().find(|enclosure| enclosure.id == id)
    }

    pub fn enclosure_mut(&mut self, id: PlaceableId) -> Option<&mut Enclosure> {
        self.enclosures.iter_mut().find(|enclosure| enclosure.id == id)
    }

    /// Resolve whatever occupies the tile at (x, y)
    pub fn placed_object_at(&self, x: i32, y: i32) -> Option<PlacedObject<'_>> {
        let id = self.grid.get(x, y)?.occupant?;
        if let Some(prop) = self.prop(id) {
            return Some(PlacedObject::Prop(prop));
        }
        self.enclosure(id).map(PlacedObject::Enclosure)
    }

    fn allocate_id(&mut self) -> PlaceableId {
        let id = PlaceableId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Place a prop whose footprint the caller has already validated
    ///
    /// Returns `None` (placing nothing) when the registry does not know
    /// the name; the footprint lookup is the one thing that cannot be
    /// delegated to the caller.
    pub fn create_prop(
        &mut self,
        name: &str,
        x: i32,
        y: i32,
        registry: &PlaceableRegistry,
    ) -> Option<PlaceableId> {
        let (width, height) = registry.footprint(name)?;
        let id = self.allocate_id();

        for j in 0..height as i32 {
            for i in 0..width as i32 {
                if let Some(tile) = self.grid.get_mut(x + i, y + j) {
                    tile.occupant = Some(id);
                    if i == 0 && j == 0 {
                        tile.is_main_tile = true;
                    }
                }
            }
        }

        self.props.push(Prop {
            id,
            name: name.to_string(),
            x,
            y,
            width,
            height,
        });
        Some(id)
    }

    /// Remove a prop and clear its footprint; no-op for untracked ids
    pub fn remove_prop(&mut self, id: PlaceableId) {
        let Some(index) = self.props.iter().position(|prop| prop.id == id) else {
            return;
        };
        let prop = self.props.remove(index);

        for j in 0..prop.height as i32 {
            for i in 0..prop.width as i32 {
                if let Some(tile) = self.grid.get_mut(prop.x + i, prop.y + j) {
                    tile.occupant = None;
                    tile.is_main_tile = false;
                }
            }
        }
    }

    /// Place an enclosure whose footprint the caller has already validated
    ///
    /// Every covered tile becomes an enclosure tile; border tiles get their
    /// fence-sprite edge kind and only the origin carries `is_main_tile`.
    pub fn create_enclosure(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        config: &SimulationConfig,
    ) -> PlaceableId {
        let id = self.allocate_id();

        for j in 0..height {
            for i in 0..width {
                if let Some(tile) = self.grid.get_mut(x + i as i32, y + j as i32) {
                    tile.occupant = Some(id);
                    tile.is_enclosure = true;
                    tile.edge_kind = classify_edge(i, j, width, height);
                    if i == 0 && j == 0 {
                        tile.is_main_tile = true;
                    }
                }
            }
        }

        self.enclosures.push(Enclosure::new(id, x, y, width, height, config));
        id
    }

    /// Remove an enclosure, discarding its animals; no-op for untracked ids
    pub fn remove_enclosure(&mut self, id: PlaceableId) {
        let Some(index) = self.enclosures.iter().position(|e| e.id == id) else {
            return;
        };
        let enclosure = self.enclosures.remove(index);

        for j in 0..enclosure.height as i32 {
            for i in 0..enclosure.width as i32 {
                if let Some(tile) = self.grid.get_mut(enclosure.x + i, enclosure.y + j) {
                    tile.clear_occupancy();
                }
            }
        }
        // Roster drops with the enclosure; animals are not relocated
    }

    /// Scatter zero-income decorations at random free spots
    ///
    /// Rejection sampling with a 1-tile margin between footprints and a
    /// bounded attempt budget, so a crowded map terminates with fewer
    /// decorations rather than spinning. Returns how many were placed.
    pub fn scatter_decorations(
        &mut self,
        count_min: u32,
        count_max: u32,
        pool: &[String],
        registry: &PlaceableRegistry,
        config: &SimulationConfig,
        rng: &mut ChaCha8Rng,
    ) -> u32 {
        if pool.is_empty() || count_max == 0 {
            return 0;
        }

        let target = if count_max > count_min {
            rng.gen_range(count_min..=count_max)
        } else {
            count_min
        };
        let budget = target.saturating_mul(config.scatter_attempts_per_item);

        let mut placed = 0;
        let mut attempts = 0;
        while placed < target && attempts < budget {
            attempts += 1;

            let name = &pool[rng.gen_range(0..pool.len())];
            let Some((width, height)) = registry.footprint(name) else {
                continue;
            };
            let x = rng.gen_range(0..self.grid.width()) as i32;
            let y = rng.gen_range(0..self.grid.height()) as i32;

            if self.grid.can_place_with_margin(x, y, width, height) {
                self.create_prop(name, x, y, registry);
                placed += 1;
            }
        }

        if placed < target {
            tracing::warn!(placed, target, "decoration scatter ran out of attempts");
        }
        placed
    }

    /// Advance every enclosure's animals by one tick
    ///
    /// Enclosures update in creation order, animals in roster order; with a
    /// seeded rng the whole pass is reproducible.
    pub fn update_animals(&mut self, dt: f32, config: &SimulationConfig, rng: &mut ChaCha8Rng) {
        for enclosure in &mut self.enclosures {
            enclosure.update_animals(dt, config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::tile::EdgeKind;
    use rand::SeedableRng;

    fn setup() -> (WorldMap, PlaceableRegistry, SimulationConfig) {
        (
            WorldMap::new(30, 30),
            PlaceableRegistry::builtin(),
            SimulationConfig::default(),
        )
    }

    #[test]
    fn test_create_prop_marks_footprint() {
        let (mut map, registry, _) = setup();
        let id = map.create_prop("tree", 3, 4, &registry).unwrap();

        // 2x2 footprint, main tile only at origin
        assert_eq!(map.get_tile(3, 4).unwrap().occupant, Some(id));
        assert!(map.get_tile(3, 4).unwrap().is_main_tile);
        assert_eq!(map.get_tile(4, 5).unwrap().occupant, Some(id));
        assert!(!map.get_tile(4, 5).unwrap().is_main_tile);
        assert_eq!(map.get_tile(5, 4).unwrap().occupant, None);
        assert_eq!(map.props().len(), 1);
    }

    #[test]
    fn test_unknown_prop_rejected() {
        let (mut map, registry, _) = setup();
        assert!(map.create_prop("griffin_statue", 3, 4, &registry).is_none());
        assert!(map.props().is_empty());
    }

    #[test]
    fn test_remove_prop_clears_exact_footprint() {
        let (mut map, registry, _) = setup();
        let tree = map.create_prop("tree", 3, 4, &registry).unwrap();
        let well = map.create_prop("well", 6, 4, &registry).unwrap();

        map.remove_prop(tree);

        for (x, y) in [(3, 4), (4, 4), (3, 5), (4, 5)] {
            let tile = map.get_tile(x, y).unwrap();
            assert!(tile.occupant.is_none());
            assert!(!tile.is_main_tile);
        }
        // Unrelated prop untouched
        assert_eq!(map.get_tile(6, 4).unwrap().occupant, Some(well));
        assert_eq!(map.props().len(), 1);
    }

    #[test]
    fn test_remove_prop_idempotent() {
        let (mut map, registry, _) = setup();
        let id = map.create_prop("well", 2, 2, &registry).unwrap();
        map.remove_prop(id);
        // Second removal must not disturb anything
        map.remove_prop(id);
        assert!(map.props().is_empty());
        assert!(map.get_tile(2, 2).unwrap().occupant.is_none());
    }

    #[test]
    fn test_create_enclosure_edge_kinds() {
        let (mut map, _, config) = setup();
        map.create_enclosure(10, 10, 5, 5, &config);

        let kind = |x: i32, y: i32| map.get_tile(x, y).unwrap().edge_kind;
        assert_eq!(kind(10, 10), Some(EdgeKind::TopLeft));
        assert_eq!(kind(14, 10), Some(EdgeKind::TopRight));
        assert_eq!(kind(10, 14), Some(EdgeKind::BottomLeft));
        assert_eq!(kind(14, 14), Some(EdgeKind::BottomRight));
        assert_eq!(kind(12, 10), Some(EdgeKind::Top));
        assert_eq!(kind(12, 14), Some(EdgeKind::Bottom));
        assert_eq!(kind(10, 12), Some(EdgeKind::Left));
        assert_eq!(kind(14, 12), Some(EdgeKind::Right));
        assert_eq!(kind(12, 12), None);
    }

    #[test]
    fn test_enclosure_tiles_flagged() {
        let (mut map, _, config) = setup();
        let id = map.create_enclosure(10, 10, 5, 5, &config);

        for j in 0..5 {
            for i in 0..5 {
                let tile = map.get_tile(10 + i, 10 + j).unwrap();
                assert_eq!(tile.occupant, Some(id));
                assert!(tile.is_enclosure);
            }
        }
        assert!(map.get_tile(10, 10).unwrap().is_main_tile);
        assert!(!map.get_tile(11, 10).unwrap().is_main_tile);
    }

    #[test]
    fn test_remove_enclosure_discards_animals() {
        let (mut map, _, config) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = map.create_enclosure(10, 10, 5, 5, &config);

        let animal = crate::entity::animal::Animal::new(
            "sheep",
            crate::core::types::Vec2::new(11.5, 11.5),
            &config,
            &mut rng,
        );
        assert!(map.enclosure_mut(id).unwrap().add_animal(animal));

        map.remove_enclosure(id);
        assert!(map.enclosures().is_empty());
        for j in 0..5 {
            for i in 0..5 {
                let tile = map.get_tile(10 + i, 10 + j).unwrap();
                assert!(tile.occupant.is_none());
                assert!(!tile.is_enclosure);
                assert!(tile.edge_kind.is_none());
            }
        }
        // Idempotent
        map.remove_enclosure(id);
    }

    #[test]
    fn test_placed_object_at() {
        let (mut map, registry, config) = setup();
        let well = map.create_prop("well", 2, 2, &registry).unwrap();
        let pen = map.create_enclosure(10, 10, 5, 5, &config);

        let object = map.placed_object_at(2, 2).unwrap();
        assert_eq!(object.id(), well);
        assert!(!object.is_enclosure());

        // Any footprint tile resolves, not just the origin
        let object = map.placed_object_at(13, 12).unwrap();
        assert_eq!(object.id(), pen);
        assert!(object.is_enclosure());
        assert_eq!(object.footprint(), (5, 5));

        assert!(map.placed_object_at(0, 0).is_none());
        assert!(map.placed_object_at(-3, 0).is_none());
    }

    #[test]
    fn test_scatter_respects_margin_and_terminates() {
        let (mut map, registry, config) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let pool = registry.decoration_pool();

        let placed = map.scatter_decorations(8, 12, &pool, &registry, &config, &mut rng);
        assert!(placed >= 1);
        assert_eq!(map.props().len(), placed as usize);

        // No two decorations touch: every prop keeps a clear ring
        for prop in map.props() {
            for j in -1..=prop.height as i32 {
                for i in -1..=prop.width as i32 {
                    let inside = i >= 0 && i < prop.width as i32 && j >= 0 && j < prop.height as i32;
                    if inside {
                        continue;
                    }
                    if let Some(tile) = map.get_tile(prop.x + i, prop.y + j) {
                        assert!(
                            tile.occupant.is_none(),
                            "decoration {} touches a neighbour",
                            prop.name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_scatter_on_crowded_map_is_best_effort() {
        let (mut map, registry, config) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        // Fill the map with one giant enclosure, leaving no room
        map.create_enclosure(0, 0, 30, 30, &config);

        let pool = registry.decoration_pool();
        let placed = map.scatter_decorations(5, 5, &pool, &registry, &config, &mut rng);
        assert_eq!(placed, 0);
    }
}
