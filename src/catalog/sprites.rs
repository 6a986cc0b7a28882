//! Per-species sprite-sheet animation tables
//!
//! Each species maps an animation kind and facing to a sheet row and frame
//! count. The table is validated once at startup against the sheet's actual
//! row count; a mismatch leaves the game unplayable, so it is a fatal
//! construction error rather than a soft fallback. Row numbers are 1-based,
//! matching how the sheets are authored.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{PaddockError, Result};
use crate::core::types::Direction;

/// Which animation loop a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    Idle,
    Walk,
}

impl AnimationKind {
    /// Name used by renderers and logs
    pub fn name(&self) -> &'static str {
        match self {
            AnimationKind::Idle => "idle",
            AnimationKind::Walk => "walk",
        }
    }
}

/// One row of a sprite sheet: its 1-based row number and frame count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimRow {
    pub row: u32,
    pub frames: u32,
}

impl AnimRow {
    pub fn new(row: u32, frames: u32) -> Self {
        Self { row, frames }
    }

    /// Wrap an unbounded frame counter onto this row's frames
    ///
    /// The animal state machine only increments a counter; the wrap
    /// happens here, at the renderer-facing edge.
    pub fn frame_index(&self, counter: u32) -> u32 {
        if self.frames == 0 {
            0
        } else {
            counter % self.frames
        }
    }
}

/// Rows for all four facings of one animation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalRows {
    pub south: AnimRow,
    pub north: AnimRow,
    pub west: AnimRow,
    pub east: AnimRow,
}

impl DirectionalRows {
    pub fn get(&self, direction: Direction) -> AnimRow {
        match direction {
            Direction::South => self.south,
            Direction::North => self.north,
            Direction::West => self.west,
            Direction::East => self.east,
        }
    }
}

/// Animation rows for one species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesSprites {
    pub walk: DirectionalRows,
    pub idle: DirectionalRows,
}

impl SpeciesSprites {
    pub fn rows(&self, kind: AnimationKind) -> &DirectionalRows {
        match kind {
            AnimationKind::Walk => &self.walk,
            AnimationKind::Idle => &self.idle,
        }
    }
}

/// Table of sprite rows for every known species
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteTable {
    species: AHashMap<String, SpeciesSprites>,
    /// Rows available on the shared sheet layout
    sheet_rows: u32,
}

impl SpriteTable {
    pub fn new(sheet_rows: u32) -> Self {
        Self {
            species: AHashMap::new(),
            sheet_rows,
        }
    }

    /// Built-in table for the shipped sheep and rooster sheets
    pub fn builtin() -> Self {
        let mut table = Self::new(8);

        table.insert(
            "rooster",
            SpeciesSprites {
                walk: DirectionalRows {
                    south: AnimRow::new(1, 6),
                    north: AnimRow::new(2, 6),
                    west: AnimRow::new(3, 6),
                    east: AnimRow::new(4, 6),
                },
                idle: DirectionalRows {
                    south: AnimRow::new(5, 6),
                    north: AnimRow::new(6, 6),
                    west: AnimRow::new(7, 6),
                    east: AnimRow::new(8, 6),
                },
            },
        );

        table.insert(
            "sheep",
            SpeciesSprites {
                walk: DirectionalRows {
                    south: AnimRow::new(1, 6),
                    north: AnimRow::new(2, 6),
                    west: AnimRow::new(3, 6),
                    east: AnimRow::new(4, 6),
                },
                // The sheep sheet flips east/west on the idle rows
                idle: DirectionalRows {
                    south: AnimRow::new(5, 4),
                    north: AnimRow::new(6, 4),
                    west: AnimRow::new(8, 4),
                    east: AnimRow::new(7, 4),
                },
            },
        );

        table
    }

    pub fn insert(&mut self, species: &str, sprites: SpeciesSprites) {
        self.species.insert(species.to_string(), sprites);
    }

    pub fn get(&self, species: &str) -> Option<&SpeciesSprites> {
        self.species.get(species)
    }

    /// Row for a species/animation/facing triple
    pub fn row(
        &self,
        species: &str,
        kind: AnimationKind,
        direction: Direction,
    ) -> Option<AnimRow> {
        self.species
            .get(species)
            .map(|sprites| sprites.rows(kind).get(direction))
    }

    /// Check every row against the sheet layout
    ///
    /// Fatal at startup: a species whose rows fall off the sheet (or carry
    /// zero frames) would render garbage for the whole session.
    pub fn validate(&self) -> Result<()> {
        for (name, sprites) in &self.species {
            for kind in [AnimationKind::Walk, AnimationKind::Idle] {
                for direction in Direction::ALL {
                    let row = sprites.rows(kind).get(direction);
                    if row.row == 0 || row.row > self.sheet_rows {
                        return Err(PaddockError::SpriteTable {
                            species: name.clone(),
                            reason: format!(
                                "{} {:?} row {} outside sheet (1..={})",
                                kind.name(),
                                direction,
                                row.row,
                                self.sheet_rows
                            ),
                        });
                    }
                    if row.frames == 0 {
                        return Err(PaddockError::SpriteTable {
                            species: name.clone(),
                            reason: format!("{} {:?} has zero frames", kind.name(), direction),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
