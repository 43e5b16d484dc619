//! Meld value objects and meld-list utilities.
//!
//! A [`Meld`] is a completed 2-4 tile set: pair, triplet, quadruplet, run,
//! or knitted run. Melds are immutable after construction; changing the
//! exposed flag produces a new meld via [`Meld::cloned_with_exposed`].
//!
//! Equality comes in two modes: full equality (derived `PartialEq`, which
//! includes the exposed flag) and [`Meld::eq_ignoring_exposed`], which is
//! how player-locked melds are matched against solver output, since solvers
//! always produce concealed melds.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::HandError;
use crate::tile::{Suit, Tile, TileMultiset};

/// The legal meld shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// Two identical tiles.
    Pair,
    /// Three identical tiles (pong).
    Triplet,
    /// Four identical tiles (kong).
    Quadruplet,
    /// Three consecutive tiles of one suit (chow).
    Run,
    /// Three consecutive values spread across all three suits.
    KnittedRun,
}

/// A completed 2-4 tile set with an exposed/concealed flag.
///
/// Deserialization re-validates the shape through the constructors, so serde
/// input cannot materialize a meld the constructors would reject.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Meld {
    kind: MeldKind,
    tiles: SmallVec<[Tile; 4]>,
    exposed: bool,
}

impl Meld {
    /// A concealed pair of `tile`.
    pub fn pair(tile: Tile) -> Result<Self, HandError> {
        Self::same_tile(MeldKind::Pair, tile, 2)
    }

    /// A concealed triplet of `tile`.
    pub fn triplet(tile: Tile) -> Result<Self, HandError> {
        Self::same_tile(MeldKind::Triplet, tile, 3)
    }

    /// A concealed quadruplet of `tile`.
    pub fn quadruplet(tile: Tile) -> Result<Self, HandError> {
        Self::same_tile(MeldKind::Quadruplet, tile, 4)
    }

    fn same_tile(kind: MeldKind, tile: Tile, count: usize) -> Result<Self, HandError> {
        if tile.is_flower() {
            return Err(HandError::InvalidMeld {
                detail: format!("a {kind:?} cannot contain a flower tile"),
            });
        }
        Ok(Self {
            kind,
            tiles: std::iter::repeat(tile).take(count).collect(),
            exposed: false,
        })
    }

    /// A concealed run `start, start+1, start+2` in one suit.
    pub fn run(suit: Suit, start: u8) -> Result<Self, HandError> {
        if !(1..=7).contains(&start) {
            return Err(HandError::InvalidMeld {
                detail: format!("run must start at 1-7, got {start}"),
            });
        }
        let tiles = (start..start + 3)
            .map(|v| Tile::suited(suit, v))
            .collect::<Result<SmallVec<[Tile; 4]>, _>>()?;
        Ok(Self {
            kind: MeldKind::Run,
            tiles,
            exposed: false,
        })
    }

    /// A concealed knitted run: values `start, start+1, start+2` taken from
    /// the three suits in the given order (which must be a permutation).
    pub fn knitted_run(suits: [Suit; 3], start: u8) -> Result<Self, HandError> {
        if !(1..=7).contains(&start) {
            return Err(HandError::InvalidMeld {
                detail: format!("knitted run must start at 1-7, got {start}"),
            });
        }
        if suits[0] == suits[1] || suits[0] == suits[2] || suits[1] == suits[2] {
            return Err(HandError::InvalidMeld {
                detail: "knitted run must span three distinct suits".to_string(),
            });
        }
        let tiles = suits
            .iter()
            .zip(start..start + 3)
            .map(|(&suit, v)| Tile::suited(suit, v))
            .collect::<Result<SmallVec<[Tile; 4]>, _>>()?;
        Ok(Self {
            kind: MeldKind::KnittedRun,
            tiles,
            exposed: false,
        })
    }

    /// The meld shape.
    #[must_use]
    pub fn kind(&self) -> MeldKind {
        self.kind
    }

    /// The tiles in this meld.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The first tile. Melds always hold at least two tiles.
    #[must_use]
    pub fn first_tile(&self) -> Tile {
        self.tiles[0]
    }

    /// Was this meld formed by claiming a discard?
    #[must_use]
    pub fn exposed(&self) -> bool {
        self.exposed
    }

    /// Is this meld a pair?
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.kind == MeldKind::Pair
    }

    /// Is this meld a triplet or quadruplet?
    #[must_use]
    pub fn is_triplet_or_quadruplet(&self) -> bool {
        matches!(self.kind, MeldKind::Triplet | MeldKind::Quadruplet)
    }

    /// Does the meld contain `tile`?
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Structural equality that ignores the exposed flag.
    #[must_use]
    pub fn eq_ignoring_exposed(&self, other: &Meld) -> bool {
        self.kind == other.kind && self.tiles == other.tiles
    }

    /// A copy of this meld with the given exposed flag.
    #[must_use]
    pub fn cloned_with_exposed(&self, exposed: bool) -> Meld {
        Meld {
            kind: self.kind,
            tiles: self.tiles.clone(),
            exposed,
        }
    }

    /// Rebuild a meld from untrusted parts, rejecting anything the
    /// constructors would not produce (tiles in canonical order included).
    fn from_parts(
        kind: MeldKind,
        tiles: SmallVec<[Tile; 4]>,
        exposed: bool,
    ) -> Result<Self, HandError> {
        let invalid = || HandError::InvalidMeld {
            detail: format!("tiles do not form a {kind:?}"),
        };
        let first = *tiles.first().ok_or_else(invalid)?;
        let rebuilt = match kind {
            MeldKind::Pair => Meld::pair(first)?,
            MeldKind::Triplet => Meld::triplet(first)?,
            MeldKind::Quadruplet => Meld::quadruplet(first)?,
            MeldKind::Run => {
                let suit = first.suit().ok_or_else(invalid)?;
                let start = first.value().ok_or_else(invalid)?;
                Meld::run(suit, start)?
            }
            MeldKind::KnittedRun => {
                if tiles.len() != 3 {
                    return Err(invalid());
                }
                let suits = [
                    tiles[0].suit().ok_or_else(invalid)?,
                    tiles[1].suit().ok_or_else(invalid)?,
                    tiles[2].suit().ok_or_else(invalid)?,
                ];
                let start = first.value().ok_or_else(invalid)?;
                Meld::knitted_run(suits, start)?
            }
        };
        if rebuilt.tiles != tiles {
            return Err(invalid());
        }
        Ok(rebuilt.cloned_with_exposed(exposed))
    }
}

impl<'de> Deserialize<'de> for Meld {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            kind: MeldKind,
            tiles: SmallVec<[Tile; 4]>,
            exposed: bool,
        }
        let raw = Raw::deserialize(deserializer)?;
        Meld::from_parts(raw.kind, raw.tiles, raw.exposed).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Meld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tiles: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        let state = if self.exposed { "exposed" } else { "concealed" };
        write!(f, "{:?}[{}] ({state})", self.kind, tiles.join(" "))
    }
}

/// Flatten a meld list into its tiles, in meld order.
#[must_use]
pub fn flatten_tiles(melds: &[Meld]) -> Vec<Tile> {
    melds.iter().flat_map(|m| m.tiles().iter().copied()).collect()
}

/// Total tile count across a meld list.
#[must_use]
pub fn total_tile_count(melds: &[Meld]) -> usize {
    melds.iter().map(|m| m.tiles().len()).sum()
}

/// Number of pair melds in a list.
#[must_use]
pub fn pair_count(melds: &[Meld]) -> usize {
    melds.iter().filter(|m| m.is_pair()).count()
}

/// Number of quadruplet melds in a list.
#[must_use]
pub fn quadruplet_count(melds: &[Meld]) -> usize {
    melds
        .iter()
        .filter(|m| m.kind() == MeldKind::Quadruplet)
        .count()
}

/// Index of `meld` within `melds`, matching exactly or ignoring exposure.
#[must_use]
pub fn index_of_meld(melds: &[Meld], meld: &Meld, ignore_exposed: bool) -> Option<usize> {
    melds.iter().position(|m| {
        if ignore_exposed {
            m.eq_ignoring_exposed(meld)
        } else {
            m == meld
        }
    })
}

/// Is every meld of `subset` present in `superset`, consuming one match per
/// occurrence (multiset semantics)?
#[must_use]
pub fn melds_are_subset(superset: &[Meld], subset: &[Meld], ignore_exposed: bool) -> bool {
    let mut remaining: Vec<&Meld> = superset.iter().collect();
    for needle in subset {
        let found = remaining.iter().position(|m| {
            if ignore_exposed {
                m.eq_ignoring_exposed(needle)
            } else {
                *m == needle
            }
        });
        match found {
            Some(idx) => {
                remaining.swap_remove(idx);
            }
            None => return false,
        }
    }
    true
}

/// The tile multiset covered by a meld list.
#[must_use]
pub fn melds_multiset(melds: &[Meld]) -> TileMultiset {
    TileMultiset::from_tiles(&flatten_tiles(melds))
}
