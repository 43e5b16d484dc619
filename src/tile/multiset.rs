//! Quantity index over a tile collection.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::{Suit, Tile};

/// A multiset of tiles, indexed by tile identity.
///
/// This is the raw quantity primitive underneath `Hand`: every solver reads
/// per-tile quantities from one of these rather than re-scanning tile lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TileMultiset {
    counts: FxHashMap<Tile, u8>,
}

impl TileMultiset {
    /// Build a multiset from a tile sequence.
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut counts: FxHashMap<Tile, u8> = FxHashMap::default();
        for &tile in tiles {
            *counts.entry(tile).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Quantity of a specific tile (0 if absent).
    #[must_use]
    pub fn quantity(&self, tile: Tile) -> u8 {
        self.counts.get(&tile).copied().unwrap_or(0)
    }

    /// Total tile count, optionally including flower tiles.
    #[must_use]
    pub fn total(&self, include_flowers: bool) -> usize {
        self.counts
            .iter()
            .filter(|(tile, _)| include_flowers || !tile.is_flower())
            .map(|(_, &q)| q as usize)
            .sum()
    }

    /// Distinct tiles present, in canonical sorted order.
    #[must_use]
    pub fn distinct_tiles(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self
            .counts
            .iter()
            .filter(|(_, &q)| q > 0)
            .map(|(&t, _)| t)
            .collect();
        tiles.sort();
        tiles
    }

    /// Per-value counts for one suit, indexed by `value - 1`.
    #[must_use]
    pub fn suit_counts(&self, suit: Suit) -> [u8; 9] {
        let mut counts = [0u8; 9];
        for (tile, &q) in &self.counts {
            if let Tile::Suited { suit: s, value } = *tile {
                if s == suit {
                    counts[(value - 1) as usize] = q;
                }
            }
        }
        counts
    }

    /// Does `self` contain `other` quantity-wise (every tile of `other` is
    /// present in `self` at least as many times)?
    #[must_use]
    pub fn contains_multiset(&self, other: &TileMultiset) -> bool {
        other
            .counts
            .iter()
            .all(|(&tile, &q)| self.quantity(tile) >= q)
    }

    /// The multiset restricted to non-flower tiles.
    #[must_use]
    pub fn without_flowers(&self) -> TileMultiset {
        let counts = self
            .counts
            .iter()
            .filter(|(tile, _)| !tile.is_flower())
            .map(|(&t, &q)| (t, q))
            .collect();
        Self { counts }
    }

    /// Iterate over (tile, quantity) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        self.counts.iter().map(|(&t, &q)| (t, q))
    }
}
