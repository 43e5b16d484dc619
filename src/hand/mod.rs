//! Validated tile collections.
//!
//! A [`Hand`] is the at-turn tile collection a player tries to win from:
//! 14-18 suited/honor tiles (quadruplets push it past 14), up to 8 unique
//! flower tiles, and zero or more locked melds the player has already
//! committed to. All validation happens in [`Hand::new`]; a `Hand` is never
//! partially constructed.

mod winning;

pub use winning::{SpecialWin, StandardWin, WinningHand};

use crate::error::HandError;
use crate::meld::{melds_multiset, Meld};
use crate::tile::{Tile, TileMultiset};

/// Minimum suited/honor tiles in an at-turn hand.
pub const HAND_MIN_TILES: usize = 14;
/// Maximum suited/honor tiles (four quadruplets plus a pair).
pub const HAND_MAX_TILES: usize = 18;
/// Maximum unique flower tiles a hand may hold.
pub const MAX_UNIQUE_FLOWERS: usize = 8;
/// Maximum copies of any suited/honor tile.
pub const MAX_TILE_COPIES: u8 = 4;

/// A validated, unsorted collection of tiles plus locked melds.
///
/// Locked melds are immutable after construction: every winning
/// interpretation the decomposer produces must honor them.
#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
    tiles: TileMultiset,
    flowers: Vec<Tile>,
    locked_melds: Vec<Meld>,
}

impl Hand {
    /// Build a hand from a tile sequence and the player's locked melds.
    ///
    /// The tile sequence must already include the tiles of every locked
    /// meld; locked melds describe structure, not extra tiles.
    pub fn new(tiles: &[Tile], locked_melds: Vec<Meld>) -> Result<Self, HandError> {
        let mut flowers = Vec::new();
        for &tile in tiles {
            if tile.is_flower() {
                if flowers.contains(&tile) {
                    return Err(HandError::invalid_hand(format!(
                        "duplicate flower tile {tile}"
                    )));
                }
                flowers.push(tile);
            }
        }
        if flowers.len() > MAX_UNIQUE_FLOWERS {
            return Err(HandError::invalid_hand(format!(
                "at most {MAX_UNIQUE_FLOWERS} flower tiles allowed, found {}",
                flowers.len()
            )));
        }

        let multiset = TileMultiset::from_tiles(tiles);
        let non_flower_total = multiset.total(false);
        if !(HAND_MIN_TILES..=HAND_MAX_TILES).contains(&non_flower_total) {
            return Err(HandError::invalid_hand(format!(
                "hand must hold {HAND_MIN_TILES}-{HAND_MAX_TILES} suited/honor tiles, found {non_flower_total}"
            )));
        }
        for (tile, quantity) in multiset.iter() {
            if !tile.is_flower() && quantity > MAX_TILE_COPIES {
                return Err(HandError::invalid_hand(format!(
                    "at most {MAX_TILE_COPIES} copies of {tile} allowed, found {quantity}"
                )));
            }
        }

        for meld in &locked_melds {
            if meld.tiles().iter().any(|t| t.is_flower()) {
                return Err(HandError::invalid_hand(format!(
                    "locked meld {meld} contains a flower tile"
                )));
            }
        }
        let locked_tiles = melds_multiset(&locked_melds);
        if !multiset.contains_multiset(&locked_tiles) {
            return Err(HandError::invalid_hand(
                "locked meld tiles exceed the hand's tile quantities",
            ));
        }

        Ok(Self {
            tiles: multiset,
            flowers,
            locked_melds,
        })
    }

    /// Construct without validation. Solver unit tests use this to feed
    /// deliberately broken quantities into the malformed-data paths.
    #[cfg(test)]
    pub(crate) fn new_unchecked(tiles: &[Tile], locked_melds: Vec<Meld>) -> Self {
        let flowers = tiles.iter().copied().filter(|t| t.is_flower()).collect();
        Self {
            tiles: TileMultiset::from_tiles(tiles),
            flowers,
            locked_melds,
        }
    }

    /// The underlying quantity index.
    #[must_use]
    pub fn multiset(&self) -> &TileMultiset {
        &self.tiles
    }

    /// Quantity of a specific tile in the hand.
    #[must_use]
    pub fn quantity(&self, tile: Tile) -> u8 {
        self.tiles.quantity(tile)
    }

    /// Total suited/honor tile count.
    #[must_use]
    pub fn non_flower_total(&self) -> usize {
        self.tiles.total(false)
    }

    /// The hand's flower tiles, in arrival order.
    #[must_use]
    pub fn flowers(&self) -> &[Tile] {
        &self.flowers
    }

    /// The player's locked melds.
    #[must_use]
    pub fn locked_melds(&self) -> &[Meld] {
        &self.locked_melds
    }

    /// Locked melds that contain `tile`.
    pub fn locked_melds_containing(&self, tile: Tile) -> impl Iterator<Item = &Meld> {
        self.locked_melds.iter().filter(move |m| m.contains(tile))
    }
}
