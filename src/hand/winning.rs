//! Winning-hand decomposition results.
//!
//! A [`WinningHand`] is a closed variant set: [`StandardWin`] for meld-based
//! decompositions (five melds, or seven pairs) and [`SpecialWin`] for
//! fixed-pattern hands. Predicate routing dispatches exhaustively over this
//! enum; there is no open-ended dynamic typing.

use serde::Serialize;

use crate::error::HandError;
use crate::hand::{HAND_MAX_TILES, HAND_MIN_TILES, MAX_TILE_COPIES};
use crate::meld::{flatten_tiles, pair_count, Meld};
use crate::tile::{Tile, TileMultiset};

/// A complete winning decomposition of a hand.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum WinningHand {
    /// Meld-based decomposition: five melds or seven pairs.
    Standard(StandardWin),
    /// Fixed-pattern decomposition (e.g. thirteen orphans).
    Special(SpecialWin),
}

impl WinningHand {
    /// The tile that completed the hand.
    #[must_use]
    pub fn winning_tile(&self) -> Tile {
        match self {
            WinningHand::Standard(w) => w.winning_tile(),
            WinningHand::Special(w) => w.winning_tile(),
        }
    }

    /// Was the hand completed by self-draw?
    #[must_use]
    pub fn is_self_drawn(&self) -> bool {
        match self {
            WinningHand::Standard(w) => w.is_self_drawn(),
            WinningHand::Special(w) => w.is_self_drawn(),
        }
    }

    /// Every suited/honor tile in the decomposition.
    #[must_use]
    pub fn all_tiles(&self) -> Vec<Tile> {
        match self {
            WinningHand::Standard(w) => flatten_tiles(w.melds()),
            WinningHand::Special(w) => w.all_tiles(),
        }
    }
}

/// A meld-based winning hand.
///
/// Meld order is significant: predicates report evidence by meld index, and
/// decomposition output is order-stable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StandardWin {
    melds: Vec<Meld>,
    winning_meld_index: usize,
    winning_tile: Tile,
    flowers: Vec<Tile>,
}

impl StandardWin {
    /// Validate and construct a meld-based winning hand.
    pub fn new(
        melds: Vec<Meld>,
        winning_meld_index: usize,
        winning_tile: Tile,
        flowers: Vec<Tile>,
    ) -> Result<Self, HandError> {
        let tiles = flatten_tiles(&melds);
        if !(HAND_MIN_TILES..=HAND_MAX_TILES).contains(&tiles.len()) {
            return Err(HandError::invalid_hand(format!(
                "winning hand must cover {HAND_MIN_TILES}-{HAND_MAX_TILES} tiles, found {}",
                tiles.len()
            )));
        }
        if tiles.iter().any(|t| t.is_flower()) {
            return Err(HandError::invalid_hand(
                "winning melds cannot contain flower tiles",
            ));
        }
        let multiset = TileMultiset::from_tiles(&tiles);
        for (tile, quantity) in multiset.iter() {
            if quantity > MAX_TILE_COPIES {
                return Err(HandError::invalid_hand(format!(
                    "winning hand holds {quantity} copies of {tile}"
                )));
            }
        }

        let pairs = pair_count(&melds);
        match melds.len() {
            7 if pairs != 7 => {
                return Err(HandError::invalid_hand(
                    "seven-meld winning hands must be all pairs",
                ));
            }
            5 if pairs != 1 => {
                return Err(HandError::invalid_hand(format!(
                    "five-meld winning hands must have exactly one pair, found {pairs}"
                )));
            }
            5 | 7 => {}
            n => {
                return Err(HandError::invalid_hand(format!(
                    "winning hands have 5 or 7 melds, found {n}"
                )));
            }
        }

        let winning_meld = melds.get(winning_meld_index).ok_or_else(|| {
            HandError::invalid_hand(format!(
                "winning meld index {winning_meld_index} out of range"
            ))
        })?;
        if !winning_meld.contains(winning_tile) {
            return Err(HandError::invalid_hand(format!(
                "winning tile {winning_tile} is not in the winning meld"
            )));
        }

        validate_flowers(&flowers)?;

        Ok(Self {
            melds,
            winning_meld_index,
            winning_tile,
            flowers,
        })
    }

    /// The ordered melds.
    #[must_use]
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    /// Index of the meld completed by the winning tile.
    #[must_use]
    pub fn winning_meld_index(&self) -> usize {
        self.winning_meld_index
    }

    /// The meld completed by the winning tile.
    #[must_use]
    pub fn winning_meld(&self) -> &Meld {
        &self.melds[self.winning_meld_index]
    }

    /// The tile that completed the hand.
    #[must_use]
    pub fn winning_tile(&self) -> Tile {
        self.winning_tile
    }

    /// The hand's flower tiles.
    #[must_use]
    pub fn flowers(&self) -> &[Tile] {
        &self.flowers
    }

    /// Self-drawn iff the winning meld stayed concealed.
    #[must_use]
    pub fn is_self_drawn(&self) -> bool {
        !self.winning_meld().exposed()
    }
}

/// A fixed-pattern winning hand: 12 singleton tiles, one pair, and the
/// winning tile.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpecialWin {
    singles: Vec<Tile>,
    pair: Meld,
    winning_tile: Tile,
    flowers: Vec<Tile>,
    self_drawn: bool,
}

impl SpecialWin {
    /// Validate and construct a fixed-pattern winning hand.
    pub fn new(
        singles: Vec<Tile>,
        pair: Meld,
        winning_tile: Tile,
        flowers: Vec<Tile>,
        self_drawn: bool,
    ) -> Result<Self, HandError> {
        if singles.len() != 12 {
            return Err(HandError::invalid_hand(format!(
                "special hands carry 12 singleton tiles, found {}",
                singles.len()
            )));
        }
        if singles.iter().any(|t| t.is_flower()) {
            return Err(HandError::invalid_hand(
                "special-hand tiles cannot be flowers",
            ));
        }
        if !pair.is_pair() {
            return Err(HandError::invalid_hand("special hands need a pair meld"));
        }
        if !singles.contains(&winning_tile) && !pair.contains(winning_tile) {
            return Err(HandError::invalid_hand(format!(
                "winning tile {winning_tile} is not in the special hand"
            )));
        }
        validate_flowers(&flowers)?;
        Ok(Self {
            singles,
            pair,
            winning_tile,
            flowers,
            self_drawn,
        })
    }

    /// The 12 singleton tiles.
    #[must_use]
    pub fn singles(&self) -> &[Tile] {
        &self.singles
    }

    /// The duplicated pattern tile as a pair meld.
    #[must_use]
    pub fn pair(&self) -> &Meld {
        &self.pair
    }

    /// The tile that completed the hand.
    #[must_use]
    pub fn winning_tile(&self) -> Tile {
        self.winning_tile
    }

    /// The hand's flower tiles.
    #[must_use]
    pub fn flowers(&self) -> &[Tile] {
        &self.flowers
    }

    /// Was the hand completed by self-draw?
    #[must_use]
    pub fn is_self_drawn(&self) -> bool {
        self.self_drawn
    }

    /// All 14 suited/honor tiles: singles plus the pair.
    #[must_use]
    pub fn all_tiles(&self) -> Vec<Tile> {
        let mut tiles = self.singles.clone();
        tiles.extend(self.pair.tiles().iter().copied());
        tiles
    }
}

fn validate_flowers(flowers: &[Tile]) -> Result<(), HandError> {
    for (i, tile) in flowers.iter().enumerate() {
        if !tile.is_flower() {
            return Err(HandError::invalid_hand(format!(
                "{tile} is not a flower tile"
            )));
        }
        if flowers[..i].contains(tile) {
            return Err(HandError::invalid_hand(format!(
                "duplicate flower tile {tile}"
            )));
        }
    }
    Ok(())
}
