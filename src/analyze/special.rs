//! Fixed-pattern special hands.
//!
//! A special hand is thirteen required tiles where exactly one of them is
//! duplicated into the pair: twelve singles plus a pair, fourteen tiles in
//! all. Thirteen orphans is the canonical instance, but the matcher takes
//! any thirteen distinct tiles, so variant patterns cost nothing extra.

use crate::error::HandError;
use crate::hand::{Hand, SpecialWin, HAND_MIN_TILES};
use crate::meld::Meld;
use crate::score::WinContext;
use crate::tile::{Dragon, Suit, Tile, Wind};

/// Matches hands made of thirteen required tiles with one duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThirteenTileMatcher {
    required: [Tile; 13],
}

impl ThirteenTileMatcher {
    /// Build a matcher from thirteen distinct non-flower tiles.
    pub fn new(required: [Tile; 13]) -> Result<Self, HandError> {
        for (i, tile) in required.iter().enumerate() {
            if tile.is_flower() {
                return Err(HandError::invalid_matcher(
                    "special hand patterns cannot contain flower tiles",
                ));
            }
            if required[..i].contains(tile) {
                return Err(HandError::invalid_matcher(format!(
                    "special hand patterns need distinct tiles, {tile} repeats"
                )));
            }
        }
        Ok(Self { required })
    }

    /// The thirteen orphans pattern: a 1 and a 9 of every suit plus every
    /// honor tile.
    pub fn thirteen_orphans() -> Self {
        let mut required = [Tile::dragon(Dragon::Red); 13];
        let mut i = 0;
        for suit in Suit::ALL {
            for value in [1, 9] {
                required[i] = Tile::Suited { suit, value };
                i += 1;
            }
        }
        for tile in Tile::honor_tiles() {
            required[i] = tile;
            i += 1;
        }
        Self { required }
    }

    pub fn required_tiles(&self) -> &[Tile; 13] {
        &self.required
    }

    /// Try the pattern against a hand.
    ///
    /// `Ok(None)` is the ordinary miss. Locked melds are incompatible with a
    /// special hand, so their presence is also a miss.
    pub fn matches(&self, hand: &Hand, ctx: &WinContext) -> Result<Option<SpecialWin>, HandError> {
        if hand.non_flower_total() != HAND_MIN_TILES {
            return Ok(None);
        }
        if !hand.locked_melds().is_empty() {
            return Ok(None);
        }

        let mut duplicated: Option<Tile> = None;
        for &tile in &self.required {
            match hand.quantity(tile) {
                1 => {}
                2 if duplicated.is_none() => duplicated = Some(tile),
                _ => return Ok(None),
            }
        }
        let Some(pair_tile) = duplicated else {
            return Ok(None);
        };

        let singles: Vec<Tile> = self
            .required
            .iter()
            .copied()
            .filter(|&t| t != pair_tile)
            .collect();
        let win = SpecialWin::new(
            singles,
            Meld::pair(pair_tile)?,
            ctx.winning_tile(),
            hand.flowers().to_vec(),
            ctx.self_drawn(),
        )?;
        Ok(Some(win))
    }
}
