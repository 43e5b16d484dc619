//! Five-meld winning hand decomposition.
//!
//! Combines the honor and suited solvers, filters the cross product down to
//! legal five-meld shapes, reconciles locked-meld exposure, and places the
//! winning tile to produce concrete [`StandardWin`] values.

use serde::{Deserialize, Serialize};

use crate::error::HandError;
use crate::hand::{Hand, StandardWin, HAND_MIN_TILES};
use crate::meld::{
    index_of_meld, melds_are_subset, melds_multiset, pair_count, quadruplet_count,
    total_tile_count, Meld,
};
use crate::score::WinContext;

use super::honor::honor_meld_groupings;
use super::suited::suited_meld_groupings;

/// Knobs that change how decompositions are expanded into wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposePolicy {
    lock_concealed_melds: bool,
}

impl DecomposePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat concealed locked melds as fixed: the winning tile is never
    /// placed into them.
    #[must_use]
    pub fn with_lock_concealed_melds(mut self, lock: bool) -> Self {
        self.lock_concealed_melds = lock;
        self
    }

    pub fn lock_concealed_melds(&self) -> bool {
        self.lock_concealed_melds
    }
}

/// Decompose a hand into every five-meld winning interpretation.
///
/// Returns one [`StandardWin`] per (decomposition, winning-tile placement)
/// pair; an empty vec means the hand simply is not a five-meld win. Errors
/// are reserved for broken data: impossible tile quantities or locked-meld
/// state that contradicts itself.
pub fn decompose_standard(
    hand: &Hand,
    ctx: &WinContext,
    policy: DecomposePolicy,
) -> Result<Vec<StandardWin>, HandError> {
    if hand.quantity(ctx.winning_tile()) == 0 {
        return Err(HandError::invalid_hand(format!(
            "winning tile {} is not in the hand",
            ctx.winning_tile()
        )));
    }

    let honor = honor_meld_groupings(hand)?;
    let suited = suited_meld_groupings(hand)?;
    let expected_kongs = hand.non_flower_total() - HAND_MIN_TILES;
    let hand_tiles = hand.multiset().without_flowers();

    let mut wins = Vec::new();
    for honor_melds in &honor {
        for suited_melds in &suited {
            let mut melds: Vec<Meld> = honor_melds.clone();
            melds.extend(suited_melds.iter().cloned());

            if melds.len() != 5
                || pair_count(&melds) != 1
                || quadruplet_count(&melds) != expected_kongs
                || total_tile_count(&melds) != hand.non_flower_total()
                || melds_multiset(&melds) != hand_tiles
            {
                continue;
            }
            if !melds_are_subset(&melds, hand.locked_melds(), true) {
                continue;
            }

            let reconciled = overwrite_locked_melds(melds, hand.locked_melds())?;
            wins.extend(place_winning_tile(reconciled, hand, ctx, policy)?);
        }
    }
    Ok(wins)
}

/// Replace structural matches of the locked melds with the locked melds
/// themselves, so exposure flags come from the player's declarations. The
/// locked melds land at the end of the list.
pub(super) fn overwrite_locked_melds(
    melds: Vec<Meld>,
    locked: &[Meld],
) -> Result<Vec<Meld>, HandError> {
    let mut remaining = melds;
    for meld in locked {
        match index_of_meld(&remaining, meld, true) {
            Some(i) => {
                remaining.remove(i);
            }
            // the caller already verified the subset relation
            None => {
                return Err(HandError::inconsistency(format!(
                    "locked meld {meld:?} missing from a decomposition it was matched against"
                )))
            }
        }
    }
    remaining.extend(locked.iter().cloned());
    Ok(remaining)
}

/// Expand one reconciled decomposition into wins, one per legal placement of
/// the winning tile.
///
/// When exactly one locked meld holds the winning tile the placement is
/// forced onto that meld, lock policy notwithstanding. Otherwise every meld
/// containing the tile is a candidate: exposed locked melds are skipped (the
/// tile was claimed before the win), concealed melds complete as-is on a
/// self draw, and on a discard the completed meld flips to exposed.
pub(super) fn place_winning_tile(
    melds: Vec<Meld>,
    hand: &Hand,
    ctx: &WinContext,
    policy: DecomposePolicy,
) -> Result<Vec<StandardWin>, HandError> {
    let tile = ctx.winning_tile();
    let flowers = hand.flowers().to_vec();

    let mut locked_with_tile = hand.locked_melds_containing(tile);
    if let (Some(forced), None) = (locked_with_tile.next(), locked_with_tile.next()) {
        let index = index_of_meld(&melds, forced, false).ok_or_else(|| {
            HandError::inconsistency(format!(
                "locked meld {forced:?} holding the winning tile is absent after reconciliation"
            ))
        })?;
        return Ok(vec![StandardWin::new(melds, index, tile, flowers)?]);
    }

    let mut wins = Vec::new();
    for index in 0..melds.len() {
        let meld = &melds[index];
        if !meld.contains(tile) {
            continue;
        }
        // exposure flags were just reconciled, so exact equality works here
        let locked = index_of_meld(hand.locked_melds(), meld, false).is_some();
        if meld.exposed() {
            if locked {
                continue;
            }
            return Err(HandError::inconsistency(format!(
                "exposed meld {meld:?} outside the locked set"
            )));
        }
        if locked && policy.lock_concealed_melds() {
            continue;
        }
        if ctx.self_drawn() {
            wins.push(StandardWin::new(melds.clone(), index, tile, flowers.clone())?);
        } else {
            let mut completed = melds.clone();
            completed[index] = meld.cloned_with_exposed(true);
            wins.push(StandardWin::new(completed, index, tile, flowers.clone())?);
        }
    }
    Ok(wins)
}
