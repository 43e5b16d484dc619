//! Seven-pairs winning hand decomposition.
//!
//! A much simpler pipeline than the five-meld search: exactly fourteen
//! tiles, every quantity 2 or 4, four copies counting as two identical
//! pairs. Exposure reconciliation and winning-tile placement are shared
//! with the five-meld decomposer.

use crate::error::HandError;
use crate::hand::{Hand, StandardWin, HAND_MIN_TILES};
use crate::meld::{melds_are_subset, Meld};
use crate::score::WinContext;

use super::standard::{overwrite_locked_melds, place_winning_tile, DecomposePolicy};

/// Decompose a hand as seven pairs, if it is one.
///
/// An empty vec means the hand is not a seven-pairs shape (wrong size, an
/// odd quantity somewhere, or locked melds other than pairs). A quantity
/// above 4 is a fatal [`HandError::MalformedHand`].
pub fn decompose_seven_pairs(
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
    // kongs would push the total past fourteen, so this rules them out too
    if hand.non_flower_total() != HAND_MIN_TILES {
        return Ok(Vec::new());
    }
    if hand.locked_melds().iter().any(|m| !m.is_pair()) {
        return Ok(Vec::new());
    }

    let mut melds = Vec::with_capacity(7);
    for tile in hand.multiset().distinct_tiles() {
        if tile.is_flower() {
            continue;
        }
        match hand.quantity(tile) {
            2 => melds.push(Meld::pair(tile)?),
            4 => {
                melds.push(Meld::pair(tile)?);
                melds.push(Meld::pair(tile)?);
            }
            1 | 3 => return Ok(Vec::new()),
            q => return Err(HandError::MalformedHand { tile, quantity: q }),
        }
    }
    if !melds_are_subset(&melds, hand.locked_melds(), true) {
        return Ok(Vec::new());
    }

    let reconciled = overwrite_locked_melds(melds, hand.locked_melds())?;
    place_winning_tile(reconciled, hand, ctx, policy)
}
