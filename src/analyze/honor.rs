//! Honor-tile meld solver.
//!
//! Honor melds are deterministic given quantities: 2 copies of an honor
//! value form a pair, 3 a triplet, 4 a quadruplet. There is never branching
//! ambiguity, so the solver yields at most one grouping.

use rustc_hash::FxHashMap;

use crate::error::HandError;
use crate::hand::Hand;
use crate::meld::{melds_are_subset, Meld};
use crate::tile::Tile;

/// Enumerate honor meld groupings for a hand: zero or one.
///
/// Locked melds whose first tile is an honor tile are taken over verbatim
/// and their tiles debited from a locally-owned quantity memo before the
/// per-value computation runs, so a locked triplet is never double-counted.
/// An empty result means the hand's locked honor melds cannot be honored —
/// infeasible, not an error. A quantity outside `[0, 4]` is a fatal
/// [`HandError::MalformedHand`].
pub fn honor_meld_groupings(hand: &Hand) -> Result<Vec<Vec<Meld>>, HandError> {
    let mut memo: FxHashMap<Tile, u8> = Tile::honor_tiles()
        .into_iter()
        .map(|t| (t, hand.quantity(t)))
        .collect();

    let mut melds = Vec::new();
    let mut locked_honor = Vec::new();
    for meld in hand.locked_melds() {
        let first = meld.first_tile();
        if !first.is_honor() {
            continue;
        }
        locked_honor.push(meld.clone());
        let remaining = memo
            .get(&first)
            .copied()
            .unwrap_or(0)
            .checked_sub(meld.tiles().len() as u8);
        match remaining {
            Some(q) => {
                memo.insert(first, q);
                melds.push(meld.clone());
            }
            // Hand validation guarantees locked tiles are covered; reaching
            // here means the quantity data is already broken.
            None => {
                return Err(HandError::MalformedHand {
                    tile: first,
                    quantity: hand.quantity(first),
                })
            }
        }
    }

    for tile in Tile::honor_tiles() {
        let quantity = memo.get(&tile).copied().unwrap_or(0);
        if let Some(meld) = honor_meld_for_quantity(tile, quantity)? {
            melds.push(meld);
        }
    }

    if !melds_are_subset(&melds, &locked_honor, true) {
        return Ok(Vec::new());
    }
    Ok(vec![melds])
}

/// A quantity of 0 or 1 yields no meld: one lone honor tile just means this
/// grouping will not pan out downstream, which is not an error.
fn honor_meld_for_quantity(tile: Tile, quantity: u8) -> Result<Option<Meld>, HandError> {
    match quantity {
        0 | 1 => Ok(None),
        2 => Meld::pair(tile).map(Some),
        3 => Meld::triplet(tile).map(Some),
        4 => Meld::quadruplet(tile).map(Some),
        q => Err(HandError::MalformedHand { tile, quantity: q }),
    }
}
