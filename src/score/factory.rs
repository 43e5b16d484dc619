//! Reusable builders for meld-shape predicates.
//!
//! Most catalog rules are the same few checks with different parameters:
//! "this many pairs", "this many melds passing a filter", "a set of this
//! tile exists". The factories here close over those parameters and return
//! ready-to-route [`StandardPredicate`]s.

use std::collections::BTreeSet;

use crate::meld::{Meld, MeldKind};
use crate::tile::{Suit, Tile};

use super::predicate::StandardPredicate;
use super::result::{PointPredicateResult, PredicateId};

/// Succeeds when the number of pair melds falls within `[min, max]`.
pub fn pair_quantity_predicate(id: PredicateId, min: usize, max: usize) -> StandardPredicate {
    Box::new(move |win, _, _, _| {
        let pairs: Vec<Vec<Tile>> = win
            .melds()
            .iter()
            .filter(|m| m.is_pair())
            .map(|m| m.tiles().to_vec())
            .collect();
        let flag = (min..=max).contains(&pairs.len());
        PointPredicateResult::from_flag(id, flag, pairs)
    })
}

/// Succeeds when at least `min_count` melds pass `filter`.
///
/// Matching melds become success evidence and their index set an alternate
/// justification; on failure the non-matching melds are the counter-evidence.
pub fn filtered_melds_predicate(
    id: PredicateId,
    min_count: usize,
    filter: impl Fn(&Meld) -> bool + Send + Sync + 'static,
) -> StandardPredicate {
    Box::new(move |win, _, _, _| {
        let mut matched = Vec::new();
        let mut indices = BTreeSet::new();
        let mut unmatched = Vec::new();
        for (i, meld) in win.melds().iter().enumerate() {
            if filter(meld) {
                matched.push(meld.tiles().to_vec());
                indices.insert(i);
            } else {
                unmatched.push(meld.tiles().to_vec());
            }
        }
        if matched.len() >= min_count {
            PointPredicateResult::succeed(id, matched).with_alternate_indices(indices)
        } else {
            PointPredicateResult::fail(id, unmatched)
        }
    })
}

/// Succeeds when a triplet or quadruplet exists for every required tile.
///
/// Evidence is reported per required tile, so a caller can see which of
/// several required sets was missing.
pub fn pong_or_kongs_exist_predicate(id: PredicateId, tiles: Vec<Tile>) -> StandardPredicate {
    Box::new(move |win, _, _, _| {
        let mut success = true;
        let mut success_tiles = Vec::new();
        let mut failure_tiles = Vec::new();
        let mut indices = BTreeSet::new();
        for &tile in &tiles {
            let found = win
                .melds()
                .iter()
                .position(|m| m.is_triplet_or_quadruplet() && m.first_tile() == tile);
            match found {
                Some(i) => {
                    success_tiles.push(win.melds()[i].tiles().to_vec());
                    indices.insert(i);
                }
                None => {
                    success = false;
                    failure_tiles.push(vec![tile]);
                }
            }
        }
        if success {
            PointPredicateResult::succeed(id, success_tiles).with_alternate_indices(indices)
        } else {
            PointPredicateResult::new(id, false, success_tiles, failure_tiles, vec![], vec![])
        }
    })
}

/// Suits present in a tile list, with knitted runs already flattened into
/// their component suits by the caller.
fn suits_present(tiles: &[Tile]) -> Vec<(Suit, Vec<Tile>)> {
    let mut groups: Vec<(Suit, Vec<Tile>)> = Vec::new();
    for suit in Suit::ALL {
        let in_suit: Vec<Tile> = tiles
            .iter()
            .copied()
            .filter(|t| t.suit() == Some(suit))
            .collect();
        if !in_suit.is_empty() {
            groups.push((suit, in_suit));
        }
    }
    groups
}

/// Succeeds when the hand's tiles span exactly `desired` suited groups.
///
/// A knitted run contributes each of its tiles to that tile's own suit, so a
/// knitted hand never counts as a single-suit hand by accident. The set of
/// suited meld indices is attached as an alternate justification.
pub fn suited_group_count_predicate(id: PredicateId, desired: usize) -> StandardPredicate {
    Box::new(move |win, _, _, _| {
        let mut suited_tiles = Vec::new();
        let mut indices = BTreeSet::new();
        for (i, meld) in win.melds().iter().enumerate() {
            let has_suited = meld.tiles().iter().any(|t| t.is_suited());
            if has_suited || meld.kind() == MeldKind::KnittedRun {
                indices.insert(i);
            }
            suited_tiles.extend(meld.tiles().iter().copied().filter(|t| t.is_suited()));
        }
        let groups = suits_present(&suited_tiles);
        let tiles: Vec<Vec<Tile>> = groups.into_iter().map(|(_, tiles)| tiles).collect();
        if tiles.len() == desired {
            PointPredicateResult::succeed(id, tiles).with_alternate_indices(indices)
        } else {
            PointPredicateResult::fail(id, tiles)
        }
    })
}

/// Tile-list variant of [`suited_group_count_predicate`] for hands that have
/// no meld structure.
pub fn suited_group_count_over_tiles(
    id: PredicateId,
    desired: usize,
    tiles: &[Tile],
) -> PointPredicateResult {
    let suited: Vec<Tile> = tiles.iter().copied().filter(|t| t.is_suited()).collect();
    let groups: Vec<Vec<Tile>> = suits_present(&suited)
        .into_iter()
        .map(|(_, tiles)| tiles)
        .collect();
    PointPredicateResult::from_flag(id, groups.len() == desired, groups)
}
