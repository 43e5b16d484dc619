//! Suited-tile partition enumeration.
//!
//! Unlike honors, suited tiles admit genuinely ambiguous groupings
//! (`1-1-1 2-3-4` vs `1-2-3` twice plus leftovers, and so on), so this
//! solver backtracks over the per-suit count vector and returns every
//! exhaustive partition into pairs, triplets, quadruplets, and runs.

use rustc_hash::FxHashSet;

use crate::error::HandError;
use crate::hand::Hand;
use crate::meld::Meld;
use crate::tile::{Suit, Tile};

/// Enumerate every way to partition the hand's suited tiles into melds.
///
/// Each returned grouping covers every suited tile in the hand exactly once;
/// melds are emitted concealed. Suits partition independently, so the result
/// is the cross product of the per-suit partition sets. A suit whose tiles
/// cannot be exhaustively grouped kills the whole enumeration (empty result).
/// A per-tile quantity above 4 is a fatal [`HandError::MalformedHand`].
pub fn suited_meld_groupings(hand: &Hand) -> Result<Vec<Vec<Meld>>, HandError> {
    let mut groupings: Vec<Vec<Meld>> = vec![Vec::new()];
    for suit in Suit::ALL {
        let per_suit = suit_partitions(hand, suit)?;
        let mut combined = Vec::with_capacity(groupings.len() * per_suit.len());
        for prefix in &groupings {
            for partition in &per_suit {
                let mut next = prefix.clone();
                next.extend(partition.iter().cloned());
                combined.push(next);
            }
        }
        groupings = combined;
        if groupings.is_empty() {
            return Ok(Vec::new());
        }
    }
    Ok(groupings)
}

/// All exhaustive partitions of one suit's tiles. A suit with no tiles
/// contributes the single empty partition; a suit whose tiles cannot be
/// covered contributes zero partitions, which empties the cross product.
fn suit_partitions(hand: &Hand, suit: Suit) -> Result<Vec<Vec<Meld>>, HandError> {
    let mut counts = hand.multiset().suit_counts(suit);
    for (i, &q) in counts.iter().enumerate() {
        if q > 4 {
            return Err(HandError::MalformedHand {
                tile: Tile::suited(suit, i as u8 + 1)?,
                quantity: q,
            });
        }
    }
    if counts.iter().all(|&q| q == 0) {
        return Ok(vec![Vec::new()]);
    }

    let mut seen: FxHashSet<Vec<Meld>> = FxHashSet::default();
    let mut current = Vec::new();
    let mut out = Vec::new();
    enumerate(suit, &mut counts, &mut current, &mut seen, &mut out)?;
    // deterministic ordering regardless of backtracking path
    out.sort();
    Ok(out)
}

/// Recursive backtracking over the count vector. At the lowest non-empty
/// value we try every meld consuming that value; distinct recursion orders
/// can reach the same multiset of melds, hence the sorted-normal-form dedup.
fn enumerate(
    suit: Suit,
    counts: &mut [u8; 9],
    current: &mut Vec<Meld>,
    seen: &mut FxHashSet<Vec<Meld>>,
    out: &mut Vec<Vec<Meld>>,
) -> Result<(), HandError> {
    let Some(lowest) = counts.iter().position(|&q| q > 0) else {
        let mut normal = current.clone();
        normal.sort();
        if seen.insert(normal.clone()) {
            out.push(normal);
        }
        return Ok(());
    };
    let value = lowest as u8 + 1;
    let quantity = counts[lowest];
    let tile = Tile::suited(suit, value)?;

    if quantity >= 2 {
        counts[lowest] -= 2;
        current.push(Meld::pair(tile)?);
        enumerate(suit, counts, current, seen, out)?;
        current.pop();
        counts[lowest] += 2;
    }
    if quantity >= 3 {
        counts[lowest] -= 3;
        current.push(Meld::triplet(tile)?);
        enumerate(suit, counts, current, seen, out)?;
        current.pop();
        counts[lowest] += 3;
    }
    if quantity == 4 {
        counts[lowest] -= 4;
        current.push(Meld::quadruplet(tile)?);
        enumerate(suit, counts, current, seen, out)?;
        current.pop();
        counts[lowest] += 4;
    }
    if value <= 7 && counts[lowest + 1] > 0 && counts[lowest + 2] > 0 {
        counts[lowest] -= 1;
        counts[lowest + 1] -= 1;
        counts[lowest + 2] -= 1;
        current.push(Meld::run(suit, value)?);
        enumerate(suit, counts, current, seen, out)?;
        current.pop();
        counts[lowest] += 1;
        counts[lowest + 1] += 1;
        counts[lowest + 2] += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meld::{flatten_tiles, melds_are_subset, MeldKind};
    use crate::tile::{Dragon, Wind};

    fn c(value: u8) -> Tile {
        Tile::suited(Suit::Characters, value).unwrap()
    }

    fn b(value: u8) -> Tile {
        Tile::suited(Suit::Bamboos, value).unwrap()
    }

    #[test]
    fn test_simple_run_is_found() {
        let tiles = vec![
            c(1),
            c(2),
            c(3),
            // honors pad the hand to a legal size; the solver ignores them
            Tile::wind(Wind::East),
            Tile::wind(Wind::East),
            Tile::wind(Wind::East),
            Tile::wind(Wind::South),
            Tile::wind(Wind::South),
            Tile::wind(Wind::South),
            Tile::wind(Wind::West),
            Tile::wind(Wind::West),
            Tile::wind(Wind::West),
            Tile::dragon(Dragon::Red),
            Tile::dragon(Dragon::Red),
        ];
        let hand = Hand::new(&tiles, vec![]).unwrap();
        let groupings = suited_meld_groupings(&hand).unwrap();
        assert_eq!(groupings.len(), 1);
        assert_eq!(groupings[0], vec![Meld::run(Suit::Characters, 1).unwrap()]);
    }

    #[test]
    fn test_ambiguous_tiles_give_multiple_partitions() {
        // 111222333 partitions three ways: three triplets, three runs, or
        // three pairs plus a run. Pairs are legal partition members here;
        // shape filters downstream decide which readings survive.
        let mut tiles: Vec<Tile> = Vec::new();
        for v in 1..=3 {
            for _ in 0..3 {
                tiles.push(c(v));
            }
        }
        tiles.extend([
            Tile::dragon(Dragon::Green),
            Tile::dragon(Dragon::Green),
            Tile::dragon(Dragon::Green),
            Tile::wind(Wind::North),
            Tile::wind(Wind::North),
        ]);
        let hand = Hand::new(&tiles, vec![]).unwrap();
        let groupings = suited_meld_groupings(&hand).unwrap();
        assert_eq!(groupings.len(), 3);
        assert!(groupings
            .iter()
            .any(|g| g.iter().all(|m| m.kind() == MeldKind::Triplet)));
        assert!(groupings
            .iter()
            .any(|g| g.iter().all(|m| m.kind() == MeldKind::Run)));
        let pairs_plus_run = vec![
            Meld::pair(c(1)).unwrap(),
            Meld::pair(c(2)).unwrap(),
            Meld::pair(c(3)).unwrap(),
            Meld::run(Suit::Characters, 1).unwrap(),
        ];
        assert!(groupings
            .iter()
            .any(|g| melds_are_subset(g, &pairs_plus_run, true) && g.len() == 4));
    }

    #[test]
    fn test_no_duplicate_partitions() {
        // 11123444 in one suit has several dead ends and overlapping
        // recursion orders; every surviving partition must be unique.
        let tiles = vec![
            c(1),
            c(1),
            c(1),
            c(2),
            c(3),
            c(4),
            c(4),
            c(4),
            b(5),
            b(6),
            b(7),
            Tile::wind(Wind::East),
            Tile::wind(Wind::East),
            Tile::wind(Wind::East),
        ];
        let hand = Hand::new(&tiles, vec![]).unwrap();
        let groupings = suited_meld_groupings(&hand).unwrap();
        let mut deduped: Vec<_> = groupings.clone();
        deduped.dedup();
        assert_eq!(groupings, deduped);
        for grouping in &groupings {
            let mut flat = flatten_tiles(grouping);
            flat.sort();
            let mut expected: Vec<Tile> =
                vec![c(1), c(1), c(1), c(2), c(3), c(4), c(4), c(4), b(5), b(6), b(7)];
            expected.sort();
            assert_eq!(flat, expected);
        }
    }

    #[test]
    fn test_unpartitionable_suit_yields_nothing() {
        let tiles = vec![
            c(1),
            c(5),
            c(9),
            Tile::wind(Wind::East),
            Tile::wind(Wind::East),
            Tile::wind(Wind::East),
            Tile::wind(Wind::South),
            Tile::wind(Wind::South),
            Tile::wind(Wind::South),
            Tile::wind(Wind::West),
            Tile::wind(Wind::West),
            Tile::wind(Wind::West),
            Tile::dragon(Dragon::Red),
            Tile::dragon(Dragon::Red),
        ];
        let hand = Hand::new(&tiles, vec![]).unwrap();
        assert!(suited_meld_groupings(&hand).unwrap().is_empty());
    }

    #[test]
    fn test_all_honor_hand_gives_single_empty_grouping() {
        let tiles = vec![
            Tile::wind(Wind::East),
            Tile::wind(Wind::East),
            Tile::wind(Wind::East),
            Tile::wind(Wind::South),
            Tile::wind(Wind::South),
            Tile::wind(Wind::South),
            Tile::wind(Wind::West),
            Tile::wind(Wind::West),
            Tile::wind(Wind::West),
            Tile::wind(Wind::North),
            Tile::wind(Wind::North),
            Tile::wind(Wind::North),
            Tile::dragon(Dragon::Red),
            Tile::dragon(Dragon::Red),
        ];
        let hand = Hand::new(&tiles, vec![]).unwrap();
        assert_eq!(suited_meld_groupings(&hand).unwrap(), vec![Vec::new()]);
    }

    #[test]
    fn test_quantity_five_is_malformed() {
        let tiles: Vec<Tile> = std::iter::repeat(c(3))
            .take(5)
            .chain(std::iter::repeat(Tile::wind(Wind::East)).take(9))
            .collect();
        let hand = Hand::new_unchecked(&tiles, vec![]);
        assert!(matches!(
            suited_meld_groupings(&hand),
            Err(HandError::MalformedHand { quantity: 5, .. })
        ));
    }
}
