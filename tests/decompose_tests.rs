//! Integration tests for the decomposition pipelines.

use hkhand::{
    analyze, decompose_seven_pairs, decompose_standard, DecomposePolicy, Dragon, Hand, Meld, Suit,
    ThirteenTileMatcher, Tile, WinContext, Wind, WinningHand,
};

use proptest::prelude::*;

fn c(value: u8) -> Tile {
    Tile::suited(Suit::Characters, value).unwrap()
}

fn o(value: u8) -> Tile {
    Tile::suited(Suit::Circles, value).unwrap()
}

/// Scenario: four honor triplets plus an honor pair, won by self-draw.
/// The honor solver is deterministic, so exactly one interpretation exists.
#[test]
fn test_all_honor_hand_has_one_interpretation() {
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
        Tile::dragon(Dragon::Red),
        Tile::dragon(Dragon::Red),
        Tile::dragon(Dragon::Red),
        Tile::dragon(Dragon::Green),
        Tile::dragon(Dragon::Green),
    ];
    let hand = Hand::new(&tiles, vec![]).unwrap();
    let ctx = WinContext::new(Tile::dragon(Dragon::Green), true);

    let wins = decompose_standard(&hand, &ctx, DecomposePolicy::new()).unwrap();
    assert_eq!(wins.len(), 1);
    let win = &wins[0];
    assert!(win.is_self_drawn());
    assert!(win.winning_meld().is_pair());
}

/// Scenario: every decomposition of a hand must cover exactly the hand's
/// tiles, regardless of which interpretation was chosen.
#[test]
fn test_decompositions_cover_the_hand() {
    let tiles = vec![
        c(1),
        c(1),
        c(1),
        c(2),
        c(2),
        c(2),
        c(3),
        c(3),
        c(3),
        o(5),
        o(6),
        o(7),
        Tile::wind(Wind::North),
        Tile::wind(Wind::North),
    ];
    let hand = Hand::new(&tiles, vec![]).unwrap();
    let ctx = WinContext::new(c(2), false);
    let wins = decompose_standard(&hand, &ctx, DecomposePolicy::new()).unwrap();
    assert!(wins.len() > 1, "111 222 333 also reads as three runs");

    let mut expected = tiles.clone();
    expected.sort();
    for win in &wins {
        let mut covered: Vec<Tile> = win
            .melds()
            .iter()
            .flat_map(|m| m.tiles().iter().copied())
            .collect();
        covered.sort();
        assert_eq!(covered, expected);
        assert_eq!(win.melds().len(), 5);
        assert!(win.winning_meld().contains(c(2)));
    }
}

/// Scenario: a hand that is simultaneously a seven-pairs shape and a
/// five-meld shape is reported by both pipelines.
#[test]
fn test_overlapping_shapes_come_from_both_pipelines() {
    // 22 33 44 o22 o33 o44 + EE: seven pairs, and also 234 234 o234 o234 EE
    let mut tiles = Vec::new();
    for v in [2, 3, 4] {
        tiles.extend([c(v), c(v), o(v), o(v)]);
    }
    tiles.extend([Tile::wind(Wind::East), Tile::wind(Wind::East)]);
    let hand = Hand::new(&tiles, vec![]).unwrap();
    let ctx = WinContext::new(Tile::wind(Wind::East), true);

    let five = decompose_standard(&hand, &ctx, DecomposePolicy::new()).unwrap();
    assert!(!five.is_empty());
    let seven = decompose_seven_pairs(&hand, &ctx, DecomposePolicy::new()).unwrap();
    assert_eq!(seven.len(), 1);

    let all = analyze(&hand, &ctx, DecomposePolicy::new(), &[]).unwrap();
    assert_eq!(all.len(), five.len() + seven.len());
}

/// Scenario: locked exposed melds keep their exposure through decomposition
/// and the winning tile is forced into the only locked meld holding it.
#[test]
fn test_locked_meld_exposure_survives() {
    let locked = Meld::triplet(o(5)).unwrap().cloned_with_exposed(true);
    let tiles = vec![
        c(1),
        c(2),
        c(3),
        c(7),
        c(8),
        c(9),
        o(5),
        o(5),
        o(5),
        Tile::dragon(Dragon::White),
        Tile::dragon(Dragon::White),
        Tile::dragon(Dragon::White),
        Tile::wind(Wind::North),
        Tile::wind(Wind::North),
    ];
    let hand = Hand::new(&tiles, vec![locked.clone()]).unwrap();
    let ctx = WinContext::new(o(5), false);

    let wins = decompose_standard(&hand, &ctx, DecomposePolicy::new()).unwrap();
    assert_eq!(wins.len(), 1);
    let win = &wins[0];
    assert_eq!(win.winning_meld(), &locked);
    assert!(win.melds().contains(&locked));
}

/// Scenario: flowers ride along without participating in melds.
#[test]
fn test_flowers_are_carried_not_melded() {
    let mut tiles: Vec<Tile> = (1..=9).map(c).collect();
    tiles.extend([
        o(1),
        o(2),
        o(3),
        Tile::wind(Wind::East),
        Tile::wind(Wind::East),
    ]);
    tiles.push(Tile::flower(hkhand::FlowerKind::Gentleman, 2).unwrap());
    let hand = Hand::new(&tiles, vec![]).unwrap();
    let ctx = WinContext::new(c(5), true);
    let wins = decompose_standard(&hand, &ctx, DecomposePolicy::new()).unwrap();
    assert_eq!(wins.len(), 1);
    assert_eq!(
        wins[0].flowers(),
        &[Tile::flower(hkhand::FlowerKind::Gentleman, 2).unwrap()]
    );
    assert!(wins[0]
        .melds()
        .iter()
        .all(|m| m.tiles().iter().all(|t| !t.is_flower())));
}

/// Scenario: thirteen orphans is only reachable through the special-hand
/// pipeline; the meld pipelines see nothing.
#[test]
fn test_thirteen_orphans_routes_through_special_pipeline() {
    let mut tiles = ThirteenTileMatcher::thirteen_orphans()
        .required_tiles()
        .to_vec();
    tiles.push(c(9));
    let hand = Hand::new(&tiles, vec![]).unwrap();
    let ctx = WinContext::new(c(9), true);

    assert!(decompose_standard(&hand, &ctx, DecomposePolicy::new())
        .unwrap()
        .is_empty());
    assert!(decompose_seven_pairs(&hand, &ctx, DecomposePolicy::new())
        .unwrap()
        .is_empty());

    let matchers = [ThirteenTileMatcher::thirteen_orphans()];
    let wins = analyze(&hand, &ctx, DecomposePolicy::new(), &matchers).unwrap();
    assert_eq!(wins.len(), 1);
    match &wins[0] {
        WinningHand::Special(win) => {
            assert_eq!(win.pair().first_tile(), c(9));
            assert_eq!(win.singles().len(), 12);
        }
        WinningHand::Standard(_) => panic!("expected a special-hand win"),
    }
}

/// Decomposition is a pure function: running it twice over the same inputs
/// yields identical output, including ordering.
#[test]
fn test_decomposition_is_deterministic() {
    let tiles = vec![
        c(1),
        c(1),
        c(1),
        c(2),
        c(3),
        c(4),
        c(4),
        c(4),
        o(5),
        o(6),
        o(7),
        Tile::wind(Wind::East),
        Tile::wind(Wind::East),
        Tile::wind(Wind::East),
    ];
    let hand = Hand::new(&tiles, vec![]).unwrap();
    let ctx = WinContext::new(c(1), true);
    let first = decompose_standard(&hand, &ctx, DecomposePolicy::new()).unwrap();
    let second = decompose_standard(&hand, &ctx, DecomposePolicy::new()).unwrap();
    assert_eq!(first, second);
}

proptest! {
    /// Any hand built from three full runs, a triplet, and a pair is a
    /// five-meld win, and every reported interpretation covers its tiles.
    #[test]
    fn prop_constructed_wins_decompose(
        starts in proptest::collection::vec(1u8..=7, 3),
        triplet_value in 1u8..=9,
        pair_wind in 0usize..4,
    ) {
        let winds = [Wind::East, Wind::South, Wind::West, Wind::North];
        let mut tiles = Vec::new();
        for &s in &starts {
            tiles.extend([c(s), c(s + 1), c(s + 2)]);
        }
        tiles.extend([o(triplet_value); 3]);
        tiles.extend([Tile::wind(winds[pair_wind]); 2]);

        // 4 copies of one tile at most; skip degenerate draws
        let hand = match Hand::new(&tiles, vec![]) {
            Ok(hand) => hand,
            Err(_) => return Ok(()),
        };
        let ctx = WinContext::new(o(triplet_value), true);
        let wins = decompose_standard(&hand, &ctx, DecomposePolicy::new()).unwrap();
        prop_assert!(!wins.is_empty());

        let mut expected = tiles.clone();
        expected.sort();
        for win in &wins {
            let mut covered: Vec<Tile> = win
                .melds()
                .iter()
                .flat_map(|m| m.tiles().iter().copied())
                .collect();
            covered.sort();
            prop_assert_eq!(covered, expected.clone());
        }
    }

    /// Seven pairs of distinct tiles always decompose to exactly one win.
    #[test]
    fn prop_seven_distinct_pairs_decompose(values in proptest::sample::subsequence(
        (1u8..=9).collect::<Vec<_>>(), 7)
    ) {
        let mut tiles = Vec::new();
        for &v in &values {
            tiles.extend([c(v), c(v)]);
        }
        let hand = Hand::new(&tiles, vec![]).unwrap();
        let ctx = WinContext::new(c(values[0]), true);
        let wins = decompose_seven_pairs(&hand, &ctx, DecomposePolicy::new()).unwrap();
        prop_assert_eq!(wins.len(), 1);
        prop_assert!(wins[0].melds().iter().all(|m| m.is_pair()));
    }
}
