//! Integration tests for the scoring framework.

use hkhand::score::rules;
use hkhand::{
    analyze, DecomposePolicy, Dragon, Hand, Meld, PointPredicateResult, PredicateId, RoundContext,
    RuleOptions, StandardWin, Suit, ThirteenTileMatcher, Tile, WinContext, Wind, WinningHand,
};

fn c(value: u8) -> Tile {
    Tile::suited(Suit::Characters, value).unwrap()
}

fn o(value: u8) -> Tile {
    Tile::suited(Suit::Circles, value).unwrap()
}

fn round() -> RoundContext {
    RoundContext::new(Wind::West, Wind::East)
}

fn evaluate_catalog(
    win: &WinningHand,
    options: RuleOptions,
) -> Vec<(PredicateId, PointPredicateResult)> {
    let ctx = WinContext::new(win.winning_tile(), win.is_self_drawn());
    rules::standard_catalog()
        .iter()
        .map(|rule| (rule.id(), rule.evaluate(win, &ctx, &round(), &options)))
        .collect()
}

fn succeeding_ids(results: &[(PredicateId, PointPredicateResult)]) -> Vec<PredicateId> {
    results
        .iter()
        .filter(|(_, r)| r.is_success())
        .map(|(id, _)| *id)
        .collect()
}

/// Scenario: an all-runs one-suit hand decomposed from raw tiles satisfies
/// the run-shape and suit rules and nothing set-shaped.
#[test]
fn test_catalog_over_decomposed_common_hand() {
    let tiles = vec![
        c(1),
        c(2),
        c(3),
        c(4),
        c(5),
        c(6),
        c(7),
        c(8),
        c(9),
        c(4),
        c(5),
        c(6),
        c(2),
        c(2),
    ];
    let hand = Hand::new(&tiles, vec![]).unwrap();
    let ctx = WinContext::new(c(1), true);
    let wins = analyze(&hand, &ctx, DecomposePolicy::new(), &[]).unwrap();
    assert!(!wins.is_empty());

    // at least one interpretation is all runs plus the 2-2 pair
    let catalogs: Vec<Vec<PredicateId>> = wins
        .iter()
        .map(|win| succeeding_ids(&evaluate_catalog(win, RuleOptions::default())))
        .collect();
    let best = catalogs
        .iter()
        .find(|ids| ids.contains(&PredicateId::COMMON_HAND))
        .expect("an all-runs interpretation must exist");
    assert!(best.contains(&PredicateId::FULL_FLUSH));
    assert!(best.contains(&PredicateId::SELF_DRAW));
    assert!(best.contains(&PredicateId::CONCEALED_HAND));
    assert!(!best.contains(&PredicateId::ALL_TRIPLETS));
    assert!(!best.contains(&PredicateId::ALL_HONORS));
    assert!(!best.contains(&PredicateId::MIXED_ONE_SUIT));
}

/// Scenario: different interpretations of the same tiles score differently.
/// 111 222 333 reads as all-triplets or as all-runs; the catalog must
/// disagree across the two.
#[test]
fn test_interpretations_score_differently() {
    let mut tiles = Vec::new();
    for v in [1, 2, 3] {
        tiles.extend([c(v), c(v), c(v)]);
    }
    tiles.extend([o(7), o(7), o(7), Tile::wind(Wind::North), Tile::wind(Wind::North)]);
    let hand = Hand::new(&tiles, vec![]).unwrap();
    let ctx = WinContext::new(c(1), true);
    let wins = analyze(&hand, &ctx, DecomposePolicy::new(), &[]).unwrap();

    let mut saw_triplet_reading = false;
    let mut saw_run_reading = false;
    for win in &wins {
        let ids = succeeding_ids(&evaluate_catalog(win, RuleOptions::default()));
        if ids.contains(&PredicateId::SELF_TRIPLETS) {
            saw_triplet_reading = true;
        } else {
            saw_run_reading = true;
        }
    }
    assert!(saw_triplet_reading);
    assert!(saw_run_reading);
}

/// Routing law: every meld-shape rule auto-fails on a special hand, the
/// concealed-hand rule auto-succeeds, and delegated rules actually run.
#[test]
fn test_special_hand_routing() {
    let mut tiles = ThirteenTileMatcher::thirteen_orphans()
        .required_tiles()
        .to_vec();
    tiles.push(Tile::dragon(Dragon::Red));
    let hand = Hand::new(&tiles, vec![]).unwrap();
    let ctx = WinContext::new(Tile::dragon(Dragon::Red), true);
    let wins = analyze(
        &hand,
        &ctx,
        DecomposePolicy::new(),
        &[ThirteenTileMatcher::thirteen_orphans()],
    )
    .unwrap();
    assert_eq!(wins.len(), 1);

    let ids = succeeding_ids(&evaluate_catalog(&wins[0], RuleOptions::default()));
    assert!(ids.contains(&PredicateId::THIRTEEN_ORPHANS));
    assert!(ids.contains(&PredicateId::CONCEALED_HAND));
    assert!(ids.contains(&PredicateId::FULLY_CONCEALED));
    assert!(ids.contains(&PredicateId::SELF_DRAW));
    // orphans span every suit and both honor classes
    assert!(!ids.contains(&PredicateId::ALL_HONORS));
    assert!(!ids.contains(&PredicateId::FULL_FLUSH));
    // meld-shape rules auto-fail
    assert!(!ids.contains(&PredicateId::SEVEN_PAIRS));
    assert!(!ids.contains(&PredicateId::COMMON_HAND));
    assert!(!ids.contains(&PredicateId::ALL_TRIPLETS));
}

/// Conjunction law: a composed result succeeds iff every child does, and
/// evidence from passing children survives an overall failure.
#[test]
fn test_conjunction_evidence() {
    let pass = PointPredicateResult::succeed(PredicateId::SUB_ONE_PAIR, vec![vec![c(2), c(2)]]);
    let fail = PointPredicateResult::fail(PredicateId::SUB_FOUR_RUNS, vec![vec![c(5), c(5), c(5)]]);

    let combined = PointPredicateResult::all(PredicateId::COMMON_HAND, vec![pass, fail]);
    assert!(!combined.is_success());
    assert_eq!(combined.success_tiles(), &[vec![c(2), c(2)]]);
    assert_eq!(combined.failure_tiles(), &[vec![c(5), c(5), c(5)]]);
    assert_eq!(combined.sub_results().len(), 2);
    assert!(combined.sub_results()[0].is_success());
    assert!(!combined.sub_results()[1].is_success());
}

/// Scenario: seat and prevailing wind rules follow the round context, not
/// the hand.
#[test]
fn test_wind_rules_follow_round_context() {
    let melds = vec![
        Meld::triplet(Tile::wind(Wind::West)).unwrap(),
        Meld::run(Suit::Characters, 1).unwrap(),
        Meld::run(Suit::Characters, 4).unwrap(),
        Meld::run(Suit::Characters, 7).unwrap(),
        Meld::pair(o(5)).unwrap(),
    ];
    let win =
        WinningHand::Standard(StandardWin::new(melds, 1, c(1), vec![]).unwrap());

    let results = evaluate_catalog(&win, RuleOptions::default());
    let ids = succeeding_ids(&results);
    // round() seats the winner West with East prevailing
    assert!(ids.contains(&PredicateId::SEAT_WIND));
    assert!(!ids.contains(&PredicateId::PREVAILING_WIND));
}

/// Results serialize with their identifier and evidence intact; options
/// round-trip through serde.
#[test]
fn test_serde_surfaces() {
    let result = PointPredicateResult::succeed(PredicateId::SELF_DRAW, vec![vec![c(1)]]);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["id"], "self_draw");
    assert_eq!(json["success"], true);

    let options = RuleOptions::new().with_self_triplets_triplets_only(true);
    let text = serde_json::to_string(&options).unwrap();
    let back: RuleOptions = serde_json::from_str(&text).unwrap();
    assert_eq!(back, options);

    let meld = Meld::run(Suit::Circles, 3).unwrap();
    let text = serde_json::to_string(&meld).unwrap();
    let back: Meld = serde_json::from_str(&text).unwrap();
    assert_eq!(back, meld);
}
