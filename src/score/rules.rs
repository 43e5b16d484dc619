//! The named rule catalog.
//!
//! Each function builds one [`RulePredicate`]: the meld-shape test for
//! standard hands plus the rule's behavior on fixed-pattern hands.
//! [`standard_catalog`] collects every rule for callers that want to run
//! the whole book against a winning hand.

use crate::analyze::ThirteenTileMatcher;
use crate::hand::StandardWin;
use crate::meld::MeldKind;
use crate::tile::{Dragon, Tile, Wind};

use super::context::RoundContext;
use super::factory::{
    filtered_melds_predicate, pair_quantity_predicate, pong_or_kongs_exist_predicate,
    suited_group_count_over_tiles, suited_group_count_predicate,
};
use super::predicate::{predicate_and, RulePredicate, SpecialHandling, StandardPredicate};
use super::result::{PointPredicateResult, PredicateId};

fn one_pair() -> StandardPredicate {
    pair_quantity_predicate(PredicateId::SUB_ONE_PAIR, 1, 1)
}

fn four_runs() -> StandardPredicate {
    filtered_melds_predicate(PredicateId::SUB_FOUR_RUNS, 4, |m| {
        matches!(m.kind(), MeldKind::Run | MeldKind::KnittedRun)
    })
}

fn four_sets() -> StandardPredicate {
    filtered_melds_predicate(PredicateId::SUB_FOUR_SETS, 4, |m| {
        m.is_triplet_or_quadruplet()
    })
}

fn four_kongs() -> StandardPredicate {
    filtered_melds_predicate(PredicateId::SUB_FOUR_KONGS, 4, |m| {
        m.kind() == MeldKind::Quadruplet
    })
}

fn four_concealed_sets(triplets_only: bool) -> StandardPredicate {
    filtered_melds_predicate(PredicateId::SUB_FOUR_CONCEALED_SETS, 4, move |m| {
        !m.exposed()
            && if triplets_only {
                m.kind() == MeldKind::Triplet
            } else {
                m.is_triplet_or_quadruplet()
            }
    })
}

fn four_concealed_non_pair_melds() -> StandardPredicate {
    filtered_melds_predicate(PredicateId::SUB_FOUR_CONCEALED_NON_PAIR, 4, |m| {
        !m.exposed() && !m.is_pair()
    })
}

fn four_concealed_melds() -> StandardPredicate {
    // the pair counts here, unlike the non-pair variant
    filtered_melds_predicate(PredicateId::SUB_FOUR_CONCEALED_MELDS, 4, |m| !m.exposed())
}

/// Succeeds when some pair meld satisfies `test`.
fn pair_predicate(
    id: PredicateId,
    test: impl Fn(Tile, &RoundContext) -> bool + Send + Sync + 'static,
) -> StandardPredicate {
    Box::new(move |win, _, round_ctx, _| {
        let pairs: Vec<&crate::meld::Meld> =
            win.melds().iter().filter(|m| m.is_pair()).collect();
        let hit = pairs.iter().find(|m| test(m.first_tile(), round_ctx));
        match hit {
            Some(pair) => PointPredicateResult::succeed(id, vec![pair.tiles().to_vec()]),
            None => PointPredicateResult::fail(
                id,
                pairs.iter().map(|m| m.tiles().to_vec()).collect(),
            ),
        }
    })
}

fn no_flowers() -> StandardPredicate {
    Box::new(|win, _, _, _| {
        PointPredicateResult::from_flag(
            PredicateId::SUB_NO_FLOWERS,
            win.flowers().is_empty(),
            if win.flowers().is_empty() {
                vec![]
            } else {
                vec![win.flowers().to_vec()]
            },
        )
    })
}

fn tiles_by_class(win: &StandardWin, suited: bool) -> Vec<Tile> {
    win.melds()
        .iter()
        .flat_map(|m| m.tiles().iter().copied())
        .filter(|t| t.is_suited() == suited)
        .collect()
}

fn no_suited_tiles() -> StandardPredicate {
    Box::new(|win, _, _, _| {
        let suited = tiles_by_class(win, true);
        if suited.is_empty() {
            PointPredicateResult::succeed(PredicateId::SUB_NO_SUITED_TILES, vec![])
        } else {
            PointPredicateResult::fail(PredicateId::SUB_NO_SUITED_TILES, vec![suited])
        }
    })
}

fn no_honor_tiles() -> StandardPredicate {
    Box::new(|win, _, _, _| {
        let honors = tiles_by_class(win, false);
        if honors.is_empty() {
            PointPredicateResult::succeed(PredicateId::SUB_NO_HONOR_TILES, vec![])
        } else {
            PointPredicateResult::fail(PredicateId::SUB_NO_HONOR_TILES, vec![honors])
        }
    })
}

fn has_honor_tiles() -> StandardPredicate {
    Box::new(|win, _, _, _| {
        let honors = tiles_by_class(win, false);
        PointPredicateResult::from_flag(
            PredicateId::SUB_HAS_HONOR_TILES,
            !honors.is_empty(),
            if honors.is_empty() { vec![] } else { vec![honors] },
        )
    })
}

fn tile_class_result(id: PredicateId, tiles: &[Tile], want_suited: bool, want_present: bool) -> PointPredicateResult {
    let class: Vec<Tile> = tiles
        .iter()
        .copied()
        .filter(|t| t.is_suited() == want_suited)
        .collect();
    let flag = class.is_empty() != want_present;
    let evidence = if class.is_empty() { vec![] } else { vec![class] };
    PointPredicateResult::from_flag(id, flag, evidence)
}

/// Seven pairs of tiles. Meaningless for fixed-pattern hands.
pub fn seven_pairs() -> RulePredicate {
    RulePredicate::auto_fail(
        PredicateId::SEVEN_PAIRS,
        pair_quantity_predicate(PredicateId::SEVEN_PAIRS, 7, 7),
    )
}

/// Four runs and a pair; optionally the pair must be valueless.
pub fn common_hand() -> RulePredicate {
    RulePredicate::auto_fail(
        PredicateId::COMMON_HAND,
        Box::new(|win, win_ctx, round_ctx, options| {
            let mut children = vec![one_pair(), four_runs(), no_flowers()];
            if options.common_hand_requires_valueless_pair() {
                children.push(pair_predicate(
                    PredicateId::SUB_VALUELESS_PAIR,
                    |tile, round_ctx| match tile {
                        Tile::Dragon(_) => false,
                        Tile::Wind(wind) => {
                            wind != round_ctx.seat_wind() && wind != round_ctx.prevailing_wind()
                        }
                        _ => true,
                    },
                ));
            }
            predicate_and(PredicateId::COMMON_HAND, children)(win, win_ctx, round_ctx, options)
        }),
    )
}

/// Four triplets or quadruplets and a pair.
pub fn all_triplets() -> RulePredicate {
    RulePredicate::auto_fail(
        PredicateId::ALL_TRIPLETS,
        predicate_and(PredicateId::ALL_TRIPLETS, vec![one_pair(), four_sets()]),
    )
}

/// Four quadruplets and a pair.
pub fn all_kongs() -> RulePredicate {
    RulePredicate::auto_fail(
        PredicateId::ALL_KONGS,
        predicate_and(PredicateId::ALL_KONGS, vec![one_pair(), four_kongs()]),
    )
}

/// Two dragon sets plus a pair of the third dragon.
pub fn small_three_dragons() -> RulePredicate {
    RulePredicate::auto_fail(
        PredicateId::SMALL_THREE_DRAGONS,
        predicate_and(
            PredicateId::SMALL_THREE_DRAGONS,
            vec![
                pair_predicate(PredicateId::SUB_DRAGON_PAIR, |tile, _| {
                    matches!(tile, Tile::Dragon(_))
                }),
                filtered_melds_predicate(PredicateId::SUB_TWO_DRAGON_SETS, 2, |m| {
                    m.is_triplet_or_quadruplet() && matches!(m.first_tile(), Tile::Dragon(_))
                }),
            ],
        ),
    )
}

/// A set of every dragon.
pub fn great_three_dragons() -> RulePredicate {
    let dragons: Vec<Tile> = Dragon::ALL.iter().map(|&d| Tile::dragon(d)).collect();
    RulePredicate::auto_fail(
        PredicateId::GREAT_THREE_DRAGONS,
        predicate_and(
            PredicateId::GREAT_THREE_DRAGONS,
            vec![pong_or_kongs_exist_predicate(
                PredicateId::SUB_THREE_DRAGON_SETS,
                dragons,
            )],
        ),
    )
}

/// Three wind sets plus a pair of the fourth wind.
pub fn small_four_winds() -> RulePredicate {
    RulePredicate::auto_fail(
        PredicateId::SMALL_FOUR_WINDS,
        predicate_and(
            PredicateId::SMALL_FOUR_WINDS,
            vec![
                pair_predicate(PredicateId::SUB_WIND_PAIR, |tile, _| {
                    matches!(tile, Tile::Wind(_))
                }),
                filtered_melds_predicate(PredicateId::SUB_THREE_WIND_SETS, 3, |m| {
                    m.is_triplet_or_quadruplet() && matches!(m.first_tile(), Tile::Wind(_))
                }),
            ],
        ),
    )
}

/// A set of every wind.
pub fn big_four_winds() -> RulePredicate {
    let winds: Vec<Tile> = Wind::ALL.iter().map(|&w| Tile::wind(w)).collect();
    RulePredicate::auto_fail(
        PredicateId::BIG_FOUR_WINDS,
        predicate_and(
            PredicateId::BIG_FOUR_WINDS,
            vec![pong_or_kongs_exist_predicate(
                PredicateId::SUB_FOUR_WIND_SETS,
                winds,
            )],
        ),
    )
}

/// A set of the winner's seat wind.
pub fn seat_wind() -> RulePredicate {
    RulePredicate::auto_fail(
        PredicateId::SEAT_WIND,
        Box::new(|win, win_ctx, round_ctx, options| {
            let tile = Tile::wind(round_ctx.seat_wind());
            pong_or_kongs_exist_predicate(PredicateId::SEAT_WIND, vec![tile])(
                win, win_ctx, round_ctx, options,
            )
        }),
    )
}

/// A set of the round's prevailing wind.
pub fn prevailing_wind() -> RulePredicate {
    RulePredicate::auto_fail(
        PredicateId::PREVAILING_WIND,
        Box::new(|win, win_ctx, round_ctx, options| {
            let tile = Tile::wind(round_ctx.prevailing_wind());
            pong_or_kongs_exist_predicate(PredicateId::PREVAILING_WIND, vec![tile])(
                win, win_ctx, round_ctx, options,
            )
        }),
    )
}

/// Honor tiles only.
pub fn all_honors() -> RulePredicate {
    RulePredicate::delegating(
        PredicateId::ALL_HONORS,
        predicate_and(
            PredicateId::ALL_HONORS,
            vec![no_suited_tiles(), has_honor_tiles()],
        ),
        Box::new(|win, _, _, _| {
            let tiles = win.all_tiles();
            PointPredicateResult::all(
                PredicateId::ALL_HONORS,
                vec![
                    tile_class_result(PredicateId::SUB_NO_SUITED_TILES, &tiles, true, false),
                    tile_class_result(PredicateId::SUB_HAS_HONOR_TILES, &tiles, false, true),
                ],
            )
        }),
    )
}

/// One suit, no honors.
pub fn full_flush() -> RulePredicate {
    RulePredicate::delegating(
        PredicateId::FULL_FLUSH,
        predicate_and(
            PredicateId::FULL_FLUSH,
            vec![
                suited_group_count_predicate(PredicateId::SUB_ONE_SUIT, 1),
                no_honor_tiles(),
            ],
        ),
        Box::new(|win, _, _, _| {
            let tiles = win.all_tiles();
            PointPredicateResult::all(
                PredicateId::FULL_FLUSH,
                vec![
                    suited_group_count_over_tiles(PredicateId::SUB_ONE_SUIT, 1, &tiles),
                    tile_class_result(PredicateId::SUB_NO_HONOR_TILES, &tiles, false, false),
                ],
            )
        }),
    )
}

/// One suit plus honors.
pub fn mixed_one_suit() -> RulePredicate {
    RulePredicate::delegating(
        PredicateId::MIXED_ONE_SUIT,
        predicate_and(
            PredicateId::MIXED_ONE_SUIT,
            vec![
                suited_group_count_predicate(PredicateId::SUB_ONE_SUIT, 1),
                has_honor_tiles(),
            ],
        ),
        Box::new(|win, _, _, _| {
            let tiles = win.all_tiles();
            PointPredicateResult::all(
                PredicateId::MIXED_ONE_SUIT,
                vec![
                    suited_group_count_over_tiles(PredicateId::SUB_ONE_SUIT, 1, &tiles),
                    tile_class_result(PredicateId::SUB_HAS_HONOR_TILES, &tiles, false, true),
                ],
            )
        }),
    )
}

/// Four concealed sets and a pair; the option narrows sets to triplets.
pub fn self_triplets() -> RulePredicate {
    RulePredicate::auto_fail(
        PredicateId::SELF_TRIPLETS,
        Box::new(|win, win_ctx, round_ctx, options| {
            predicate_and(
                PredicateId::SELF_TRIPLETS,
                vec![
                    one_pair(),
                    four_concealed_sets(options.self_triplets_triplets_only()),
                ],
            )(win, win_ctx, round_ctx, options)
        }),
    )
}

/// At most the winning tile came from outside the hand. Fixed-pattern hands
/// are concealed by construction.
pub fn concealed_hand() -> RulePredicate {
    RulePredicate::auto_succeed(
        PredicateId::CONCEALED_HAND,
        Box::new(|win, win_ctx, round_ctx, options| {
            if options.concealed_discard_must_complete_pair() {
                let discard_rule: StandardPredicate = Box::new(|win, win_ctx, _, _| {
                    let flag = win_ctx.self_drawn() || win.winning_meld().is_pair();
                    PointPredicateResult::from_flag(
                        PredicateId::SUB_DISCARD_COMPLETED_PAIR,
                        flag,
                        vec![vec![win_ctx.winning_tile()]],
                    )
                });
                predicate_and(
                    PredicateId::CONCEALED_HAND,
                    vec![four_concealed_non_pair_melds(), one_pair(), discard_rule],
                )(win, win_ctx, round_ctx, options)
            } else {
                predicate_and(
                    PredicateId::CONCEALED_HAND,
                    vec![four_concealed_melds(), one_pair()],
                )(win, win_ctx, round_ctx, options)
            }
        }),
    )
}

fn self_draw_sub() -> StandardPredicate {
    Box::new(|_, win_ctx, _, _| {
        PointPredicateResult::from_flag(
            PredicateId::SELF_DRAW,
            win_ctx.self_drawn(),
            vec![vec![win_ctx.winning_tile()]],
        )
    })
}

/// Fully concealed: four concealed non-pair melds, a pair, and a self-drawn
/// winning tile.
pub fn fully_concealed() -> RulePredicate {
    RulePredicate::delegating(
        PredicateId::FULLY_CONCEALED,
        predicate_and(
            PredicateId::FULLY_CONCEALED,
            vec![four_concealed_non_pair_melds(), one_pair(), self_draw_sub()],
        ),
        // special hands are concealed except possibly the last tile
        Box::new(|win, _, _, _| {
            PointPredicateResult::from_flag(
                PredicateId::FULLY_CONCEALED,
                win.is_self_drawn(),
                vec![vec![win.winning_tile()]],
            )
        }),
    )
}

/// The winning tile was self-drawn.
pub fn self_draw() -> RulePredicate {
    RulePredicate::delegating(
        PredicateId::SELF_DRAW,
        self_draw_sub(),
        Box::new(|win, _, _, _| {
            PointPredicateResult::from_flag(
                PredicateId::SELF_DRAW,
                win.is_self_drawn(),
                vec![vec![win.winning_tile()]],
            )
        }),
    )
}

/// The thirteen orphans pattern. Never satisfiable by a meld-based hand.
pub fn thirteen_orphans() -> RulePredicate {
    RulePredicate::delegating(
        PredicateId::THIRTEEN_ORPHANS,
        Box::new(|_, _, _, _| PointPredicateResult::fail(PredicateId::THIRTEEN_ORPHANS, vec![])),
        Box::new(|win, _, _, _| {
            let required = ThirteenTileMatcher::thirteen_orphans();
            let mut distinct: Vec<Tile> = win.all_tiles();
            distinct.sort();
            distinct.dedup();
            let mut expected = required.required_tiles().to_vec();
            expected.sort();
            PointPredicateResult::from_flag(
                PredicateId::THIRTEEN_ORPHANS,
                distinct == expected,
                vec![win.all_tiles()],
            )
        }),
    )
}

/// Every rule in the book, in a stable order.
pub fn standard_catalog() -> Vec<RulePredicate> {
    vec![
        seven_pairs(),
        common_hand(),
        all_triplets(),
        all_kongs(),
        small_three_dragons(),
        great_three_dragons(),
        small_four_winds(),
        big_four_winds(),
        seat_wind(),
        prevailing_wind(),
        all_honors(),
        full_flush(),
        mixed_one_suit(),
        self_triplets(),
        concealed_hand(),
        fully_concealed(),
        self_draw(),
        thirteen_orphans(),
    ]
}
