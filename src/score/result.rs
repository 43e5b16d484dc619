//! Predicate identifiers and evaluation results.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::tile::Tile;

/// Stable identifier for a scoring rule or sub-predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PredicateId(&'static str);

impl PredicateId {
    pub const SEVEN_PAIRS: PredicateId = PredicateId("seven_pairs");
    pub const COMMON_HAND: PredicateId = PredicateId("common_hand");
    pub const ALL_TRIPLETS: PredicateId = PredicateId("all_triplets");
    pub const ALL_KONGS: PredicateId = PredicateId("all_kongs");
    pub const SMALL_THREE_DRAGONS: PredicateId = PredicateId("small_three_dragons");
    pub const GREAT_THREE_DRAGONS: PredicateId = PredicateId("great_three_dragons");
    pub const SMALL_FOUR_WINDS: PredicateId = PredicateId("small_four_winds");
    pub const BIG_FOUR_WINDS: PredicateId = PredicateId("big_four_winds");
    pub const SEAT_WIND: PredicateId = PredicateId("seat_wind");
    pub const PREVAILING_WIND: PredicateId = PredicateId("prevailing_wind");
    pub const ALL_HONORS: PredicateId = PredicateId("all_honors");
    pub const FULL_FLUSH: PredicateId = PredicateId("full_flush");
    pub const MIXED_ONE_SUIT: PredicateId = PredicateId("mixed_one_suit");
    pub const SELF_TRIPLETS: PredicateId = PredicateId("self_triplets");
    pub const CONCEALED_HAND: PredicateId = PredicateId("concealed_hand");
    pub const FULLY_CONCEALED: PredicateId = PredicateId("fully_concealed");
    pub const SELF_DRAW: PredicateId = PredicateId("self_draw");
    pub const THIRTEEN_ORPHANS: PredicateId = PredicateId("thirteen_orphans");

    pub const SUB_ONE_PAIR: PredicateId = PredicateId("sub_one_pair");
    pub const SUB_FOUR_RUNS: PredicateId = PredicateId("sub_four_runs");
    pub const SUB_FOUR_SETS: PredicateId = PredicateId("sub_four_sets");
    pub const SUB_FOUR_KONGS: PredicateId = PredicateId("sub_four_kongs");
    pub const SUB_FOUR_CONCEALED_SETS: PredicateId = PredicateId("sub_four_concealed_sets");
    pub const SUB_FOUR_CONCEALED_MELDS: PredicateId = PredicateId("sub_four_concealed_melds");
    pub const SUB_FOUR_CONCEALED_NON_PAIR: PredicateId = PredicateId("sub_four_concealed_non_pair");
    pub const SUB_DRAGON_PAIR: PredicateId = PredicateId("sub_dragon_pair");
    pub const SUB_WIND_PAIR: PredicateId = PredicateId("sub_wind_pair");
    pub const SUB_VALUELESS_PAIR: PredicateId = PredicateId("sub_valueless_pair");
    pub const SUB_TWO_DRAGON_SETS: PredicateId = PredicateId("sub_two_dragon_sets");
    pub const SUB_THREE_DRAGON_SETS: PredicateId = PredicateId("sub_three_dragon_sets");
    pub const SUB_THREE_WIND_SETS: PredicateId = PredicateId("sub_three_wind_sets");
    pub const SUB_FOUR_WIND_SETS: PredicateId = PredicateId("sub_four_wind_sets");
    pub const SUB_NO_FLOWERS: PredicateId = PredicateId("sub_no_flowers");
    pub const SUB_NO_SUITED_TILES: PredicateId = PredicateId("sub_no_suited_tiles");
    pub const SUB_NO_HONOR_TILES: PredicateId = PredicateId("sub_no_honor_tiles");
    pub const SUB_HAS_HONOR_TILES: PredicateId = PredicateId("sub_has_honor_tiles");
    pub const SUB_ONE_SUIT: PredicateId = PredicateId("sub_one_suit");
    pub const SUB_DISCARD_COMPLETED_PAIR: PredicateId = PredicateId("sub_discard_completed_pair");

    /// The underlying identifier string.
    #[must_use]
    pub fn raw(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for PredicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Outcome of evaluating one predicate against one winning hand.
///
/// Evidence is tile-level: each inner `Vec<Tile>` is one meld or tile group
/// that justified (or refuted) the predicate. `alternate_meld_indices`
/// carries index sets into the hand's meld list when a predicate can be
/// satisfied by more than one combination of melds. `sub_results` keeps the
/// full evaluation tree for composed predicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointPredicateResult {
    id: PredicateId,
    success: bool,
    success_tiles: Vec<Vec<Tile>>,
    failure_tiles: Vec<Vec<Tile>>,
    alternate_meld_indices: Vec<BTreeSet<usize>>,
    sub_results: Vec<PointPredicateResult>,
}

impl PointPredicateResult {
    pub fn new(
        id: PredicateId,
        success: bool,
        success_tiles: Vec<Vec<Tile>>,
        failure_tiles: Vec<Vec<Tile>>,
        alternate_meld_indices: Vec<BTreeSet<usize>>,
        sub_results: Vec<PointPredicateResult>,
    ) -> Self {
        Self {
            id,
            success,
            success_tiles,
            failure_tiles,
            alternate_meld_indices,
            sub_results,
        }
    }

    /// A success carrying the given tile groups as evidence.
    pub fn succeed(id: PredicateId, success_tiles: Vec<Vec<Tile>>) -> Self {
        Self::new(id, true, success_tiles, vec![], vec![], vec![])
    }

    /// A failure carrying the given tile groups as counter-evidence.
    pub fn fail(id: PredicateId, failure_tiles: Vec<Vec<Tile>>) -> Self {
        Self::new(id, false, vec![], failure_tiles, vec![], vec![])
    }

    /// Build a result from a boolean, filing the tiles on whichever side the
    /// flag puts them.
    pub fn from_flag(id: PredicateId, flag: bool, tiles: Vec<Vec<Tile>>) -> Self {
        if flag {
            Self::succeed(id, tiles)
        } else {
            Self::fail(id, tiles)
        }
    }

    /// Conjunction of several results under a new identifier.
    ///
    /// Succeeds iff every child succeeded. All children are kept in
    /// `sub_results` whether they passed or not; success evidence is the
    /// concatenation across every child, failure evidence only across the
    /// failing ones, and alternate index sets are pooled.
    pub fn all(id: PredicateId, results: Vec<PointPredicateResult>) -> Self {
        let success = results.iter().all(|r| r.success);
        let mut success_tiles = Vec::new();
        let mut failure_tiles = Vec::new();
        let mut alternates = Vec::new();
        for result in &results {
            success_tiles.extend(result.success_tiles.iter().cloned());
            if !result.success {
                failure_tiles.extend(result.failure_tiles.iter().cloned());
            }
            alternates.extend(result.alternate_meld_indices.iter().cloned());
        }
        Self::new(id, success, success_tiles, failure_tiles, alternates, results)
    }

    #[must_use]
    pub fn id(&self) -> PredicateId {
        self.id
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Tile groups that justified the predicate.
    #[must_use]
    pub fn success_tiles(&self) -> &[Vec<Tile>] {
        &self.success_tiles
    }

    /// Tile groups that refuted the predicate.
    #[must_use]
    pub fn failure_tiles(&self) -> &[Vec<Tile>] {
        &self.failure_tiles
    }

    /// Meld index sets that each independently satisfy the predicate.
    #[must_use]
    pub fn alternate_meld_indices(&self) -> &[BTreeSet<usize>] {
        &self.alternate_meld_indices
    }

    /// Child results for composed predicates.
    #[must_use]
    pub fn sub_results(&self) -> &[PointPredicateResult] {
        &self.sub_results
    }

    /// Attach one alternate index set.
    #[must_use]
    pub fn with_alternate_indices(mut self, indices: BTreeSet<usize>) -> Self {
        self.alternate_meld_indices.push(indices);
        self
    }
}
