//! # hkhand
//!
//! Hong Kong mahjong hand decomposition and rule-predicate scoring.
//!
//! ## Design Principles
//!
//! 1. **Validate at construction**: `Tile`, `Meld`, `Hand`, and the winning
//!    hand types reject illegal states up front, so the solvers never see a
//!    half-built object.
//!
//! 2. **Enumerate, don't judge**: decomposition returns every winning
//!    interpretation of a hand. Picking between them is the scorer's job.
//!
//! 3. **Soft misses are values, hard breakage is an error**: "not a win" is
//!    an empty result; an impossible tile quantity or a contradictory locked
//!    meld is a [`HandError`].
//!
//! ## Modules
//!
//! - `tile`: tile taxonomy and tile multisets
//! - `meld`: meld construction and meld-list utilities
//! - `hand`: validated at-turn hands and winning hand types
//! - `analyze`: decomposition pipelines (five melds, seven pairs, special
//!   patterns)
//! - `score`: the predicate framework and the named rule catalog
//! - `error`: the crate-wide error taxonomy

pub mod analyze;
pub mod error;
pub mod hand;
pub mod meld;
pub mod score;
pub mod tile;

// Re-export commonly used types
pub use crate::error::HandError;

pub use crate::tile::{Dragon, FlowerKind, Suit, Tile, TileMultiset, Wind};

pub use crate::meld::{Meld, MeldKind};

pub use crate::hand::{Hand, SpecialWin, StandardWin, WinningHand};

pub use crate::analyze::{
    analyze, decompose_seven_pairs, decompose_standard, DecomposePolicy, ThirteenTileMatcher,
};

pub use crate::score::{
    predicate_and, PointPredicateResult, PredicateId, RoundContext, RuleOptions, RulePredicate,
    SpecialHandling, WinContext,
};
