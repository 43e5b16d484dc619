//! Rule-predicate scoring over winning hands.
//!
//! Key components:
//! - [`result`]: predicate identifiers and evidence-carrying results
//! - [`predicate`]: the predicate types, conjunction combinator, and the
//!   standard/special routing layer
//! - [`factory`]: parameterized builders for the common meld-shape checks
//! - [`rules`]: the named rule catalog
//! - [`context`] / [`options`]: win context, round context, and table-rule
//!   toggles
//!
//! Scoring never mutates a hand: every predicate is a pure function from a
//! winning hand plus context to a [`PointPredicateResult`].

mod context;
mod factory;
mod options;
mod predicate;
mod result;
pub mod rules;

pub use context::{RoundContext, WinContext};
pub use factory::{
    filtered_melds_predicate, pair_quantity_predicate, pong_or_kongs_exist_predicate,
    suited_group_count_over_tiles, suited_group_count_predicate,
};
pub use options::RuleOptions;
pub use predicate::{predicate_and, RulePredicate, SpecialHandling, SpecialPredicate, StandardPredicate};
pub use result::{PointPredicateResult, PredicateId};
