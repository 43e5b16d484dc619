//! Predicate types and the standard/special routing layer.

use crate::hand::{SpecialWin, StandardWin, WinningHand};

use super::context::{RoundContext, WinContext};
use super::options::RuleOptions;
use super::result::{PointPredicateResult, PredicateId};

/// A pure test over a meld-based winning hand.
pub type StandardPredicate =
    Box<dyn Fn(&StandardWin, &WinContext, &RoundContext, &RuleOptions) -> PointPredicateResult + Send + Sync>;

/// A pure test over a fixed-pattern winning hand.
pub type SpecialPredicate =
    Box<dyn Fn(&SpecialWin, &WinContext, &RoundContext, &RuleOptions) -> PointPredicateResult + Send + Sync>;

/// Conjunction combinator: evaluate every child and fold with
/// [`PointPredicateResult::all`] under the given identifier. No
/// short-circuiting, so evidence from every child survives.
pub fn predicate_and(id: PredicateId, children: Vec<StandardPredicate>) -> StandardPredicate {
    Box::new(move |win, win_ctx, round_ctx, options| {
        let results = children
            .iter()
            .map(|child| child(win, win_ctx, round_ctx, options))
            .collect();
        PointPredicateResult::all(id, results)
    })
}

/// What a rule does when handed a fixed-pattern win.
///
/// Most meld-shape rules cannot apply to a special hand and auto-fail;
/// a few rules are granted automatically, and tile-based rules delegate
/// to a dedicated special-hand test.
pub enum SpecialHandling {
    AutoFail,
    AutoSucceed,
    Delegate(SpecialPredicate),
}

/// One scoring rule: a standard-hand predicate plus its special-hand
/// behavior, routed by winning-hand variant.
pub struct RulePredicate {
    id: PredicateId,
    standard: StandardPredicate,
    special: SpecialHandling,
}

impl RulePredicate {
    /// Rule that auto-fails on special hands.
    pub fn auto_fail(id: PredicateId, standard: StandardPredicate) -> Self {
        Self {
            id,
            standard,
            special: SpecialHandling::AutoFail,
        }
    }

    /// Rule that is automatically granted on special hands.
    pub fn auto_succeed(id: PredicateId, standard: StandardPredicate) -> Self {
        Self {
            id,
            standard,
            special: SpecialHandling::AutoSucceed,
        }
    }

    /// Rule with a dedicated special-hand test.
    pub fn delegating(id: PredicateId, standard: StandardPredicate, special: SpecialPredicate) -> Self {
        Self {
            id,
            standard,
            special: SpecialHandling::Delegate(special),
        }
    }

    #[must_use]
    pub fn id(&self) -> PredicateId {
        self.id
    }

    /// Evaluate the rule against either kind of winning hand.
    pub fn evaluate(
        &self,
        win: &WinningHand,
        win_ctx: &WinContext,
        round_ctx: &RoundContext,
        options: &RuleOptions,
    ) -> PointPredicateResult {
        match win {
            WinningHand::Standard(standard) => (self.standard)(standard, win_ctx, round_ctx, options),
            WinningHand::Special(special) => match &self.special {
                SpecialHandling::AutoFail => PointPredicateResult::fail(self.id, vec![]),
                SpecialHandling::AutoSucceed => PointPredicateResult::succeed(self.id, vec![]),
                SpecialHandling::Delegate(predicate) => {
                    predicate(special, win_ctx, round_ctx, options)
                }
            },
        }
    }
}
