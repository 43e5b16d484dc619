//! Hand decomposition: from a bag of tiles to concrete winning hands.
//!
//! Key components:
//! - [`honor`]: deterministic honor-tile meld solver
//! - [`suited`]: backtracking suited-tile partition enumeration
//! - [`standard`]: the five-meld pipeline (filters, locked-meld
//!   reconciliation, winning-tile placement)
//! - [`seven_pairs`]: the seven-pairs pipeline
//! - [`special`]: fixed thirteen-tile patterns such as thirteen orphans
//!
//! [`analyze`] runs every pipeline and concatenates the results in a stable
//! order: five-meld wins, then seven-pairs wins, then special-hand matches.

mod honor;
mod seven_pairs;
mod special;
mod standard;
mod suited;

pub use honor::honor_meld_groupings;
pub use seven_pairs::decompose_seven_pairs;
pub use special::ThirteenTileMatcher;
pub use standard::{decompose_standard, DecomposePolicy};
pub use suited::suited_meld_groupings;

use crate::error::HandError;
use crate::hand::{Hand, WinningHand};
use crate::score::WinContext;

/// Run every decomposition pipeline over the hand.
///
/// The result may legitimately be empty (the hand is not a win) or hold
/// several interpretations of the same tiles; scoring picks between them.
pub fn analyze(
    hand: &Hand,
    ctx: &WinContext,
    policy: DecomposePolicy,
    matchers: &[ThirteenTileMatcher],
) -> Result<Vec<WinningHand>, HandError> {
    let mut wins: Vec<WinningHand> = decompose_standard(hand, ctx, policy)?
        .into_iter()
        .map(WinningHand::Standard)
        .collect();
    wins.extend(
        decompose_seven_pairs(hand, ctx, policy)?
            .into_iter()
            .map(WinningHand::Standard),
    );
    for matcher in matchers {
        if let Some(win) = matcher.matches(hand, ctx)? {
            wins.push(WinningHand::Special(win));
        }
    }
    Ok(wins)
}
