//! Error taxonomy for hand construction, decomposition, and scoring.
//!
//! Three fatal categories exist, and they mean different things to a caller:
//!
//! - [`HandError::InvalidTiles`] / [`HandError::InvalidMeld`] /
//!   [`HandError::InvalidHand`] / [`HandError::InvalidMatcher`]: input
//!   validation rejected an object at construction time. Nothing is
//!   partially built.
//! - [`HandError::MalformedHand`]: a tile quantity outside `[0, 4]` was
//!   discovered mid-solve. An upstream invariant was already broken before
//!   the solver ran.
//! - [`HandError::InternalInconsistency`]: an algorithm bug, not a
//!   legitimate game state. Distinct from the others so callers can tell
//!   "this hand cannot win" apart from "this implementation is broken".
//!
//! "No valid decomposition here" is never an error: solvers and matchers
//! return empty/`None` results for that.

use thiserror::Error;

use crate::tile::Tile;

/// Errors emitted by hand construction, meld solvers, and predicates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// A tile value was outside its legal range for the tile kind.
    #[error("invalid tile: {detail}")]
    InvalidTiles {
        /// What was wrong with the tile(s).
        detail: String,
    },

    /// A meld's tiles do not form the claimed meld kind.
    #[error("invalid meld: {detail}")]
    InvalidMeld {
        /// What was wrong with the meld shape.
        detail: String,
    },

    /// A hand or winning hand failed construction-time validation.
    #[error("invalid hand: {detail}")]
    InvalidHand {
        /// Which validation rule was violated.
        detail: String,
    },

    /// A special-hand matcher was configured with an illegal tile set.
    #[error("invalid matcher configuration: {detail}")]
    InvalidMatcher {
        /// Which configuration rule was violated.
        detail: String,
    },

    /// A tile quantity outside `[0, 4]` surfaced during solving.
    #[error("malformed hand: quantity {quantity} of {tile} is outside [0, 4]")]
    MalformedHand {
        /// The offending tile.
        tile: Tile,
        /// The out-of-range quantity.
        quantity: u8,
    },

    /// An internal invariant did not hold. Indicates a bug in this crate.
    #[error("internal inconsistency: {detail}")]
    InternalInconsistency {
        /// Which invariant failed.
        detail: String,
    },
}

impl HandError {
    /// Shorthand for an [`HandError::InvalidHand`] with a formatted detail.
    pub fn invalid_hand(detail: impl Into<String>) -> Self {
        Self::InvalidHand {
            detail: detail.into(),
        }
    }

    /// Shorthand for an [`HandError::InvalidMatcher`] with a formatted detail.
    pub fn invalid_matcher(detail: impl Into<String>) -> Self {
        Self::InvalidMatcher {
            detail: detail.into(),
        }
    }

    /// Shorthand for an [`HandError::InternalInconsistency`].
    pub fn inconsistency(detail: impl Into<String>) -> Self {
        Self::InternalInconsistency {
            detail: detail.into(),
        }
    }
}
