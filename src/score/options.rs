//! Table-rule toggles that change how individual rules judge a hand.

use serde::{Deserialize, Serialize};

/// Optional strictness knobs. Every knob defaults to off, the permissive
/// reading of the rule it tightens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOptions {
    common_hand_requires_valueless_pair: bool,
    concealed_discard_must_complete_pair: bool,
    self_triplets_triplets_only: bool,
}

impl RuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the common-hand pair to be a valueless tile (no dragons, no
    /// seat or prevailing wind).
    #[must_use]
    pub fn with_common_hand_requires_valueless_pair(mut self, required: bool) -> Self {
        self.common_hand_requires_valueless_pair = required;
        self
    }

    /// For a concealed hand won by discard, require the discard to complete
    /// the pair rather than a set.
    #[must_use]
    pub fn with_concealed_discard_must_complete_pair(mut self, required: bool) -> Self {
        self.concealed_discard_must_complete_pair = required;
        self
    }

    /// Count only triplets (not quadruplets) toward the self-triplets rule.
    #[must_use]
    pub fn with_self_triplets_triplets_only(mut self, required: bool) -> Self {
        self.self_triplets_triplets_only = required;
        self
    }

    pub fn common_hand_requires_valueless_pair(&self) -> bool {
        self.common_hand_requires_valueless_pair
    }

    pub fn concealed_discard_must_complete_pair(&self) -> bool {
        self.concealed_discard_must_complete_pair
    }

    pub fn self_triplets_triplets_only(&self) -> bool {
        self.self_triplets_triplets_only
    }
}
