//! Search parameters and configuration
//!
//! Controls depth, pruning and the evaluator preset used at the leaves.

use crate::eval::EvalTier;

/// Search parameters for the minimax selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum search depth in plies (at least 1)
    pub max_depth: u8,

    /// Enable alpha-beta cutoffs; disabling yields plain minimax with the same result
    pub alpha_beta: bool,

    /// Search captures before quiet moves
    pub order_captures: bool,

    /// Evaluator preset used at depth 0
    pub eval_tier: EvalTier,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: 3,
            alpha_beta: true,
            order_captures: true,
            eval_tier: EvalTier::Full,
        }
    }
}

impl SearchParams {
    /// Create new search params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum depth in plies
    pub fn max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable alpha-beta pruning
    pub fn alpha_beta(mut self, enable: bool) -> Self {
        self.alpha_beta = enable;
        self
    }

    /// Enable or disable capture-first ordering
    pub fn order_captures(mut self, enable: bool) -> Self {
        self.order_captures = enable;
        self
    }

    /// Set the evaluator preset
    pub fn eval_tier(mut self, tier: EvalTier) -> Self {
        self.eval_tier = tier;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let params = SearchParams::new()
            .max_depth(2)
            .alpha_beta(false)
            .order_captures(false)
            .eval_tier(EvalTier::Light);
        assert_eq!(params.max_depth, 2);
        assert!(!params.alpha_beta);
        assert!(!params.order_captures);
        assert_eq!(params.eval_tier, EvalTier::Light);

        let defaults = SearchParams::default();
        assert_eq!(defaults.max_depth, 3);
        assert!(defaults.alpha_beta);
    }
}
