//! Trade action of a strategy leg.

use serde::{Deserialize, Serialize};

/// Whether a leg was bought (long) or sold (short).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Long position (buyer).
    Buy,
    /// Short position (seller).
    Sell,
}

impl Action {
    /// Return the sign (+1 for Buy, -1 for Sell).
    pub fn sign(&self) -> f64 {
        match self {
            Action::Buy => 1.0,
            Action::Sell => -1.0,
        }
    }

    /// Return `true` for a long position.
    pub fn is_buy(&self) -> bool {
        matches!(self, Action::Buy)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Buy => write!(f, "buy"),
            Action::Sell => write!(f, "sell"),
        }
    }
}
