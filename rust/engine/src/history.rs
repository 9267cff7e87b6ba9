use serde::{Deserialize, Serialize};

use crate::engine::Phase;
use crate::hand::HandStrength;
use crate::rules::ValidatedAction;

/// Records a single accepted action.
/// Associates the action with the seat and the phase when it occurred.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index (0 or 1)
    pub seat: usize,
    /// The betting phase when this action occurred
    pub phase: Phase,
    /// The action as applied, with the chips it moved
    pub action: ValidatedAction,
}

/// How a settled round was decided.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Settlement {
    Fold,
    Showdown,
}

/// Outcome of a settled round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub settlement: Settlement,
    /// Seats that received chips from the pot
    pub winners: Vec<usize>,
    /// Pot total awarded (after any uncalled chips were returned)
    pub pot: u32,
    /// Chips handed back to a seat whose bet was never matched
    #[serde(default)]
    pub returned: Option<(usize, u32)>,
    /// Best hand per seat, present after a showdown
    #[serde(default)]
    pub hands: Option<[HandStrength; 2]>,
    /// Optional notes about the outcome (e.g. "split pot")
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete in-memory record of one round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Default)]
pub struct RoundRecord {
    /// Seed used for the shuffle and the policy dice
    pub seed: Option<u64>,
    /// Chronological list of all accepted actions
    pub actions: Vec<ActionRecord>,
    pub result: Option<RoundResult>,
}

impl RoundRecord {
    pub fn new(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            actions: Vec::new(),
            result: None,
        }
    }

    pub fn last_action(&self) -> Option<&ActionRecord> {
        self.actions.last()
    }
}
