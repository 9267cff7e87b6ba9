use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::{ActionError, GameError};

/// Who decides a seat's actions. Both kinds share the same [`Player`] data;
/// the caller resolves the decision source.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    /// Actions arrive through `submit_action` from outside
    Human,
    /// Actions come from an opponent policy
    Policy,
}

/// Represents a player action during a betting phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the pot
    Fold,
    /// Check (only valid when nothing is owed)
    Check,
    /// Call the current table-high
    Call,
    /// Open the betting with the given amount
    Bet(u32),
    /// Raise the table-high by the given increment
    Raise(u32),
    /// Commit every remaining chip
    AllIn,
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// One seat at the table: chip stack, hole cards, chips committed in the
/// current phase and in the whole round, and whether the seat is still in.
///
/// Chips only move through [`Player::commit`] (stack to pot) and
/// [`Player::add_chips`] (pot payout).
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Seat index (0 or 1 in heads-up)
    seat: usize,
    name: String,
    controller: Controller,
    /// Current chip stack
    stack: u32,
    /// Hole cards (up to 2 cards)
    hole: Vec<Card>,
    /// Chips committed in the current betting phase
    committed: u32,
    /// Chips committed over the whole round
    invested: u32,
    active: bool,
}

impl Player {
    pub fn new(seat: usize, name: impl Into<String>, stack: u32, controller: Controller) -> Self {
        Self {
            seat,
            name: name.into(),
            controller,
            stack,
            hole: Vec::with_capacity(2),
            committed: 0,
            invested: 0,
            active: true,
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn controller(&self) -> Controller {
        self.controller
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn committed(&self) -> u32 {
        self.committed
    }
    pub fn invested(&self) -> u32 {
        self.invested
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn is_all_in(&self) -> bool {
        self.active && self.stack == 0
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole.len() >= 2 {
            return Err(GameError::HoleCardsFull { seat: self.seat });
        }
        self.hole.push(c);
        Ok(())
    }

    /// Moves `amount` chips from the stack into this phase's contribution.
    /// The caller adds the same amount to the pot.
    pub fn commit(&mut self, amount: u32) -> Result<(), ActionError> {
        if amount > self.stack {
            return Err(ActionError::InsufficientChips {
                needed: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        self.committed += amount;
        self.invested += amount;
        Ok(())
    }

    pub fn fold(&mut self) {
        self.active = false;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Gives back chips that were never matched. Only the round total
    /// shrinks; the phase contribution is already reset at settlement.
    pub(crate) fn refund(&mut self, amount: u32) {
        self.invested = self.invested.saturating_sub(amount);
        self.add_chips(amount);
    }

    pub fn start_phase(&mut self) {
        self.committed = 0;
    }

    /// Clears cards and contributions and re-activates the seat.
    pub fn reset_for_round(&mut self) {
        self.hole.clear();
        self.committed = 0;
        self.invested = 0;
        self.active = true;
    }
}
