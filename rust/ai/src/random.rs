//! The stochastic opponent.
//!
//! Decisions depend only on what is owed, the stack and the dice:
//!
//! - nothing owed: check most of the time, otherwise bet a random amount
//!   (check again if a matched bet is already open)
//! - owed more than the stack: sometimes shove, otherwise fold
//! - otherwise: mostly call, sometimes raise by a random increment, else fold
//!
//! Amounts the stack cannot cover fall back to the passive choice (check
//! or call), so the policy never proposes an action the engine would
//! reject for lack of chips.

use headsup_engine::player::PlayerAction;
use headsup_engine::policy::{DecisionContext, Dice, OpponentPolicy};

#[derive(Debug, Clone, PartialEq)]
pub struct RandomPolicy {
    /// Chance to check when nothing is owed
    pub check_chance: f64,
    /// Chance to go all-in when the stack cannot cover the call
    pub shove_chance: f64,
    /// Chance to call when facing an affordable bet
    pub call_chance: f64,
    /// Chance to raise when facing an affordable bet (after calls)
    pub raise_chance: f64,
    /// Inclusive range for opening bets
    pub bet_range: (u32, u32),
    /// Inclusive range for raise increments
    pub raise_range: (u32, u32),
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self {
            check_chance: 0.7,
            shove_chance: 0.3,
            call_chance: 0.6,
            raise_chance: 0.2,
            bet_range: (10, 80),
            raise_range: (10, 100),
        }
    }
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws an amount from `range`, never below the table minimum.
    fn amount(range: (u32, u32), min_bet: u32, dice: &mut dyn Dice) -> u32 {
        let low = range.0.max(min_bet);
        let high = range.1.max(low);
        dice.between(low, high)
    }
}

impl OpponentPolicy for RandomPolicy {
    fn decide(&self, ctx: &DecisionContext, dice: &mut dyn Dice) -> PlayerAction {
        let owed = ctx.owed();

        if owed == 0 {
            if dice.chance() < self.check_chance {
                return PlayerAction::Check;
            }
            let bet = Self::amount(self.bet_range, ctx.min_bet, dice);
            // a matched open bet leaves check as the only legal option
            return if bet <= ctx.stack && ctx.table_high == 0 {
                PlayerAction::Bet(bet)
            } else {
                PlayerAction::Check
            };
        }

        if owed > ctx.stack {
            return if ctx.stack > 0 && dice.chance() < self.shove_chance {
                PlayerAction::AllIn
            } else {
                PlayerAction::Fold
            };
        }

        let r = dice.chance();
        if r < self.call_chance {
            PlayerAction::Call
        } else if r < self.call_chance + self.raise_chance {
            let increment = Self::amount(self.raise_range, ctx.min_bet, dice);
            if owed.saturating_add(increment) <= ctx.stack {
                PlayerAction::Raise(increment)
            } else {
                PlayerAction::Call
            }
        } else {
            PlayerAction::Fold
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}
