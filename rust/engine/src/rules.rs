use serde::{Deserialize, Serialize};

use crate::errors::ActionError;
use crate::player::{Player, PlayerAction as A};

/// Smallest amount allowed for a bet or a raise increment.
pub const MIN_BET: u32 = 10;

/// What a seat faces when it is asked to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BettingContext {
    /// Highest phase contribution on the table
    pub table_high: u32,
    /// The acting seat's contribution in this phase
    pub committed: u32,
    /// The acting seat's remaining stack
    pub stack: u32,
    /// Floor for bets and raise increments
    pub min_bet: u32,
}

impl BettingContext {
    pub fn owed(&self) -> u32 {
        self.table_high.saturating_sub(self.committed)
    }
}

/// An action checked against the betting context, carrying the exact chips
/// it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    /// `commit` chips go in; the table-high becomes `to`
    Raise { commit: u32, to: u32 },
    AllIn(u32),
}

impl ValidatedAction {
    /// Chips this action moves from the stack to the pot.
    pub fn chips(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n) | ValidatedAction::Bet(n) | ValidatedAction::AllIn(n) => n,
            ValidatedAction::Raise { commit, .. } => commit,
        }
    }
}

/// Validates a player action according to betting rules and stack size.
///
/// Unlike a lenient table, nothing is silently converted: a call or raise
/// the stack cannot cover is rejected, and the caller chooses all-in instead.
///
/// # Errors
///
/// Returns [`ActionError`] describing why the action is illegal.
///
/// # Examples
///
/// ```
/// use headsup_engine::rules::{validate_action, BettingContext, ValidatedAction};
/// use headsup_engine::player::PlayerAction;
///
/// let ctx = BettingContext { table_high: 50, committed: 0, stack: 1000, min_bet: 10 };
/// assert_eq!(validate_action(&ctx, PlayerAction::Call), Ok(ValidatedAction::Call(50)));
/// assert_eq!(
///     validate_action(&ctx, PlayerAction::Raise(20)),
///     Ok(ValidatedAction::Raise { commit: 70, to: 70 })
/// );
/// assert!(validate_action(&ctx, PlayerAction::Check).is_err());
/// ```
pub fn validate_action(ctx: &BettingContext, action: A) -> Result<ValidatedAction, ActionError> {
    let owed = ctx.owed();
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if owed == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(ActionError::CannotCheck { owed })
            }
        }
        A::Call => {
            if owed == 0 {
                return Err(ActionError::NothingToCall);
            }
            affordable(ctx, owed)?;
            Ok(ValidatedAction::Call(owed))
        }
        A::Bet(amount) => {
            if ctx.table_high > 0 {
                return Err(ActionError::BetAlreadyOpen {
                    table_high: ctx.table_high,
                });
            }
            at_least_minimum(ctx, amount)?;
            affordable(ctx, amount)?;
            Ok(ValidatedAction::Bet(amount))
        }
        A::Raise(increment) => {
            if ctx.table_high == 0 {
                return Err(ActionError::NothingToRaise);
            }
            at_least_minimum(ctx, increment)?;
            let commit = owed.saturating_add(increment);
            affordable(ctx, commit)?;
            Ok(ValidatedAction::Raise {
                commit,
                to: ctx.table_high + increment,
            })
        }
        A::AllIn => {
            if ctx.stack == 0 {
                Err(ActionError::NoChips)
            } else {
                Ok(ValidatedAction::AllIn(ctx.stack))
            }
        }
    }
}

fn at_least_minimum(ctx: &BettingContext, amount: u32) -> Result<(), ActionError> {
    if amount < ctx.min_bet {
        return Err(ActionError::BelowMinimum {
            amount,
            minimum: ctx.min_bet,
        });
    }
    Ok(())
}

fn affordable(ctx: &BettingContext, needed: u32) -> Result<(), ActionError> {
    if needed > ctx.stack {
        return Err(ActionError::InsufficientChips {
            needed,
            available: ctx.stack,
        });
    }
    Ok(())
}

/// True when the betting phase can close: at most one seat is still in, or
/// every active seat has matched `table_high`. A seat with an empty stack is
/// exempt; its short contribution stands as an all-in call.
pub fn betting_complete(players: &[Player], table_high: u32) -> bool {
    let active: Vec<&Player> = players.iter().filter(|p| p.is_active()).collect();
    active.len() <= 1
        || active
            .iter()
            .all(|p| p.committed() == table_high || p.stack() == 0)
}
