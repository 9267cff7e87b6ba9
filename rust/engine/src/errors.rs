use thiserror::Error;

use crate::engine::Phase;

/// Drawing from a deck with no cards left. A legal round needs at most
/// 9 dealt cards plus 3 burns, so this always signals a logic fault.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum DeckError {
    #[error("no cards left in the deck")]
    Exhausted,
}

/// An action that is illegal for the current phase, table-high or stack.
/// Rejected actions leave the engine untouched and do not consume the turn.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ActionError {
    #[error("no betting round is open (phase: {0})")]
    RoundNotActive(Phase),
    #[error("unknown seat {0}")]
    UnknownSeat(usize),
    #[error("it's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("a bet of {table_high} is already open; call, raise or fold")]
    BetAlreadyOpen { table_high: u32 },
    #[error("there is no bet to call; check or bet")]
    NothingToCall,
    #[error("there is no bet to raise; use bet")]
    NothingToRaise,
    #[error("cannot check while owing {owed} chips")]
    CannotCheck { owed: u32 },
    #[error("amount {amount} is below the minimum of {minimum}")]
    BelowMinimum { amount: u32, minimum: u32 },
    #[error("needs {needed} chips but only {available} remain")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("no chips left to go all-in with")]
    NoChips,
    #[error("seat {0} is human-controlled")]
    HumanControlled(usize),
}

/// Phase advance requested when it cannot happen. Nothing is mutated.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AdvanceError {
    #[error("no round has been started")]
    NoRound,
    #[error("betting is still open: {pending} must act")]
    BettingOpen { pending: String },
    #[error("the round is already settled")]
    RoundSettled,
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Hand(#[from] HandError),
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum HandError {
    #[error("hand evaluation needs 5 to 7 cards, got {0}")]
    CardCount(usize),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Advance(#[from] AdvanceError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("a round is in progress with {pot} chips in the pot")]
    RoundInProgress { pot: u32 },
    #[error("{name} has no chips left")]
    PlayerBusted { seat: usize, name: String },
    #[error("seat {seat} already holds two hole cards")]
    HoleCardsFull { seat: usize },
}
