use serde::Serialize;

use crate::cards::Card;
use crate::engine::Phase;
use crate::history::{ActionRecord, RoundResult};
use crate::player::Controller;

/// One seat as seen by the viewer of a [`TableView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub seat: usize,
    pub name: String,
    pub controller: Controller,
    pub stack: u32,
    /// Chips put in during the current phase
    pub committed: u32,
    /// Chips put in over the whole round
    pub invested: u32,
    pub active: bool,
    pub all_in: bool,
    /// `None` while the cards are hidden from the viewer
    pub hole_cards: Option<Vec<Card>>,
}

/// Read-only snapshot of the table. Owns its data, so it can be kept or
/// serialized while the engine moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub phase: Phase,
    pub table_high: u32,
    pub pot: u32,
    pub min_bet: u32,
    pub board: Vec<Card>,
    /// Seat on turn, if a betting phase is open
    pub to_act: Option<usize>,
    /// Betting for the phase is complete and `advance_phase` will succeed
    pub can_advance: bool,
    pub viewer: usize,
    pub seats: [SeatView; 2],
    /// Human-readable description of the last thing that happened
    pub status: String,
    pub last_action: Option<ActionRecord>,
    pub result: Option<RoundResult>,
    pub seed: Option<u64>,
}

impl TableView {
    pub fn seat(&self, seat: usize) -> Option<&SeatView> {
        self.seats.get(seat)
    }

    /// The viewer's own hole cards.
    pub fn own_cards(&self) -> &[Card] {
        self.seats
            .get(self.viewer)
            .and_then(|s| s.hole_cards.as_deref())
            .unwrap_or(&[])
    }

    /// Chips the seat needs to put in to match the table-high.
    pub fn owed(&self, seat: usize) -> u32 {
        self.seats
            .get(seat)
            .map(|s| self.table_high.saturating_sub(s.committed))
            .unwrap_or(0)
    }
}
