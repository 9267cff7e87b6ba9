use serde::Serialize;

use crate::cards::Card;

/// Community cards and the chip pot of the current round.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Board {
    cards: Vec<Card>,
    pot: u32,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(5),
            pot: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_to_pot(&mut self, amount: u32) {
        self.pot += amount;
    }

    /// Removes `amount` (capped at the pot) and returns what was removed.
    pub fn take(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.pot);
        self.pot -= taken;
        taken
    }

    /// Empties the pot, returning its total.
    pub fn take_pot(&mut self) -> u32 {
        std::mem::take(&mut self.pot)
    }

    pub fn reset(&mut self) {
        self.cards.clear();
        self.pot = 0;
    }
}
