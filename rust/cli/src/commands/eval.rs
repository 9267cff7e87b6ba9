//! Eval command: best five-card hand out of 5 to 7 cards.

use std::io::Write;

use headsup_engine::cards::parse_cards;
use headsup_engine::hand::evaluate_best;

use crate::error::CliError;
use crate::formatters::{format_board, format_hand};

/// Accepts cards as separate arguments or in one string, e.g.
/// `["Ah", "Kh"]` or `["Ah Kh"]`.
///
/// # Errors
///
/// [`CliError::InvalidInput`] for an unreadable card, a repeated card or a
/// card count outside 5..=7.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(&cards.join(" "))?;
    if let Some((i, card)) = cards
        .iter()
        .enumerate()
        .find(|&(i, c)| cards[..i].contains(c))
    {
        return Err(CliError::InvalidInput(format!(
            "card {} appears more than once (position {})",
            card,
            i + 1
        )));
    }
    let strength = evaluate_best(&cards)?;

    writeln!(out, "Cards: {}", format_board(&cards))?;
    writeln!(out, "Best hand: {}", format_hand(&strength))?;
    writeln!(out, "Category value: {}", strength.category.value())?;
    Ok(())
}
