//! Deal command: one round dealt from a seed and checked down to showdown,
//! for inspecting shuffles and hand evaluation.

use std::io::Write;

use headsup_engine::engine::{Engine, SeatConfig, TableConfig};
use headsup_engine::player::PlayerAction;

use crate::commands::should_advance;
use crate::error::CliError;
use crate::formatters::{format_board, format_hand};

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut eng = Engine::new(
        TableConfig::default(),
        [SeatConfig::human("P1"), SeatConfig::human("P2")],
        Some(seed),
    );
    eng.start_round(Some(seed))?;

    writeln!(out, "Seed: {}", seed)?;
    for p in eng.players() {
        writeln!(out, "Hole {}: {}", p.name(), format_board(p.hole_cards()))?;
    }

    while !eng.phase().is_settled() {
        if should_advance(&eng) {
            eng.advance_phase()?;
        } else if let Some(seat) = eng.to_act() {
            eng.submit_action(seat, PlayerAction::Check)?;
        }
    }

    writeln!(out, "Board: {}", format_board(eng.board()))?;
    if let Some(hands) = eng.result().and_then(|r| r.hands) {
        for (p, hand) in eng.players().iter().zip(hands.iter()) {
            writeln!(out, "{}: {}", p.name(), format_hand(hand))?;
        }
    }
    writeln!(out, "{}", eng.status())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: u64) -> String {
        let mut out = Vec::new();
        handle_deal_command(Some(seed), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_deal_shows_both_hands_and_board() {
        let text = deal(42);
        assert!(text.contains("Seed: 42"));
        assert!(text.contains("Hole P1: ["));
        assert!(text.contains("Hole P2: ["));
        assert!(text.contains("Board: ["));
        assert!(text.contains("Showdown:"));
    }

    #[test]
    fn test_same_seed_same_deal() {
        assert_eq!(deal(7), deal(7));
    }
}
