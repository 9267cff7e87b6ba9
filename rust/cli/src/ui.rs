//! Terminal output helpers shared by the commands.

use std::io::Write;

use headsup_engine::view::TableView;

use crate::formatters::{format_board, format_hand};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prints the table as `view.viewer` sees it. The seat on turn is marked
/// with `*`; hidden hole cards print as `[?? ??]`.
pub fn render_table(out: &mut dyn Write, view: &TableView) -> std::io::Result<()> {
    writeln!(
        out,
        "--- {} | pot {} | table-high {} ---",
        view.phase, view.pot, view.table_high
    )?;
    writeln!(out, "Board: {}", format_board(&view.board))?;
    for seat in &view.seats {
        let cards = seat
            .hole_cards
            .as_deref()
            .map(format_board)
            .unwrap_or_else(|| "[?? ??]".to_string());
        let marker = if view.to_act == Some(seat.seat) { '*' } else { ' ' };
        let note = if !seat.active {
            " (folded)"
        } else if seat.all_in {
            " (all-in)"
        } else {
            ""
        };
        writeln!(
            out,
            "{} {}: {} chips, {} in this phase {}{}",
            marker, seat.name, seat.stack, seat.committed, cards, note
        )?;
    }
    Ok(())
}

/// Prints how a settled round ended.
pub fn render_result(out: &mut dyn Write, view: &TableView) -> std::io::Result<()> {
    writeln!(out, "{}", view.status)?;
    if let Some(hands) = view.result.as_ref().and_then(|r| r.hands) {
        for (seat, hand) in view.seats.iter().zip(hands.iter()) {
            writeln!(out, "  {}: {}", seat.name, format_hand(hand))?;
        }
    }
    if let Some((seat, chips)) = view.result.as_ref().and_then(|r| r.returned) {
        writeln!(
            out,
            "  {} uncalled chips returned to {}",
            chips, view.seats[seat].name
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_engine::engine::{Engine, TableConfig};

    #[test]
    fn test_render_table_hides_opponent_cards() {
        let mut eng = Engine::heads_up(TableConfig::default(), "Ana", Some(1));
        eng.start_round(Some(1)).unwrap();
        let mut out = Vec::new();
        render_table(&mut out, &eng.current_state(0)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("pre-flop"));
        assert!(text.contains("* Ana: 1000 chips"));
        assert!(text.contains("CPU: 1000 chips, 0 in this phase [?? ??]"));
    }

    #[test]
    fn test_write_error_prefix() {
        let mut err = Vec::new();
        write_error(&mut err, "boom").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: boom\n");
    }
}
