//! Card, board, hand and action formatters for terminal display.
//!
//! Suits print as glyphs (♥ ♦ ♣ ♠) where the terminal supports Unicode and
//! as letters (h d c s) otherwise.
//!
//! ```rust
//! use headsup_engine::cards::{Card, Rank, Suit};
//! use headsup_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use headsup_engine::cards::{Card, Suit};
use headsup_engine::hand::HandStrength;
use headsup_engine::player::PlayerAction;
use headsup_engine::rules::ValidatedAction;

/// Whether suit glyphs render. Windows consoles need a modern terminal;
/// everything else is assumed to cope.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        suit.letter().to_string()
    }
}

/// `A♠` or `As`.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Cards in brackets, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Category name followed by its tiebreak ranks, e.g. `Two Pair (K 4 9)`.
pub fn format_hand(hs: &HandStrength) -> String {
    let ranks: Vec<&str> = hs
        .tiebreak()
        .into_iter()
        .filter_map(headsup_engine::cards::Rank::from_strength)
        .map(|r| r.label())
        .collect();
    format!("{} ({})", hs.category, ranks.join(" "))
}

/// Formats a requested action the way the prompt accepts it back.
///
/// ```rust
/// use headsup_engine::player::PlayerAction;
/// use headsup_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::Bet(100)), "bet 100");
/// assert_eq!(format_action(&PlayerAction::AllIn), "all-in");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Bet(amount) => format!("bet {}", amount),
        PlayerAction::Raise(amount) => format!("raise {}", amount),
        PlayerAction::AllIn => "all-in".to_string(),
    }
}

/// Formats an applied action with the chips it moved.
pub fn format_applied(action: &ValidatedAction) -> String {
    match action {
        ValidatedAction::Fold => "fold".to_string(),
        ValidatedAction::Check => "check".to_string(),
        ValidatedAction::Call(n) => format!("call {}", n),
        ValidatedAction::Bet(n) => format!("bet {}", n),
        ValidatedAction::Raise { to, .. } => format!("raise to {}", to),
        ValidatedAction::AllIn(n) => format!("all-in {}", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_engine::cards::{parse_cards, Rank};
    use headsup_engine::hand::evaluate_best;

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");
        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_card_uses_t_for_ten() {
        let ten = Card::new(Rank::Ten, Suit::Clubs);
        assert!(format_card(&ten).starts_with('T'));
    }

    #[test]
    fn test_format_board_empty() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn test_format_board_with_cards() {
        let board = parse_cards("As Kh").unwrap();
        let formatted = format_board(&board);
        assert!(formatted.starts_with("[A"));
        assert!(formatted.contains(" K"));
        assert!(formatted.ends_with(']'));
    }

    #[test]
    fn test_format_hand_lists_tiebreak_ranks() {
        let hs = evaluate_best(&parse_cards("4c Kh 4s 9d Kc").unwrap()).unwrap();
        assert_eq!(format_hand(&hs), "Two Pair (K 4 9)");
    }

    #[test]
    fn test_format_action_raise() {
        assert_eq!(format_action(&PlayerAction::Raise(50)), "raise 50");
        assert_eq!(format_action(&PlayerAction::Check), "check");
    }

    #[test]
    fn test_format_applied_shows_chips() {
        assert_eq!(format_applied(&ValidatedAction::Call(30)), "call 30");
        assert_eq!(
            format_applied(&ValidatedAction::Raise { commit: 70, to: 90 }),
            "raise to 90"
        );
    }
}
