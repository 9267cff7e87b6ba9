//! Parsing of what the player types at the action prompt.

use headsup_engine::player::PlayerAction;

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action
    Action(PlayerAction),
    /// Close the current betting phase (`next`)
    Advance,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses prompt input (case-insensitive):
///
/// - `f`/`fold`, `k`/`check`, `c`/`call`, `allin`/`all-in`
/// - `bet N`, `raise N` (N is the raise increment)
/// - `n`/`next` to close the phase, `q`/`quit` to leave
///
/// ```rust
/// use headsup_cli::validation::{parse_player_action, ParseResult};
/// use headsup_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("bet 100"), ParseResult::Action(PlayerAction::Bet(100)));
/// assert_eq!(parse_player_action("next"), ParseResult::Advance);
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "n" | "next" => ParseResult::Advance,
        "f" | "fold" => ParseResult::Action(PlayerAction::Fold),
        "k" | "check" => ParseResult::Action(PlayerAction::Check),
        "c" | "call" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" | "a" => ParseResult::Action(PlayerAction::AllIn),
        "bet" | "b" => match parse_amount(parts.get(1), "Bet", "bet 100") {
            Ok(amount) => ParseResult::Action(PlayerAction::Bet(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "raise" | "r" => match parse_amount(parts.get(1), "Raise", "raise 50") {
            Ok(amount) => ParseResult::Action(PlayerAction::Raise(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <amount>, allin, next, q",
            verb
        )),
    }
}

fn parse_amount(text: Option<&&str>, what: &str, example: &str) -> Result<u32, String> {
    let Some(text) = text else {
        return Err(format!("{} requires an amount (e.g., '{}')", what, example));
    };
    match text.parse::<u32>() {
        Ok(0) => Err(format!("{} amount must be positive", what)),
        Ok(amount) => Ok(amount),
        Err(_) => Err(format!("Invalid {} amount", what.to_lowercase())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_actions() {
        assert_eq!(parse_player_action("fold"), ParseResult::Action(PlayerAction::Fold));
        assert_eq!(parse_player_action("CHECK"), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action(" c "), ParseResult::Action(PlayerAction::Call));
        assert_eq!(parse_player_action("all-in"), ParseResult::Action(PlayerAction::AllIn));
    }

    #[test]
    fn test_parse_amounts() {
        assert_eq!(
            parse_player_action("raise 25"),
            ParseResult::Action(PlayerAction::Raise(25))
        );
        assert_eq!(
            parse_player_action("bet"),
            ParseResult::Invalid("Bet requires an amount (e.g., 'bet 100')".to_string())
        );
        assert_eq!(
            parse_player_action("bet 0"),
            ParseResult::Invalid("Bet amount must be positive".to_string())
        );
        assert_eq!(
            parse_player_action("raise lots"),
            ParseResult::Invalid("Invalid raise amount".to_string())
        );
    }

    #[test]
    fn test_parse_control_words() {
        assert_eq!(parse_player_action("quit"), ParseResult::Quit);
        assert_eq!(parse_player_action("n"), ParseResult::Advance);
        assert_eq!(parse_player_action(""), ParseResult::Invalid("Empty input".to_string()));
        assert!(matches!(parse_player_action("dance"), ParseResult::Invalid(msg) if msg.contains("Unrecognized")));
    }
}
