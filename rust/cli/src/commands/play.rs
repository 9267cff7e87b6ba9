//! # Play Command
//!
//! Interactive rounds against a computer opponent. The human sits in seat 0
//! and types actions at a prompt; the opponent policy acts for seat 1 with
//! the engine's seeded dice, so a seed replays the whole session as long as
//! the human types the same actions.

use std::io::{BufRead, Write};

use headsup_ai::create_ai;
use headsup_engine::engine::Engine;
use headsup_engine::errors::GameError;
use headsup_engine::policy::OpponentPolicy;

use crate::commands::should_advance;
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_action;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

const HUMAN: usize = 0;

enum RoundEnd {
    Settled,
    Quit,
}

/// Plays up to `rounds` rounds, stopping early when a seat runs out of
/// chips or the player types `q`.
///
/// `seed`, `name` and `ai` override the matching [`Config`] values. Only the
/// first deal uses the seed directly; later deals draw theirs from the
/// engine.
///
/// # Errors
///
/// - [`CliError::Config`] for an unknown opponent policy
/// - [`CliError::Interrupted`] when stdin closes mid-session
/// - [`CliError::Engine`] if the engine refuses an operation the loop relies on
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    rounds: u32,
    seed: Option<u64>,
    name: Option<String>,
    ai: Option<String>,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let policy = create_ai(ai.as_deref().unwrap_or(&cfg.ai))?;
    let name = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| cfg.player_name.clone());
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    writeln!(
        out,
        "play: rounds={} seed={} ai={} stack={} min-bet={}",
        rounds,
        seed,
        policy.name(),
        cfg.starting_stack,
        cfg.min_bet
    )?;

    let mut eng = Engine::heads_up(cfg.table_config(), name, Some(seed));
    let mut played = 0u32;

    for i in 1..=rounds {
        let round_seed = (i == 1).then_some(seed);
        match eng.start_round(round_seed) {
            Ok(()) => {}
            Err(GameError::PlayerBusted { name, .. }) => {
                writeln!(out, "{} is out of chips.", name)?;
                break;
            }
            Err(e) => return Err(e.into()),
        }

        writeln!(out)?;
        writeln!(out, "Round {}", i)?;
        match play_round(&mut eng, policy.as_ref(), out, err, stdin)? {
            RoundEnd::Settled => played += 1,
            RoundEnd::Quit => {
                writeln!(out, "Session ended by player.")?;
                break;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Rounds played: {}", played)?;
    for p in eng.players() {
        writeln!(out, "{}: {} chips", p.name(), p.stack())?;
    }
    Ok(())
}

fn play_round(
    eng: &mut Engine,
    policy: &dyn OpponentPolicy,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<RoundEnd, CliError> {
    ui::render_table(out, &eng.current_state(HUMAN))?;

    while !eng.phase().is_settled() {
        if should_advance(eng) {
            advance(eng, out)?;
            continue;
        }
        let Some(seat) = eng.to_act() else {
            return Err(CliError::Engine(format!(
                "no seat on turn during {}",
                eng.phase()
            )));
        };

        if seat != HUMAN {
            let action = eng.play_policy_turn(policy)?;
            tracing::debug!(seat, action = %format_action(&action), "opponent acted");
            writeln!(out, "{}", eng.status())?;
            continue;
        }

        write!(
            out,
            "Your action (owe {}; fold/check/call/bet N/raise N/allin/next/q): ",
            eng.current_state(HUMAN).owed(HUMAN)
        )?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            return Err(CliError::Interrupted("input closed mid-round".to_string()));
        };
        match parse_player_action(&line) {
            ParseResult::Action(action) => match eng.submit_action(HUMAN, action) {
                Ok(_) => writeln!(out, "{}", eng.status())?,
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            ParseResult::Advance => {
                if eng.can_advance() {
                    advance(eng, out)?;
                } else {
                    ui::write_error(err, "betting is still open; act first")?;
                }
            }
            ParseResult::Quit => return Ok(RoundEnd::Quit),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    ui::render_result(out, &eng.current_state(HUMAN))?;
    Ok(RoundEnd::Settled)
}

fn advance(eng: &mut Engine, out: &mut dyn Write) -> Result<(), CliError> {
    let phase = eng.advance_phase()?;
    if !phase.is_settled() {
        writeln!(out, "{}", eng.status())?;
        ui::render_table(out, &eng.current_state(HUMAN))?;
    }
    Ok(())
}
