//! # Sim Command
//!
//! Policy against policy for many rounds, reporting who won and how. Chip
//! conservation is checked after every round; a violation aborts the run.

use std::io::Write;

use headsup_ai::create_ai;
use headsup_engine::engine::{Engine, SeatConfig};
use headsup_engine::errors::GameError;
use headsup_engine::history::Settlement;
use headsup_engine::policy::OpponentPolicy;

use crate::commands::should_advance;
use crate::config::Config;
use crate::error::CliError;

/// Tallies over a simulation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimSummary {
    pub rounds: u32,
    pub wins: [u32; 2],
    pub splits: u32,
    pub showdowns: u32,
    pub folds: u32,
    pub stacks: [u32; 2],
}

/// Runs up to `rounds` rounds between two seats driven by the `ai` policy
/// (or the configured one) and prints a summary.
///
/// # Errors
///
/// [`CliError::Config`] for an unknown policy and [`CliError::Engine`] if a
/// round loses or creates chips or the engine refuses a step.
pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    ai: Option<String>,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let policy = create_ai(ai.as_deref().unwrap_or(&cfg.ai))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    writeln!(out, "sim: rounds={} seed={} ai={}", rounds, seed, policy.name())?;

    let summary = simulate(rounds, seed, policy.as_ref(), cfg)?;

    writeln!(out, "Simulated: {} rounds", summary.rounds)?;
    writeln!(
        out,
        "Wins: North {}, South {}, split {}",
        summary.wins[0], summary.wins[1], summary.splits
    )?;
    writeln!(
        out,
        "Settled by showdown: {}, by fold: {}",
        summary.showdowns, summary.folds
    )?;
    writeln!(
        out,
        "Final stacks: North {}, South {}",
        summary.stacks[0], summary.stacks[1]
    )?;
    Ok(())
}

/// Plays the rounds and returns the tallies. Stops early once a seat is
/// out of chips.
pub fn simulate(
    rounds: u32,
    seed: u64,
    policy: &dyn OpponentPolicy,
    cfg: &Config,
) -> Result<SimSummary, CliError> {
    let table = cfg.table_config();
    let expected = 2 * u64::from(table.starting_stack);
    let mut eng = Engine::new(
        table,
        [SeatConfig::policy("North"), SeatConfig::policy("South")],
        Some(seed),
    );
    let mut summary = SimSummary::default();

    for i in 1..=rounds {
        match eng.start_round((i == 1).then_some(seed)) {
            Ok(()) => {}
            Err(GameError::PlayerBusted { name, .. }) => {
                tracing::info!(rounds = summary.rounds, busted = %name, "simulation ended early");
                break;
            }
            Err(e) => return Err(e.into()),
        }

        while !eng.phase().is_settled() {
            if should_advance(&eng) {
                eng.advance_phase()?;
            } else {
                eng.play_policy_turn(policy)?;
            }
        }

        if eng.chips_in_play() != expected {
            return Err(CliError::Engine(format!(
                "chip conservation violated after round {}: {} in play, expected {}",
                i,
                eng.chips_in_play(),
                expected
            )));
        }

        summary.rounds += 1;
        if let Some(result) = eng.result() {
            match result.settlement {
                Settlement::Fold => summary.folds += 1,
                Settlement::Showdown => summary.showdowns += 1,
            }
            match result.winners.as_slice() {
                [w] => summary.wins[*w] += 1,
                _ => summary.splits += 1,
            }
        }
    }

    let p = eng.players();
    summary.stacks = [p[0].stack(), p[1].stack()];
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_ai::random::RandomPolicy;

    #[test]
    fn test_tallies_add_up() {
        let cfg = Config::default();
        let s = simulate(50, 9, &RandomPolicy::default(), &cfg).unwrap();
        assert!(s.rounds >= 1 && s.rounds <= 50);
        assert_eq!(s.showdowns + s.folds, s.rounds);
        assert_eq!(s.wins[0] + s.wins[1] + s.splits, s.rounds);
        assert_eq!(s.stacks[0] + s.stacks[1], 2 * cfg.starting_stack);
    }

    #[test]
    fn test_same_seed_same_summary() {
        let cfg = Config::default();
        let a = simulate(30, 77, &RandomPolicy::default(), &cfg).unwrap();
        let b = simulate(30, 77, &RandomPolicy::default(), &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_prints_summary() {
        let mut out = Vec::new();
        handle_sim_command(5, Some(3), Some("passive".into()), &Config::default(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("sim: rounds=5 seed=3 ai=passive"));
        assert!(text.contains("Simulated: 5 rounds"));
        assert!(text.contains("by fold: 0"));
    }
}
