//! # headsup CLI Library
//!
//! Command-line front end for the heads-up Hold'em engine: play rounds
//! against a computer opponent, simulate policy matches, deal a single
//! round for inspection, evaluate hands and show the configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, dispatches to a subcommand and returns the
//! process exit code.
//!
//! ```
//! use std::io;
//! let args = vec!["headsup", "eval", "Ah", "Kh", "Qh", "Jh", "Th"];
//! let code = headsup_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Subcommands
//!
//! - `play`: interactive rounds against an opponent policy
//! - `sim`: policy against policy with a win/settlement summary
//! - `deal`: one seeded round checked down to showdown
//! - `eval`: best hand out of 5 to 7 cards
//! - `cfg`: resolved configuration with value sources

use std::io::Write;

use clap::Parser;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HeadsupCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

/// Parses `args` and runs the subcommand.
///
/// Exit codes: [`exit_code::SUCCESS`] on success (including `--help` and
/// `--version`), [`exit_code::INTERRUPTED`] when stdin closes during `play`,
/// and [`exit_code::ERROR`] for everything else.
///
/// `play` reads actions from the process stdin.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    run_with_input(args, out, err, &mut input)
}

/// [`run`] with an explicit input stream for `play`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn std::io::BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HeadsupCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    match dispatch(cli.cmd, out, err, stdin) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            match e {
                CliError::Interrupted(_) => exit_code::INTERRUPTED,
                _ => exit_code::ERROR,
            }
        }
    }
}

fn dispatch(
    cmd: Commands,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn std::io::BufRead,
) -> Result<(), CliError> {
    match cmd {
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Cfg => {
            let resolved = config::load_with_sources()?;
            handle_cfg_command(&resolved, out)
        }
        Commands::Play {
            rounds,
            seed,
            name,
            ai,
        } => {
            let resolved = config::load_with_sources()?;
            handle_play_command(rounds, seed, name, ai, &resolved.config, out, err, stdin)
        }
        Commands::Sim { rounds, seed, ai } => {
            let resolved = config::load_with_sources()?;
            handle_sim_command(rounds, seed, ai, &resolved.config, out)
        }
    }
}
