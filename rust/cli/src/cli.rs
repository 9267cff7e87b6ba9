//! Command-line definitions parsed by clap.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "headsup",
    version,
    about = "Heads-up Texas Hold'em against a computer opponent"
)]
pub struct HeadsupCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds against the computer (you are seat 0)
    Play {
        /// Number of rounds to play
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
        /// Seed for the first deal; later rounds follow from it
        #[arg(long)]
        seed: Option<u64>,
        /// Your name at the table
        #[arg(long)]
        name: Option<String>,
        /// Opponent policy (random, passive)
        #[arg(long)]
        ai: Option<String>,
    },
    /// Let two policies play each other
    Sim {
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
    },
    /// Deal one round and check it down to showdown
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate 5 to 7 cards, e.g. `eval Ah Kh Qh Jh Th`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
