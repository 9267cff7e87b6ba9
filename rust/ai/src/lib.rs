//! # headsup-ai: Opponent Policies
//!
//! Decision policies for policy-controlled seats. Every policy implements
//! [`OpponentPolicy`] from the engine crate, so it only ever sees the
//! betting numbers and the dice the engine hands it.
//!
//! ## Core Components
//!
//! - [`random`] - The stochastic opponent (default)
//! - [`passive`] - A check/call opponent for predictable runs
//! - [`create_ai`] - Factory resolving a policy by name
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_ai::create_ai;
//! use headsup_engine::engine::{Engine, TableConfig};
//! use headsup_engine::player::PlayerAction;
//!
//! let ai = create_ai("random").unwrap();
//! let mut engine = Engine::heads_up(TableConfig::default(), "Ana", Some(42));
//! engine.start_round(Some(42)).unwrap();
//! engine.submit_action(0, PlayerAction::Check).unwrap();
//!
//! let action = engine.play_policy_turn(ai.as_ref()).unwrap();
//! println!("{} chose {:?}", ai.name(), action);
//! ```

use thiserror::Error;

pub use headsup_engine::policy::{DecisionContext, Dice, OpponentPolicy, ScriptedDice};

pub mod passive;
pub mod random;

/// Names accepted by [`create_ai`].
pub const POLICY_NAMES: [&str; 2] = ["random", "passive"];

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("unknown AI type '{0}' (expected one of: random, passive)")]
pub struct UnknownPolicy(pub String);

/// Builds an opponent policy by name (case-insensitive).
///
/// # Errors
///
/// [`UnknownPolicy`] for names outside [`POLICY_NAMES`].
///
/// # Example
///
/// ```rust
/// use headsup_ai::create_ai;
///
/// assert_eq!(create_ai("random").unwrap().name(), "random");
/// assert!(create_ai("oracle").is_err());
/// ```
pub fn create_ai(ai_type: &str) -> Result<Box<dyn OpponentPolicy>, UnknownPolicy> {
    match ai_type.trim().to_ascii_lowercase().as_str() {
        "random" => Ok(Box::new(random::RandomPolicy::default())),
        "passive" => Ok(Box::new(passive::PassivePolicy)),
        _ => Err(UnknownPolicy(ai_type.to_string())),
    }
}
