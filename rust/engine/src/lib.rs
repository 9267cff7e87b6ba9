//! # headsup-engine: Heads-up Hold'em Round Engine
//!
//! Deals and referees rounds of two-seat Texas Hold'em: shuffling, betting
//! validation, phase progression, showdown evaluation and pot settlement.
//! Every round can be replayed exactly from its seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Suit, Rank and Card, plus text parsing
//! - [`deck`] - Seeded 52-card deck with draw and burn
//! - [`hand`] - Best-five-of-seven evaluation and strength ordering
//! - [`player`] - Seat state and the actions a seat can take
//! - [`board`] - Community cards and the pot
//! - [`rules`] - Action validation and the phase-completion predicate
//! - [`policy`] - Decision seam for automated seats
//! - [`engine`] - The round state machine
//! - [`view`] - Snapshots handed to callers
//! - [`history`] - Accepted actions and round results
//! - [`errors`] - Error types for every operation
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_engine::cards::parse_cards;
//! use headsup_engine::hand::{evaluate_best, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let strength = evaluate_best(&cards).unwrap();
//! assert_eq!(strength.category, Category::RoyalFlush);
//! assert_eq!(strength.category.value(), 9);
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use headsup_engine::engine::{Engine, Phase, TableConfig};
//! use headsup_engine::player::PlayerAction;
//!
//! let mut engine = Engine::heads_up(TableConfig::default(), "Ana", None);
//! engine.start_round(Some(42)).unwrap();
//! assert!(engine.is_turn_of(0));
//!
//! engine.submit_action(0, PlayerAction::Bet(20)).unwrap();
//! engine.submit_action(1, PlayerAction::Call).unwrap();
//! engine.advance_phase().unwrap();
//!
//! // after the flop the second seat opens
//! assert!(engine.is_turn_of(1));
//! engine.submit_action(1, PlayerAction::Check).unwrap();
//! engine.submit_action(0, PlayerAction::Bet(30)).unwrap();
//! engine.submit_action(1, PlayerAction::Fold).unwrap();
//! assert_eq!(engine.phase(), Phase::SettledByFold);
//! assert_eq!(engine.players()[0].stack(), 1_020);
//! ```

pub mod board;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod history;
pub mod player;
pub mod policy;
pub mod rules;
pub mod view;
