//! Seam between the round engine and automated decision making.
//!
//! A policy sees only the betting numbers in [`DecisionContext`] and draws
//! randomness from an injected [`Dice`], so tests can swap in
//! [`ScriptedDice`] and get the same decision every time.

use std::collections::VecDeque;

use rand::Rng;

use crate::player::PlayerAction;

/// The numbers an automated seat decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionContext {
    pub table_high: u32,
    pub pot: u32,
    pub stack: u32,
    pub committed: u32,
    pub min_bet: u32,
}

impl DecisionContext {
    /// Chips needed to match the table-high.
    pub fn owed(&self) -> u32 {
        self.table_high.saturating_sub(self.committed)
    }
}

/// Source of randomness for policies.
pub trait Dice {
    /// Uniform value in `[0, 1)`.
    fn chance(&mut self) -> f64;
    /// Uniform integer in `low..=high`; returns `low` when the range is empty.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> Dice for R {
    fn chance(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.random_range(low..=high)
    }
}

/// Replays fixed values. Once a queue runs dry, `chance` yields 0.0 and
/// `between` yields its lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    chances: VecDeque<f64>,
    picks: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(chances: impl IntoIterator<Item = f64>, picks: impl IntoIterator<Item = u32>) -> Self {
        Self {
            chances: chances.into_iter().collect(),
            picks: picks.into_iter().collect(),
        }
    }
}

impl Dice for ScriptedDice {
    fn chance(&mut self) -> f64 {
        self.chances.pop_front().unwrap_or(0.0)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.picks
            .pop_front()
            .map(|v| v.clamp(low, high.max(low)))
            .unwrap_or(low)
    }
}

/// Decision policy for a policy-controlled seat.
///
/// Implementations must only return actions the seat can pay for: when
/// nothing is owed, `Check` or `Bet`; when the stack cannot cover the amount
/// owed, `AllIn` or `Fold`; otherwise `Call`, `Raise` or `Fold`. Bets and
/// raise increments respect `ctx.min_bet`.
pub trait OpponentPolicy: Send + Sync {
    fn decide(&self, ctx: &DecisionContext, dice: &mut dyn Dice) -> PlayerAction;

    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn scripted_dice_replays_then_falls_back() {
        let mut dice = ScriptedDice::new([0.25], [500, 3]);
        assert_eq!(dice.chance(), 0.25);
        assert_eq!(dice.chance(), 0.0);
        assert_eq!(dice.between(10, 80), 80);
        assert_eq!(dice.between(10, 80), 10);
        assert_eq!(dice.between(10, 80), 10);
    }

    #[test]
    fn rng_dice_stays_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let dice: &mut dyn Dice = &mut rng;
        for _ in 0..200 {
            let v = dice.between(10, 80);
            assert!((10..=80).contains(&v));
            let p = dice.chance();
            assert!((0.0..1.0).contains(&p));
        }
        assert_eq!(dice.between(7, 7), 7);
    }

    #[test]
    fn owed_never_underflows() {
        let ctx = DecisionContext {
            table_high: 20,
            pot: 40,
            stack: 100,
            committed: 30,
            min_bet: 10,
        };
        assert_eq!(ctx.owed(), 0);
    }
}
