use headsup_engine::player::PlayerAction;
use headsup_engine::policy::{DecisionContext, Dice, OpponentPolicy};

/// Never bets or raises: checks when it can, calls when it can afford to,
/// and goes all-in when the call would take more than its stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassivePolicy;

impl OpponentPolicy for PassivePolicy {
    fn decide(&self, ctx: &DecisionContext, _dice: &mut dyn Dice) -> PlayerAction {
        match ctx.owed() {
            0 => PlayerAction::Check,
            owed if owed <= ctx.stack => PlayerAction::Call,
            _ if ctx.stack > 0 => PlayerAction::AllIn,
            _ => PlayerAction::Fold,
        }
    }

    fn name(&self) -> &str {
        "passive"
    }
}
