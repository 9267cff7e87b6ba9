//! One handler per subcommand.
//!
//! Handlers take their output streams as `&mut dyn Write` (and stdin as
//! `&mut dyn BufRead` where needed) and return [`CliError`] so that
//! [`crate::run`] owns the mapping to exit codes.
//!
//! [`CliError`]: crate::error::CliError

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use headsup_engine::engine::Engine;

/// Whether a driver should close the phase instead of asking the seat on
/// turn for another action: betting is complete and that seat has either
/// acted in this phase already or has nothing left to act with.
pub(crate) fn should_advance(eng: &Engine) -> bool {
    if !eng.can_advance() {
        return false;
    }
    let Some(seat) = eng.to_act() else {
        return true;
    };
    let phase = eng.phase();
    let acted = eng
        .history()
        .iter()
        .any(|r| r.seat == seat && r.phase == phase);
    acted || eng.players()[seat].is_all_in()
}
