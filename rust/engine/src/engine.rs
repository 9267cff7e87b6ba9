use std::cmp::Ordering;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{ActionError, AdvanceError, DeckError, GameError, HandError};
use crate::hand::{evaluate_best, HandStrength};
use crate::history::{ActionRecord, RoundRecord, RoundResult, Settlement};
use crate::player::{Controller, Player, PlayerAction, STARTING_STACK};
use crate::policy::{DecisionContext, OpponentPolicy};
use crate::rules::{self, validate_action, BettingContext, ValidatedAction, MIN_BET};
use crate::view::{SeatView, TableView};

/// ChaCha stream used for policy dice, distinct from the shuffle stream.
const DICE_STREAM: u64 = 1;

/// Where a round stands. Betting happens in the four street phases;
/// `Showdown` is passed through on the way to `SettledByShowdown`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No round has been dealt yet
    NotStarted,
    /// Hole cards dealt, no community cards
    PreFlop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    Showdown,
    SettledByFold,
    SettledByShowdown,
}

impl Phase {
    pub fn is_betting(self) -> bool {
        matches!(self, Phase::PreFlop | Phase::Flop | Phase::Turn | Phase::River)
    }

    pub fn is_settled(self) -> bool {
        matches!(self, Phase::SettledByFold | Phase::SettledByShowdown)
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::NotStarted => "not started",
            Phase::PreFlop => "pre-flop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
            Phase::SettledByFold => "settled by fold",
            Phase::SettledByShowdown => "settled by showdown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happens to the pot when both showdown hands are equal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieRule {
    /// Split evenly; an odd chip goes to seat 0
    #[default]
    Split,
    /// Whole pot to one tied seat chosen with the engine's dice
    RandomAwardee,
}

impl TieRule {
    pub fn from_name(name: &str) -> Option<TieRule> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "split" => Some(TieRule::Split),
            "random" | "random_awardee" => Some(TieRule::RandomAwardee),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TieRule::Split => "split",
            TieRule::RandomAwardee => "random_awardee",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub starting_stack: u32,
    pub min_bet: u32,
    pub tie_rule: TieRule,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            min_bet: MIN_BET,
            tie_rule: TieRule::Split,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub controller: Controller,
}

impl SeatConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Human,
        }
    }

    pub fn policy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Policy,
        }
    }
}

/// Heads-up round engine.
///
/// Owns the deck, the board and both seats for one round at a time and is
/// the only thing that mutates them. Every operation runs to completion; the
/// caller serializes access (one engine per game).
///
/// # Examples
///
/// ```
/// use headsup_engine::engine::{Engine, Phase, TableConfig};
/// use headsup_engine::player::PlayerAction;
///
/// let mut engine = Engine::heads_up(TableConfig::default(), "Ana", Some(7));
/// engine.start_round(Some(12345)).unwrap();
/// assert_eq!(engine.phase(), Phase::PreFlop);
///
/// engine.submit_action(0, PlayerAction::Bet(50)).unwrap();
/// engine.submit_action(1, PlayerAction::Call).unwrap();
/// engine.advance_phase().unwrap();
/// assert_eq!(engine.phase(), Phase::Flop);
/// assert_eq!(engine.board().len(), 3);
/// assert_eq!(engine.pot(), 100);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: TableConfig,
    deck: Deck,
    board: Board,
    players: [Player; 2],
    phase: Phase,
    /// Highest phase contribution that must be matched
    table_high: u32,
    /// Seat on turn; meaningful only while betting
    to_act: usize,
    status: String,
    record: RoundRecord,
    rng: ChaCha20Rng,
}

impl Engine {
    pub fn new(config: TableConfig, seats: [SeatConfig; 2], seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let [a, b] = seats;
        let players = [
            Player::new(0, a.name, config.starting_stack, a.controller),
            Player::new(1, b.name, config.starting_stack, b.controller),
        ];
        Self {
            deck: Deck::new_with_seed(seed),
            board: Board::new(),
            players,
            phase: Phase::NotStarted,
            table_high: 0,
            to_act: 0,
            status: String::new(),
            record: RoundRecord::default(),
            rng: ChaCha20Rng::seed_from_u64(seed),
            config,
        }
    }

    /// Human in seat 0 against a policy-controlled "CPU" in seat 1.
    pub fn heads_up(config: TableConfig, name: impl Into<String>, seed: Option<u64>) -> Self {
        Self::new(
            config,
            [SeatConfig::human(name), SeatConfig::policy("CPU")],
            seed,
        )
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn table_high(&self) -> u32 {
        self.table_high
    }
    pub fn pot(&self) -> u32 {
        self.board.pot()
    }
    pub fn board(&self) -> &[Card] {
        self.board.cards()
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }
    pub fn status(&self) -> &str {
        &self.status
    }
    pub fn record(&self) -> &RoundRecord {
        &self.record
    }
    pub fn history(&self) -> &[ActionRecord] {
        &self.record.actions
    }
    pub fn result(&self) -> Option<&RoundResult> {
        self.record.result.as_ref()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Seat on turn while a betting phase is open.
    pub fn to_act(&self) -> Option<usize> {
        if self.phase.is_betting() && self.active_count() > 1 {
            Some(self.to_act)
        } else {
            None
        }
    }

    pub fn is_turn_of(&self, seat: usize) -> bool {
        self.to_act() == Some(seat) && self.players.get(seat).is_some_and(|p| p.is_active())
    }

    /// Total chips on the table: every stack plus the pot.
    pub fn chips_in_play(&self) -> u64 {
        self.players.iter().map(|p| u64::from(p.stack())).sum::<u64>() + u64::from(self.pot())
    }

    /// Deals a fresh round: new deck, cleared board and seats, shuffle,
    /// two hole cards each in seat order, seat 0 to act.
    ///
    /// With `Some(seed)` the shuffle and the policy dice both replay exactly.
    ///
    /// # Errors
    ///
    /// [`GameError::RoundInProgress`] while a betting phase is open (the pot
    /// would be lost) and [`GameError::PlayerBusted`] if a seat has no chips.
    pub fn start_round(&mut self, seed: Option<u64>) -> Result<(), GameError> {
        self.ensure_can_start()?;
        let seed = seed.unwrap_or_else(|| self.rng.random());
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        self.deal(deck, seed, Some(seed))
    }

    /// Like [`Engine::start_round`] but deals `cards` in the given order:
    /// hole cards alternate from seat 0, then burn and reveal per street.
    /// Twelve cards cover a full round; a shorter deck runs out with
    /// [`DeckError::Exhausted`].
    pub fn start_round_stacked(&mut self, cards: Vec<Card>) -> Result<(), GameError> {
        self.ensure_can_start()?;
        let dice_seed = self.rng.random();
        self.deal(Deck::stacked(cards), dice_seed, None)
    }

    fn ensure_can_start(&self) -> Result<(), GameError> {
        if self.phase.is_betting() {
            return Err(GameError::RoundInProgress { pot: self.pot() });
        }
        if let Some(p) = self.players.iter().find(|p| p.stack() == 0) {
            return Err(GameError::PlayerBusted {
                seat: p.seat(),
                name: p.name().to_string(),
            });
        }
        Ok(())
    }

    fn deal(&mut self, mut deck: Deck, dice_seed: u64, seed: Option<u64>) -> Result<(), GameError> {
        if deck.remaining() < 2 * self.players.len() {
            return Err(DeckError::Exhausted.into());
        }
        self.board.reset();
        for p in &mut self.players {
            p.reset_for_round();
        }
        for _ in 0..2 {
            for p in &mut self.players {
                let c = deck.draw()?;
                p.give_card(c)?;
            }
        }

        self.deck = deck;
        self.rng = ChaCha20Rng::seed_from_u64(dice_seed);
        self.rng.set_stream(DICE_STREAM);
        self.table_high = 0;
        self.to_act = 0;
        self.phase = Phase::PreFlop;
        self.record = seed.map(RoundRecord::new).unwrap_or_default();
        self.status = "New round: pre-flop, hole cards dealt.".to_string();
        tracing::info!(
            ?seed,
            stack_0 = self.players[0].stack(),
            stack_1 = self.players[1].stack(),
            "round started"
        );
        Ok(())
    }

    /// Betting numbers for `seat`, as handed to an opponent policy.
    pub fn decision_context(&self, seat: usize) -> Option<DecisionContext> {
        let p = self.players.get(seat)?;
        Some(DecisionContext {
            table_high: self.table_high,
            pot: self.pot(),
            stack: p.stack(),
            committed: p.committed(),
            min_bet: self.config.min_bet,
        })
    }

    /// Validates and applies one action for the seat on turn, then passes
    /// the turn on. A fold that leaves one seat in settles the round.
    ///
    /// # Errors
    ///
    /// Any [`ActionError`]; the engine is unchanged and the turn is kept.
    pub fn submit_action(
        &mut self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<ValidatedAction, ActionError> {
        let applied = self.try_apply(seat, action);
        if let Err(e) = &applied {
            tracing::warn!(seat, ?action, error = %e, "action rejected");
        }
        applied
    }

    fn try_apply(&mut self, seat: usize, action: PlayerAction) -> Result<ValidatedAction, ActionError> {
        if !self.phase.is_betting() {
            return Err(ActionError::RoundNotActive(self.phase));
        }
        if seat >= self.players.len() {
            return Err(ActionError::UnknownSeat(seat));
        }
        if seat != self.to_act {
            return Err(ActionError::NotPlayersTurn {
                expected: self.to_act,
                actual: seat,
            });
        }
        let player = &self.players[seat];
        let ctx = BettingContext {
            table_high: self.table_high,
            committed: player.committed(),
            stack: player.stack(),
            min_bet: self.config.min_bet,
        };
        let validated = validate_action(&ctx, action)?;

        let chips = validated.chips();
        let player = &mut self.players[seat];
        player.commit(chips)?;
        self.board.add_to_pot(chips);
        match validated {
            ValidatedAction::Fold => player.fold(),
            ValidatedAction::Check | ValidatedAction::Call(_) => {}
            ValidatedAction::Bet(amount) => self.table_high = amount,
            ValidatedAction::Raise { to, .. } => self.table_high = to,
            ValidatedAction::AllIn(_) => self.table_high = self.table_high.max(player.committed()),
        }

        self.status = describe(self.players[seat].name(), validated, self.table_high);
        self.record.actions.push(ActionRecord {
            seat,
            phase: self.phase,
            action: validated,
        });
        tracing::debug!(
            seat,
            action = ?validated,
            table_high = self.table_high,
            pot = self.pot(),
            "action applied"
        );

        if self.active_count() <= 1 {
            self.settle_by_fold();
        } else {
            self.to_act = self.first_active_from(seat + 1);
        }
        Ok(validated)
    }

    /// Lets `policy` act for the policy-controlled seat on turn, drawing
    /// from the engine's seeded dice. The chosen action goes through the
    /// same validation as a submitted one.
    pub fn play_policy_turn(
        &mut self,
        policy: &dyn OpponentPolicy,
    ) -> Result<PlayerAction, ActionError> {
        let seat = self.to_act().ok_or(ActionError::RoundNotActive(self.phase))?;
        if self.players[seat].controller() != Controller::Policy {
            return Err(ActionError::HumanControlled(seat));
        }
        let ctx = self
            .decision_context(seat)
            .ok_or(ActionError::UnknownSeat(seat))?;
        let action = policy.decide(&ctx, &mut self.rng);
        tracing::debug!(seat, policy = policy.name(), ?action, "policy decided");
        self.submit_action(seat, action)?;
        Ok(action)
    }

    /// Round-completion predicate for the current phase.
    pub fn betting_complete(&self) -> bool {
        rules::betting_complete(&self.players, self.table_high)
    }

    pub fn can_advance(&self) -> bool {
        self.phase.is_betting() && self.betting_complete()
    }

    /// Closes the current betting phase and moves the round on: burn and
    /// reveal for flop, turn and river; from the river, straight through
    /// showdown to settlement. Returns the new phase.
    ///
    /// # Errors
    ///
    /// [`AdvanceError`] when no round is running, it is already settled, or
    /// the phase still has a seat to act. Nothing is changed on error.
    pub fn advance_phase(&mut self) -> Result<Phase, AdvanceError> {
        match self.phase {
            Phase::NotStarted => return Err(AdvanceError::NoRound),
            Phase::SettledByFold | Phase::SettledByShowdown => {
                return Err(AdvanceError::RoundSettled)
            }
            _ => {}
        }
        if !self.betting_complete() {
            return Err(AdvanceError::BettingOpen {
                pending: self.players[self.to_act].name().to_string(),
            });
        }
        let (next, reveal) = match self.phase {
            Phase::PreFlop => (Phase::Flop, 3),
            Phase::Flop => (Phase::Turn, 1),
            Phase::Turn => (Phase::River, 1),
            _ => (Phase::Showdown, 0),
        };
        if reveal > 0 && self.deck.remaining() < reveal + 1 {
            return Err(DeckError::Exhausted.into());
        }
        let showdown_hands = if next == Phase::Showdown && self.active_count() > 1 {
            Some([self.best_hand(0)?, self.best_hand(1)?])
        } else {
            None
        };

        self.table_high = 0;
        for p in &mut self.players {
            p.start_phase();
        }
        if self.active_count() <= 1 {
            self.settle_by_fold();
            return Ok(self.phase);
        }

        if let Some(hands) = showdown_hands {
            self.phase = Phase::Showdown;
            self.resolve_showdown(hands);
            return Ok(self.phase);
        }

        self.deck.burn()?;
        for _ in 0..reveal {
            let c = self.deck.draw()?;
            self.board.add_card(c);
        }
        self.phase = next;
        // seat 0 opens pre-flop; later streets open with the next seat after it
        self.to_act = self.first_active_from(1);
        self.status = format!(
            "Betting round: {}. Board: {}",
            self.phase,
            self.board
                .cards()
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
        tracing::debug!(phase = %self.phase, board = self.board.cards().len(), "phase advanced");
        Ok(self.phase)
    }

    /// Snapshot for `viewer`. The other seat's hole cards stay hidden
    /// until the round is settled by showdown.
    pub fn current_state(&self, viewer: usize) -> TableView {
        let reveal_all = self.phase == Phase::SettledByShowdown;
        let seats = [
            self.seat_view(0, viewer, reveal_all),
            self.seat_view(1, viewer, reveal_all),
        ];
        TableView {
            phase: self.phase,
            table_high: self.table_high,
            pot: self.pot(),
            min_bet: self.config.min_bet,
            board: self.board.cards().to_vec(),
            to_act: self.to_act(),
            can_advance: self.can_advance(),
            viewer,
            seats,
            status: self.status.clone(),
            last_action: self.record.last_action().copied(),
            result: self.record.result.clone(),
            seed: self.record.seed,
        }
    }

    fn seat_view(&self, seat: usize, viewer: usize, reveal_all: bool) -> SeatView {
        let p = &self.players[seat];
        SeatView {
            seat,
            name: p.name().to_string(),
            controller: p.controller(),
            stack: p.stack(),
            committed: p.committed(),
            invested: p.invested(),
            active: p.is_active(),
            all_in: p.is_all_in(),
            hole_cards: (seat == viewer || reveal_all).then(|| p.hole_cards().to_vec()),
        }
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    fn first_active_from(&self, start: usize) -> usize {
        let n = self.players.len();
        (0..n)
            .map(|i| (start + i) % n)
            .find(|&i| self.players[i].is_active())
            .unwrap_or(start % n)
    }

    fn settle_by_fold(&mut self) {
        let winner = self.first_active_from(0);
        let pot = self.board.take_pot();
        self.players[winner].add_chips(pot);
        self.phase = Phase::SettledByFold;
        let loser = 1 - winner;
        self.status = format!(
            "{} folded. {} wins the pot of {} chips.",
            self.players[loser].name(),
            self.players[winner].name(),
            pot
        );
        self.record.result = Some(RoundResult {
            settlement: Settlement::Fold,
            winners: vec![winner],
            pot,
            returned: None,
            hands: None,
            notes: None,
        });
        tracing::info!(winner, pot, "round settled by fold");
    }

    fn best_hand(&self, seat: usize) -> Result<HandStrength, HandError> {
        let mut cards = self.players[seat].hole_cards().to_vec();
        cards.extend_from_slice(self.board.cards());
        evaluate_best(&cards)
    }

    /// Hands back chips one seat put in beyond what the other could match.
    fn return_uncalled(&mut self) -> Option<(usize, u32)> {
        let a = self.players[0].invested();
        let b = self.players[1].invested();
        let (seat, excess) = match a.cmp(&b) {
            Ordering::Greater => (0, a - b),
            Ordering::Less => (1, b - a),
            Ordering::Equal => return None,
        };
        let back = self.board.take(excess);
        self.players[seat].refund(back);
        Some((seat, back))
    }

    fn resolve_showdown(&mut self, hands: [HandStrength; 2]) {
        let returned = self.return_uncalled();
        let pot = self.board.take_pot();

        let (payouts, winners, notes) = match hands[0].cmp(&hands[1]) {
            Ordering::Greater => ([pot, 0], vec![0], None),
            Ordering::Less => ([0, pot], vec![1], None),
            Ordering::Equal => match self.config.tie_rule {
                TieRule::Split => {
                    let half = pot / 2;
                    (
                        [pot - half, half],
                        vec![0, 1],
                        Some("split pot".to_string()),
                    )
                }
                TieRule::RandomAwardee => {
                    let w = self.rng.random_range(0..2usize);
                    let mut payouts = [0, 0];
                    payouts[w] = pot;
                    (payouts, vec![w], Some("tie awarded at random".to_string()))
                }
            },
        };
        for (p, amount) in self.players.iter_mut().zip(payouts) {
            p.add_chips(amount);
        }

        self.phase = Phase::SettledByShowdown;
        self.status = match winners.as_slice() {
            [w] => format!(
                "Showdown: {} wins {} chips with {}.",
                self.players[*w].name(),
                pot,
                hands[*w].category
            ),
            _ => format!(
                "Showdown: tie with {}, pot of {} chips split.",
                hands[0].category, pot
            ),
        };
        tracing::info!(?winners, pot, ?returned, "round settled by showdown");
        self.record.result = Some(RoundResult {
            settlement: Settlement::Showdown,
            winners,
            pot,
            returned,
            hands: Some(hands),
            notes,
        });
    }
}

fn describe(name: &str, action: ValidatedAction, table_high: u32) -> String {
    match action {
        ValidatedAction::Fold => format!("{} folds.", name),
        ValidatedAction::Check => format!("{} checks.", name),
        ValidatedAction::Call(n) => format!("{} calls {} chips.", name, n),
        ValidatedAction::Bet(n) => format!("{} bets {} chips.", name, n),
        ValidatedAction::Raise { to, .. } => format!("{} raises to {} chips.", name, to),
        ValidatedAction::AllIn(n) => format!(
            "{} goes all-in with {} chips (table-high {}).",
            name, n, table_high
        ),
    }
}
