use headsup_engine::cards::{parse_cards, Card};
use headsup_engine::engine::{Engine, Phase, TableConfig, TieRule};
use headsup_engine::errors::{ActionError, AdvanceError, DeckError, GameError};
use headsup_engine::hand::Category;
use headsup_engine::history::Settlement;
use headsup_engine::player::PlayerAction as A;

/// Deal order: hole cards alternate from seat 0, then burn + flop,
/// burn + turn, burn + river. Burns are 4d 6d 8d.
fn stacked(p0: &str, p1: &str, board: &str) -> Vec<Card> {
    let p0 = parse_cards(p0).unwrap();
    let p1 = parse_cards(p1).unwrap();
    let b = parse_cards(board).unwrap();
    let burns = parse_cards("4d 6d 8d").unwrap();
    vec![
        p0[0], p1[0], p0[1], p1[1], burns[0], b[0], b[1], b[2], burns[1], b[3], burns[2], b[4],
    ]
}

fn engine_with(tie_rule: TieRule) -> Engine {
    let config = TableConfig {
        tie_rule,
        ..TableConfig::default()
    };
    Engine::heads_up(config, "Ana", Some(99))
}

fn run_out(eng: &mut Engine) {
    while !eng.phase().is_settled() {
        eng.advance_phase().expect("betting closed");
    }
}

#[test]
fn better_hand_takes_the_pot() {
    let mut eng = engine_with(TieRule::Split);
    eng.start_round_stacked(stacked("As Ah", "7c 2d", "Kd Qs 9h 5c 3s"))
        .unwrap();
    eng.submit_action(0, A::Bet(100)).unwrap();
    eng.submit_action(1, A::Call).unwrap();
    run_out(&mut eng);

    assert_eq!(eng.phase(), Phase::SettledByShowdown);
    assert_eq!(eng.players()[0].stack(), 1_100);
    assert_eq!(eng.players()[1].stack(), 900);

    let result = eng.result().unwrap();
    assert_eq!(result.settlement, Settlement::Showdown);
    assert_eq!(result.winners, vec![0]);
    assert_eq!(result.pot, 200);
    let hands = result.hands.unwrap();
    assert_eq!(hands[0].category, Category::OnePair);
    assert_eq!(hands[1].category, Category::HighCard);
    assert_eq!(hands[1].tiebreak(), vec![13, 12, 9, 7, 5]);
}

#[test]
fn tie_splits_the_pot_by_default() {
    let mut eng = engine_with(TieRule::Split);
    eng.start_round_stacked(stacked("2c 3d", "2d 3c", "Ah Kh Qh Jh Th"))
        .unwrap();
    eng.submit_action(0, A::Bet(60)).unwrap();
    eng.submit_action(1, A::Call).unwrap();
    run_out(&mut eng);

    let result = eng.result().unwrap();
    assert_eq!(result.winners, vec![0, 1]);
    assert_eq!(result.notes.as_deref(), Some("split pot"));
    assert_eq!(result.hands.unwrap()[0].category, Category::RoyalFlush);
    assert_eq!(eng.players()[0].stack(), 1_000);
    assert_eq!(eng.players()[1].stack(), 1_000);
}

#[test]
fn random_awardee_gives_whole_pot_to_one_seat() {
    let mut eng = engine_with(TieRule::RandomAwardee);
    eng.start_round_stacked(stacked("2c 3d", "2d 3c", "Ah Kh Qh Jh Th"))
        .unwrap();
    eng.submit_action(0, A::Bet(60)).unwrap();
    eng.submit_action(1, A::Call).unwrap();
    run_out(&mut eng);

    let result = eng.result().unwrap();
    assert_eq!(result.winners.len(), 1);
    let winner = result.winners[0];
    assert_eq!(eng.players()[winner].stack(), 1_060);
    assert_eq!(eng.players()[1 - winner].stack(), 940);
}

#[test]
fn short_all_in_gets_uncalled_chips_returned() {
    let mut eng = engine_with(TieRule::Split);
    eng.start_round(Some(1)).unwrap();
    eng.submit_action(0, A::Bet(100)).unwrap();
    eng.submit_action(1, A::Fold).unwrap();
    assert_eq!(eng.players()[0].stack(), 1_100);
    assert_eq!(eng.players()[1].stack(), 900);

    eng.start_round_stacked(stacked("7c 2d", "As Ah", "Kd Qs 9h 5c 3s"))
        .unwrap();
    eng.submit_action(0, A::AllIn).unwrap();
    assert_eq!(eng.table_high(), 1_100);
    assert_eq!(
        eng.submit_action(1, A::Call),
        Err(ActionError::InsufficientChips {
            needed: 1_100,
            available: 900
        })
    );
    eng.submit_action(1, A::AllIn).unwrap();
    assert_eq!(eng.table_high(), 1_100);
    assert!(eng.betting_complete());
    run_out(&mut eng);

    let result = eng.result().unwrap();
    assert_eq!(result.returned, Some((0, 200)));
    assert_eq!(result.pot, 1_800);
    assert_eq!(result.winners, vec![1]);
    assert_eq!(eng.players()[0].stack(), 200);
    assert_eq!(eng.players()[1].stack(), 1_800);
    assert_eq!(eng.chips_in_play(), 2_000);
}

#[test]
fn busted_seat_cannot_start_a_round() {
    let mut eng = engine_with(TieRule::Split);
    eng.start_round_stacked(stacked("7c 2d", "As Ah", "Kd Qs 9h 5c 3s"))
        .unwrap();
    eng.submit_action(0, A::AllIn).unwrap();
    eng.submit_action(1, A::Call).unwrap();
    run_out(&mut eng);
    assert_eq!(eng.players()[0].stack(), 0);

    assert_eq!(
        eng.start_round(None),
        Err(GameError::PlayerBusted {
            seat: 0,
            name: "Ana".to_string()
        })
    );
}

#[test]
fn fold_before_any_bet_settles_an_empty_pot() {
    let mut eng = engine_with(TieRule::Split);
    eng.start_round(Some(2)).unwrap();
    eng.submit_action(0, A::Fold).unwrap();
    let result = eng.result().unwrap();
    assert_eq!(result.settlement, Settlement::Fold);
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.pot, 0);
    assert!(result.hands.is_none());
    assert_eq!(eng.chips_in_play(), 2_000);
}

#[test]
fn short_deck_fails_without_changing_the_round() {
    let mut eng = engine_with(TieRule::Split);
    let cards = parse_cards("As Ah Kd Kc").unwrap();
    eng.start_round_stacked(cards).unwrap();
    assert_eq!(eng.deck_remaining(), 0);
    assert_eq!(
        eng.advance_phase(),
        Err(AdvanceError::Deck(DeckError::Exhausted))
    );
    assert_eq!(eng.phase(), Phase::PreFlop);
    assert!(eng.board().is_empty());
}

#[test]
fn deck_too_short_for_hole_cards_is_refused() {
    let mut eng = engine_with(TieRule::Split);
    let cards = parse_cards("As Ah Kd").unwrap();
    assert_eq!(
        eng.start_round_stacked(cards),
        Err(GameError::Deck(DeckError::Exhausted))
    );
    assert_eq!(eng.phase(), Phase::NotStarted);
}
