use headsup_engine::cards::{parse_cards, Card};
use headsup_engine::hand::{evaluate_best, evaluate_five, Category, HandStrength};

fn best(text: &str) -> HandStrength {
    let cards = parse_cards(text).expect("valid cards");
    evaluate_best(&cards).expect("5 to 7 cards")
}

fn five(text: &str) -> [Card; 5] {
    let cards = parse_cards(text).expect("valid cards");
    cards.try_into().expect("five cards")
}

#[test]
fn ace_high_straight_flush_is_royal() {
    let hs = best("Th Jh Qh Kh Ah 2c 3d");
    assert_eq!(hs.category, Category::RoyalFlush);
    assert_eq!(hs.category.value(), 9);
}

#[test]
fn king_high_straight_flush_is_not_royal() {
    let hs = best("9s Ts Js Qs Ks 2c Ad");
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.tiebreak(), vec![13]);
}

#[test]
fn wheel_is_a_five_high_straight() {
    let hs = evaluate_five(&five("Ah 2c 3d 4s 5h"));
    assert_eq!(hs.category, Category::Straight);
    assert_eq!(hs.category.value(), 4);
    assert_eq!(hs.tiebreak(), vec![5]);
}

#[test]
fn six_high_straight_beats_the_wheel() {
    let wheel = evaluate_five(&five("Ah 2c 3d 4s 5h"));
    let six_high = evaluate_five(&five("2c 3d 4s 5h 6c"));
    assert!(six_high > wheel);
}

#[test]
fn steel_wheel_is_a_straight_flush() {
    let hs = evaluate_five(&five("Ad 2d 3d 4d 5d"));
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.tiebreak(), vec![5]);
}

#[test]
fn four_of_a_kind_beats_full_house() {
    let quads = best("Ac Ad Ah As Kc Qd 2h");
    let full_house = best("Kc Kd Kh Qc Qd 2h 3s");
    assert_eq!(quads.category, Category::FourOfAKind);
    assert_eq!(full_house.category, Category::FullHouse);
    assert!(quads.cmp(&full_house).is_gt());
}

#[test]
fn lowest_quads_beat_highest_full_house() {
    let quads = evaluate_five(&five("2c 2d 2h 2s 3c"));
    let full_house = evaluate_five(&five("Ac Ad Ah Kc Kd"));
    assert!(quads > full_house);
}

#[test]
fn flush_beats_straight() {
    let flush = best("2h 5h 9h Jh Kh 3c 4d");
    let straight = best("5c 6h 7c 8h 9d 2s 3c");
    assert_eq!(flush.category, Category::Flush);
    assert_eq!(straight.category, Category::Straight);
    assert!(flush > straight);
}

#[test]
fn straight_beats_three_of_a_kind() {
    let straight = best("5c 6h 7c 8h 9d 2s 3c");
    let trips = best("Ac Ah Ad 9c 8h 2s 3d");
    assert_eq!(trips.category, Category::ThreeOfAKind);
    assert!(straight > trips);
}

#[test]
fn kicker_breaks_equal_pairs() {
    let ace_kicker = best("Kc Kd Ah 9c 7h 4s 2d");
    let queen_kicker = best("Kh Ks Qh 9d 7c 4d 2c");
    assert_eq!(ace_kicker.category, Category::OnePair);
    assert_eq!(ace_kicker.tiebreak(), vec![13, 14, 9, 7]);
    assert!(ace_kicker > queen_kicker);
}

#[test]
fn best_two_of_three_pairs_are_kept() {
    let hs = best("Ac Ad 8h 8s 3c 3d Kh");
    assert_eq!(hs.category, Category::TwoPair);
    assert_eq!(hs.tiebreak(), vec![14, 8, 13]);
}

#[test]
fn board_that_plays_for_both_ties() {
    let a = best("2c 3d Ah Kh Qh Jh Th");
    let b = best("2d 3c Ah Kh Qh Jh Th");
    assert!(a.cmp(&b).is_eq());
}

#[test]
fn six_card_flush_uses_top_five() {
    let hs = evaluate_best(&parse_cards("2s 4s 6s 8s Ts Qs").unwrap()).unwrap();
    assert_eq!(hs.category, Category::Flush);
    assert_eq!(hs.tiebreak(), vec![12, 10, 8, 6, 4]);
}

#[test]
fn category_names_read_naturally() {
    assert_eq!(Category::RoyalFlush.to_string(), "Royal Flush");
    assert_eq!(Category::HighCard.to_string(), "High Card");
    assert_eq!(Category::TwoPair.name(), "Two Pair");
}
