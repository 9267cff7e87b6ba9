use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::errors::HandError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Totally ordered rank descriptor of a five-card hand.
///
/// Ordering is lexicographic: category first, then `kickers` element-wise.
/// Kickers hold grouped ranks followed by the remaining ranks, high to low,
/// zero padded (a straight carries only its high card, 5 for the wheel).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    pub kickers: [u8; 5],
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.tiebreak())
    }
}

impl HandStrength {
    /// Tiebreak sequence without padding.
    pub fn tiebreak(&self) -> Vec<u8> {
        self.kickers.iter().copied().take_while(|&k| k != 0).collect()
    }
}

/// Evaluates exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut rank_mask: u16 = 0;
    for c in cards {
        let r = c.rank.strength();
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
    }
    let first_suit: Suit = cards[0].suit;
    let flush = cards.iter().all(|c| c.suit == first_suit);
    let straight = straight_high_from_mask(rank_mask);

    match (flush, straight) {
        (true, Some(14)) => return strength(Category::RoyalFlush, &[14]),
        (true, Some(high)) => return strength(Category::StraightFlush, &[high]),
        _ => {}
    }

    // distinct ranks ordered by (count desc, rank desc)
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    let ordered: Vec<u8> = groups.iter().map(|&(_, r)| r).collect();
    let shape: Vec<u8> = groups.iter().map(|&(n, _)| n).collect();

    if flush {
        return strength(Category::Flush, &ordered);
    }
    if let Some(high) = straight {
        return strength(Category::Straight, &[high]);
    }
    let category = match shape.as_slice() {
        [4, 1] => Category::FourOfAKind,
        [3, 2] => Category::FullHouse,
        [3, 1, 1] => Category::ThreeOfAKind,
        [2, 2, 1] => Category::TwoPair,
        [2, 1, 1, 1] => Category::OnePair,
        _ => Category::HighCard,
    };
    strength(category, &ordered)
}

/// Best five-card strength over every 5-card subset of 5 to 7 cards.
///
/// The search is exhaustive (21 subsets for seven cards), so the result
/// does not depend on the order of `cards`.
pub fn evaluate_best(cards: &[Card]) -> Result<HandStrength, HandError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(HandError::CardCount(n));
    }
    let mut best: Option<HandStrength> = None;
    for mask in 0u32..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }
        let mut five = [cards[0]; 5];
        let mut slot = 0;
        for (i, &c) in cards.iter().enumerate() {
            if mask & (1 << i) != 0 {
                five[slot] = c;
                slot += 1;
            }
        }
        let hs = evaluate_five(&five);
        best = match best {
            Some(b) if b >= hs => Some(b),
            _ => Some(hs),
        };
    }
    best.ok_or(HandError::CardCount(n))
}

fn strength(category: Category, ranks: &[u8]) -> HandStrength {
    let mut kickers = [0u8; 5];
    for (slot, &r) in kickers.iter_mut().zip(ranks) {
        *slot = r;
    }
    HandStrength { category, kickers }
}

/// Highest straight in a rank bitset (bit `r` set for rank strength `r`).
/// An Ace also counts as 1, so the wheel reports a high card of 5.
fn straight_high_from_mask(mask: u16) -> Option<u8> {
    let mut m = mask;
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5
    for high in (5..=14u8).rev() {
        let window = 0b1_1111u16 << (high - 4);
        if (m & window) == window {
            return Some(high);
        }
    }
    None
}
