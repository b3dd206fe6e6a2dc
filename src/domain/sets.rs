//! The half-suit set catalog.
//!
//! The deck partitions into 8 fixed 6-card sets: per suit a Lower set
//! {A,2,3,4,5,6} and an Upper set {8,9,T,J,Q,K}. Sevens belong to no set and
//! never enter play; the dealt deck is the 48 set cards.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::cards::{Card, Rank, Suit, SUITS};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SetHalf {
    Lower,
    Upper,
}

/// One of the 8 half-suit sets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CardSet {
    pub suit: Suit,
    pub half: SetHalf,
}

const LOWER_RANKS: [Rank; 6] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
];

const UPPER_RANKS: [Rank; 6] = [
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl CardSet {
    /// Dense index 0..8 (suit-major, Lower before Upper).
    pub fn index(&self) -> usize {
        self.suit as usize * 2
            + match self.half {
                SetHalf::Lower => 0,
                SetHalf::Upper => 1,
            }
    }

    pub fn from_index(idx: usize) -> Option<CardSet> {
        if idx >= 8 {
            return None;
        }
        let suit = SUITS[idx / 2];
        let half = if idx % 2 == 0 {
            SetHalf::Lower
        } else {
            SetHalf::Upper
        };
        Some(CardSet { suit, half })
    }
}

/// The set a card belongs to; `None` for the out-of-play sevens.
pub fn set_of(card: Card) -> Option<CardSet> {
    let half = match card.rank {
        Rank::Ace | Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => SetHalf::Lower,
        Rank::Seven => return None,
        _ => SetHalf::Upper,
    };
    Some(CardSet {
        suit: card.suit,
        half,
    })
}

/// The 6 cards of a set, in rank order.
pub fn cards_of(set: CardSet) -> [Card; 6] {
    let ranks = match set.half {
        SetHalf::Lower => LOWER_RANKS,
        SetHalf::Upper => UPPER_RANKS,
    };
    ranks.map(|rank| Card {
        suit: set.suit,
        rank,
    })
}

/// All 8 sets in index order.
pub fn all_sets() -> [CardSet; 8] {
    let mut out = [CardSet {
        suit: Suit::Clubs,
        half: SetHalf::Lower,
    }; 8];
    let mut idx = 0;
    for suit in SUITS {
        for half in [SetHalf::Lower, SetHalf::Upper] {
            out[idx] = CardSet { suit, half };
            idx += 1;
        }
    }
    out
}

/// The 48 cards that are actually dealt (union of all sets), catalog order.
pub static PLAYING_DECK: Lazy<Vec<Card>> = Lazy::new(|| {
    let mut deck: Vec<Card> = all_sets().iter().flat_map(|&s| cards_of(s)).collect();
    deck.sort();
    deck
});

/// Whether a card is part of the dealt deck.
pub fn in_play(card: Card) -> bool {
    set_of(card).is_some()
}
