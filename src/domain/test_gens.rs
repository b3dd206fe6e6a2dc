// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::cards::RANKS;
use crate::domain::sets::{CardSet, SetHalf};
use crate::domain::state::Seat;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(RANKS.to_vec())
}

/// Any catalog card, sevens included.
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// A card that is actually dealt (never a seven).
pub fn in_play_card() -> impl Strategy<Value = Card> {
    card().prop_filter("sevens are out of play", |c| c.rank != Rank::Seven)
}

pub fn card_set() -> impl Strategy<Value = CardSet> {
    (suit(), prop_oneof![Just(SetHalf::Lower), Just(SetHalf::Upper)])
        .prop_map(|(suit, half)| CardSet { suit, half })
}

/// A seat in the standard 6-player fixture.
pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=5u8
}

/// An arbitrary deal seed.
pub fn deal_seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
