//! Deterministic card dealing logic.

use super::cards::Card;
use super::rules::RuleTable;
use super::sets::PLAYING_DECK;
use crate::errors::domain::DomainError;

/// Simple deterministic RNG for shuffling.
///
/// SplitMix64-style generator: good statistical properties, fast, and
/// reproducible given a seed, which keeps the deal replayable from the
/// move log.
struct SimpleLcg {
    state: u64,
}

impl SimpleLcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xBF58476D1CE4E5B9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_range(&mut self, max: usize) -> usize {
        let m = max as u64;
        // Rejection sampling above the largest multiple of m avoids modulo bias.
        let limit = u64::MAX - (u64::MAX % m);

        loop {
            let x = self.next();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

/// Fisher-Yates shuffle using the deterministic RNG.
fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = SimpleLcg::new(seed);
    for i in (1..deck.len()).rev() {
        let j = rng.next_range(i + 1);
        deck.swap(i, j);
    }
}

/// Deal the 48-card playing deck evenly, deterministically for a seed.
///
/// Returns one sorted hand per seat. The rule table decides how many.
pub fn deal_hands(rules: &RuleTable, seed: u64) -> Result<Vec<Vec<Card>>, DomainError> {
    rules.validate()?;

    let mut deck = PLAYING_DECK.clone();
    shuffle_with_seed(&mut deck, seed);

    let hand_size = rules.hand_size();
    let mut hands = Vec::with_capacity(rules.capacity as usize);
    for seat in 0..rules.capacity as usize {
        let start = seat * hand_size;
        let mut hand = deck[start..start + hand_size].to_vec();
        hand.sort();
        hands.push(hand);
    }

    Ok(hands)
}
