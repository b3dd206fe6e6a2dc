//! Belief-driven bot.
//!
//! Plays from the inference tracker: calls a set the moment every card in it
//! is pinned inside its own team, otherwise asks for the card it knows the
//! most about from an opponent who could hold it.

use super::trait_def::{BotError, BotPlayer};
use crate::domain::inference::BeliefState;
use crate::domain::moves::{CardClaim, MoveKind};
use crate::domain::player_view::PlayerView;
use crate::domain::sets::{cards_of, CardSet};
use crate::domain::state::{Seat, TeamId};

#[derive(Default)]
pub struct TrackerBot;

impl TrackerBot {
    pub fn new() -> Self {
        Self
    }

    fn team_of(view: &PlayerView, seat: Seat) -> Option<TeamId> {
        view.players.get(seat as usize).and_then(|p| p.team)
    }

    /// A set whose 6 cards are all known to sit inside the bot's team.
    fn certain_call(view: &PlayerView, belief: &BeliefState) -> Option<(CardSet, Vec<CardClaim>)> {
        let mine = view.my_team()?;
        'sets: for set in view.open_sets() {
            let mut claim = Vec::with_capacity(6);
            for card in cards_of(set) {
                let holder = match belief.known_holder(card) {
                    Some(h) if Self::team_of(view, h) == Some(mine) => h,
                    _ => continue 'sets,
                };
                claim.push(CardClaim { card, holder });
            }
            return Some((set, claim));
        }
        None
    }

    /// The most constrained (card, opponent) pair still worth asking about.
    fn best_ask(view: &PlayerView, belief: &BeliefState) -> Option<(Seat, crate::domain::Card)> {
        let mine = view.my_team()?;
        let mut best: Option<(u32, Seat, crate::domain::Card)> = None;
        for card in view.askable_cards() {
            let opponents: Vec<Seat> = belief
                .candidate_seats(card)
                .into_iter()
                .filter(|&s| {
                    Self::team_of(view, s) != Some(mine) && view.players[s as usize].cards > 0
                })
                .collect();
            let Some(&target) = opponents.first() else {
                continue;
            };
            let count = belief.candidate_count(card);
            if best.map(|(c, _, _)| count < c).unwrap_or(true) {
                best = Some((count, target, card));
            }
        }
        best.map(|(_, target, card)| (target, card))
    }

    /// Forced call when no ask is available: claim known holders, guess the rest.
    fn fallback_call(view: &PlayerView, belief: &BeliefState) -> Option<MoveKind> {
        let mine = view.my_team()?;
        let teammate = view.teammates().into_iter().next().unwrap_or(view.seat);
        let set = view.open_sets().into_iter().next()?;
        let claim = cards_of(set)
            .into_iter()
            .map(|card| {
                let holder = if view.hand.contains(&card) {
                    view.seat
                } else {
                    match belief.known_holder(card) {
                        Some(h) if Self::team_of(view, h) == Some(mine) => h,
                        _ => teammate,
                    }
                };
                CardClaim { card, holder }
            })
            .collect();
        Some(MoveKind::Call { set, claim })
    }
}

impl BotPlayer for TrackerBot {
    fn choose_move(&self, view: &PlayerView, belief: &BeliefState) -> Result<MoveKind, BotError> {
        // Collect certain sets before anything else; a pinned set can only
        // be stolen by an opponent's call if left on the table.
        if let Some((set, claim)) = Self::certain_call(view, belief) {
            return Ok(MoveKind::Call { set, claim });
        }

        if view.pending_transfer && view.hand.is_empty() {
            let to = view
                .teammates()
                .into_iter()
                .filter(|&s| view.players[s as usize].cards > 0)
                .max_by_key(|&s| view.players[s as usize].cards);
            if let Some(to) = to {
                return Ok(MoveKind::Transfer { to });
            }
        }

        if let Some((target, card)) = Self::best_ask(view, belief) {
            return Ok(MoveKind::Ask { target, card });
        }

        Self::fallback_call(view, belief).ok_or(BotError::NoLegalMove)
    }
}
