//! Game flow orchestration - bridges pure domain logic with the store and
//! the broadcaster.
//!
//! One entry point per concern: `create_game`/`join_game` manage the
//! registry, `handle` applies a move end to end. A move is committed only
//! once the store accepted both the log entry and the aggregate; broadcast
//! happens after commit and never fails the move.

use std::sync::Arc;

use rand::prelude::*;
use tracing::{debug, info, warn};

use super::coordinator::GameCoordinator;
use crate::ai::BotPlayer;
use crate::broadcast::Broadcaster;
use crate::domain::events::GameEvent;
use crate::domain::inference::BeliefState;
use crate::domain::moves::{MoveKind, MoveOutcome, MoveRecord};
use crate::domain::player_view::PlayerView;
use crate::domain::state::{GameId, GameState, GameStatus, Seat};
use crate::domain::{asking, calling, lifecycle, RuleTable};
use crate::error::EngineError;
use crate::errors::domain::DomainError;
use crate::protocol::{Command, CommandReply};
use crate::repos::GameStore;

// No ambiguous characters; codes are read aloud between players.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
const CODE_LEN: usize = 6;
const CODE_ATTEMPTS: usize = 32;

pub struct GameFlowService<S: GameStore, B: Broadcaster> {
    store: Arc<S>,
    broadcaster: Arc<B>,
    coordinator: GameCoordinator,
}

impl<S: GameStore, B: Broadcaster> GameFlowService<S, B> {
    pub fn new(store: Arc<S>, broadcaster: Arc<B>) -> Self {
        Self {
            store,
            broadcaster,
            coordinator: GameCoordinator::new(),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Create a game and seat its creator at seat 0.
    pub async fn create_game(
        &self,
        rules: RuleTable,
        creator_name: impl Into<String>,
        avatar: Option<String>,
    ) -> Result<GameState, EngineError> {
        rules.validate()?;
        let game_id = self.store.next_game_id().await?;
        let join_code = self.unique_join_code().await?;
        let mut game = GameState::new(game_id, join_code, rules);
        let (_, events) = lifecycle::join(&mut game, creator_name, avatar, false)?;
        self.store.save_game(&game).await?;
        info!(game_id, code = %game.join_code, "game created");
        self.broadcast(game_id, &events).await;
        Ok(game)
    }

    /// Seat a player into an open game.
    pub async fn join_game(
        &self,
        game_id: GameId,
        name: impl Into<String>,
        avatar: Option<String>,
    ) -> Result<(Seat, Vec<GameEvent>), EngineError> {
        let _guard = self.coordinator.acquire(game_id).await;
        let mut game = self.store.load_game(game_id).await?;
        let (seat, events) = lifecycle::join(&mut game, name, avatar, false)?;
        self.store.save_game(&game).await?;
        debug!(game_id, seat, "player joined");
        self.broadcast(game_id, &events).await;
        Ok((seat, events))
    }

    /// Seat a player by join code.
    pub async fn join_by_code(
        &self,
        code: &str,
        name: impl Into<String>,
        avatar: Option<String>,
    ) -> Result<(GameId, Seat, Vec<GameEvent>), EngineError> {
        let game_id = self.store.find_by_code(code).await?.ok_or_else(|| {
            DomainError::not_found(
                crate::errors::domain::NotFoundKind::Game,
                format!("No joinable game with code {code}"),
            )
        })?;
        let (seat, events) = self.join_game(game_id, name, avatar).await?;
        Ok((game_id, seat, events))
    }

    /// Apply one move end to end: serialize, validate, persist, broadcast.
    pub async fn handle(&self, cmd: Command) -> Result<Vec<GameEvent>, EngineError> {
        let _guard = self.coordinator.acquire(cmd.game_id).await;

        let mut game = self.store.load_game(cmd.game_id).await?;
        let kind = resolve_seed(cmd.kind);
        debug!(
            game_id = cmd.game_id,
            actor = cmd.actor,
            move_type = kind.tag(),
            "applying move"
        );

        let (outcome, events) = apply(&mut game, cmd.actor, &kind)?;
        let record = MoveRecord::new(cmd.game_id, cmd.actor, kind, outcome);

        // Fail loudly on tracker bugs before anything is committed.
        self.check_trackers(&game, &record).await?;

        self.store.commit_move(&game, &record).await?;

        if game.status == GameStatus::Completed {
            info!(
                game_id = cmd.game_id,
                scores = ?game.scores(),
                "game completed"
            );
            self.coordinator.forget(cmd.game_id);
        }

        self.broadcast(cmd.game_id, &events).await;
        Ok(events)
    }

    /// `handle`, folded into the synchronous wire reply.
    pub async fn handle_reply(&self, cmd: Command) -> CommandReply {
        CommandReply::from_result(self.handle(cmd).await)
    }

    /// Redacted projection for one seat.
    pub async fn view(&self, game_id: GameId, seat: Seat) -> Result<PlayerView, EngineError> {
        let game = self.store.load_game(game_id).await?;
        Ok(game.view_for(seat)?)
    }

    /// One seat's belief state, rebuilt from the move log.
    pub async fn belief(&self, game_id: GameId, seat: Seat) -> Result<BeliefState, EngineError> {
        let game = self.store.load_game(game_id).await?;
        let log = self.store.load_moves(game_id).await?;
        Ok(BeliefState::replay(seat, &game.rules, &log)?)
    }

    /// Let a bot take the current turn.
    pub async fn drive_bot(
        &self,
        game_id: GameId,
        bot: &dyn BotPlayer,
    ) -> Result<Vec<GameEvent>, EngineError> {
        let game = self.store.load_game(game_id).await?;
        game.check_status(GameStatus::InProgress, "drive_bot")?;
        let seat = game.require_turn("drive_bot")?;
        let view = game.view_for(seat)?;
        let belief = self.belief(game_id, seat).await?;
        let kind = bot
            .choose_move(&view, &belief)
            .map_err(|e| DomainError::fault(format!("Bot for seat {seat} failed: {e}")))?;
        self.handle(Command {
            game_id,
            actor: seat,
            kind,
        })
        .await
    }

    /// A join code no currently-joinable game is using.
    ///
    /// Codes route humans into games; a duplicate would send a joiner to an
    /// arbitrary one of the colliding games.
    async fn unique_join_code(&self) -> Result<String, EngineError> {
        for _ in 0..CODE_ATTEMPTS {
            let code = generate_join_code();
            if self.store.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }
        Err(DomainError::fault("Join code generation kept colliding").into())
    }

    /// Replay every observer's tracker over the log plus the new record.
    ///
    /// An empty candidate set for an in-play card is an engine bug; the move
    /// aborts with a fault instead of committing bad state.
    async fn check_trackers(
        &self,
        game: &GameState,
        record: &MoveRecord,
    ) -> Result<(), EngineError> {
        if game.deal_seed.is_none() {
            return Ok(());
        }
        let mut log = self.store.load_moves(game.game_id).await?;
        log.push(record.clone());
        for seat in 0..game.rules.capacity {
            BeliefState::replay(seat, &game.rules, &log)?;
        }
        Ok(())
    }

    async fn broadcast(&self, game_id: GameId, events: &[GameEvent]) {
        for event in events {
            let result = match event.player_scope() {
                Some(seat) => self.broadcaster.publish_to(game_id, seat, event).await,
                None => self.broadcaster.publish(game_id, event).await,
            };
            if let Err(err) = result {
                // Fire-and-forget: the move already committed.
                warn!(game_id, error = %err, "event broadcast failed");
            }
        }
    }
}

/// Dispatch one move to its domain processor.
fn apply(
    game: &mut GameState,
    actor: Seat,
    kind: &MoveKind,
) -> Result<(MoveOutcome, Vec<GameEvent>), DomainError> {
    match kind {
        MoveKind::AddBots => {
            let events = lifecycle::add_bots(game, actor)?;
            Ok((MoveOutcome::Applied, events))
        }
        MoveKind::CreateTeams { first, second } => {
            let events = lifecycle::create_teams(game, actor, first, second)?;
            Ok((MoveOutcome::Applied, events))
        }
        MoveKind::Start { seed } => {
            let seed =
                seed.ok_or_else(|| DomainError::fault("Start reached apply without a seed"))?;
            let events = lifecycle::start(game, actor, seed)?;
            Ok((MoveOutcome::Dealt { seed }, events))
        }
        MoveKind::Ask { target, card } => {
            let result = asking::ask_card(game, actor, *target, *card)?;
            let outcome = if result.hit {
                MoveOutcome::AskHit
            } else {
                MoveOutcome::AskMiss
            };
            Ok((outcome, result.events))
        }
        MoveKind::Call { set, claim } => {
            let result = calling::call_set(game, actor, *set, claim)?;
            Ok((
                MoveOutcome::CallResolved {
                    awarded_to: result.awarded_to,
                    correct: result.correct,
                },
                result.events,
            ))
        }
        MoveKind::Transfer { to } => {
            let events = calling::transfer_turn(game, actor, *to)?;
            Ok((MoveOutcome::Transferred { to: *to }, events))
        }
    }
}

/// The service owns seed generation so the domain stays deterministic.
fn resolve_seed(kind: MoveKind) -> MoveKind {
    match kind {
        MoveKind::Start { seed: None } => MoveKind::Start {
            seed: Some(rand::rng().random()),
        },
        other => other,
    }
}

fn generate_join_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
