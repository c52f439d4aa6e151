//! Turn-gated player controller.
//!
//! The host calls [`PlayerTurnController::on_tick`] once per frame and
//! [`PlayerTurnController::on_trigger_overlap`] whenever the player's tile
//! overlaps a trigger volume. Movement only happens on the player's turn;
//! pickups are not turn-gated.

use crate::authority::TurnAuthority;
use crate::components::{Element, Position, Totem, TriggerTag};
use crate::config::PlayerConfig;
use crate::engine::floor_transition::SceneTransitioner;
use crate::error::{GameError, Result};
use crate::events::{EventQueue, GameEvent, MoveSound};
use crate::level::Level;
use crate::systems::movement::{GridMovement, MoveProbe, MoveResult, MovementResolver, Obstacle};
use crate::systems::player_input::Direction;
use crate::time_system::{DeferredScheduler, TaskHandle};
use glam::IVec2;
use hecs::Entity;
use log::{debug, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredAction {
    RestartLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub position: Position,
    pub hit_points: i32,
    pub coin_balance: i32,
    pub is_active: bool,
}

/// One move, from the direction the player asked for to what stopped it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveAttempt {
    pub direction: Direction,
    pub blocked_by: Option<Obstacle>,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The player is switched off and ignores ticks
    Disabled,
    NotPlayersTurn,
    /// No input; the turn is kept
    Idle,
    Acted(MoveResult),
}

/// What overlapping a trigger volume did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapEffect {
    LevelExit,
    ElementUnlocked(Element),
    CoinCollected { balance: i32 },
    Ignored,
}

pub struct PlayerTurnController<A, R = GridMovement> {
    config: PlayerConfig,
    resolver: R,
    authority: Option<A>,
    state: PlayerState,
    deferred: DeferredScheduler<DeferredAction>,
    pending_restart: Option<TaskHandle>,
    game_over_sent: bool,
    events: EventQueue,
}

impl<A: TurnAuthority> PlayerTurnController<A, GridMovement> {
    pub fn new(config: PlayerConfig, start: Position) -> Self {
        Self::with_resolver(config, start, GridMovement)
    }
}

impl<A: TurnAuthority, R: MovementResolver> PlayerTurnController<A, R> {
    pub fn with_resolver(config: PlayerConfig, start: Position, resolver: R) -> Self {
        let hit_points = config.starting_hit_points;
        Self {
            config,
            resolver,
            authority: None,
            state: PlayerState {
                position: start,
                hit_points,
                coin_balance: 0,
                is_active: false,
            },
            deferred: DeferredScheduler::new(),
            pending_restart: None,
            game_over_sent: false,
            events: EventQueue::new(),
        }
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Bind the authority and load the coin balance from its wallet
    pub fn on_activate(&mut self, authority: A) -> Result<()> {
        if self.authority.is_some() {
            warn!("player activated twice");
            return Err(GameError::AlreadyActive);
        }
        self.state.coin_balance = authority.wallet().coins;
        self.state.is_active = true;
        self.authority = Some(authority);
        debug!(
            "player activated at {} with {} coins",
            self.state.position, self.state.coin_balance
        );
        Ok(())
    }

    /// Store the coin balance in the wallet and stop processing ticks
    pub fn on_deactivate(&mut self) -> Result<()> {
        let coins = self.state.coin_balance;
        let authority = self.authority_mut()?;
        let mut wallet = authority.wallet();
        wallet.coins = coins;
        authority.set_wallet(wallet);

        if self.state.is_active {
            self.state.is_active = false;
            self.events.push(GameEvent::PlayerDisabled);
            debug!("player deactivated with {} coins", coins);
        }
        Ok(())
    }

    /// Tear the player down. A pending level restart is cancelled and will
    /// never reach the scene transitioner.
    pub fn on_destroy(&mut self) {
        if let Some(handle) = self.pending_restart.take() {
            self.deferred.cancel(handle);
            debug!("cancelled pending level restart");
        }
        self.deferred.cancel_all();

        if self.state.is_active && self.authority.is_some() {
            if let Err(err) = self.on_deactivate() {
                warn!("failed to store wallet on destroy: {}", err);
            }
        }
    }

    // =========================================================================
    // TURN
    // =========================================================================

    /// Per-frame update. `input` holds the horizontal and vertical axes.
    pub fn on_tick(&mut self, input: IVec2, level: &mut Level) -> Result<TickOutcome> {
        puffin::profile_function!();

        let players_turn = self.authority_ref()?.is_players_turn();
        if !self.state.is_active {
            return Ok(TickOutcome::Disabled);
        }
        if !players_turn {
            return Ok(TickOutcome::NotPlayersTurn);
        }

        let direction = Direction::from_axes(input);
        if direction.is_none() {
            return Ok(TickOutcome::Idle);
        }

        let result = self.attempt_move(direction, level)?;
        Ok(TickOutcome::Acted(result))
    }

    /// Try to step one tile. The turn ends whatever the outcome.
    pub fn attempt_move(&mut self, direction: Direction, level: &mut Level) -> Result<MoveResult> {
        self.authority_ref()?;

        let result = self.resolve_move(direction, level);
        self.authority_mut()?.set_players_turn(false);
        result
    }

    fn resolve_move(&mut self, direction: Direction, level: &mut Level) -> Result<MoveResult> {
        let from = self.state.position;
        let mut attempt = MoveAttempt {
            direction,
            blocked_by: None,
        };

        match self.resolver.probe(level, from, direction) {
            MoveProbe::Clear(to) => {
                self.state.position = to;
                let sound = MoveSound::random(&mut rand::thread_rng());
                self.events.push(GameEvent::Moved { from, to, sound });
                debug!("player moved {:?} from {} to {}", direction, from, to);
                Ok(MoveResult::Moved(to))
            }
            MoveProbe::Obstacle(obstacle) => {
                attempt.blocked_by = Some(obstacle);
                debug!("move blocked: {:?}", attempt);
                self.on_blocked(obstacle, level)?;
                Ok(MoveResult::Attacked(obstacle))
            }
            MoveProbe::Wall => {
                trace!("move {:?} from {} hit a wall", direction, from);
                Ok(MoveResult::Blocked)
            }
        }
    }

    /// Interact with whatever stopped the move
    pub fn on_blocked(&mut self, obstacle: Obstacle, level: &mut Level) -> Result<()> {
        match obstacle {
            Obstacle::Totem(entity) => {
                let unlocked = self.authority_ref()?.wallet().elements;
                let element = match level.world.get::<&mut Totem>(entity) {
                    Ok(mut totem) => totem.on_hit(&unlocked),
                    Err(_) => {
                        warn!("totem {:?} is gone, nothing to attack", entity);
                        return Ok(());
                    }
                };
                self.events.push(GameEvent::Attacked {
                    totem: entity,
                    element,
                });
                debug!("player attacked totem {:?}, element now {:?}", entity, element);
            }
        }
        Ok(())
    }

    // =========================================================================
    // PICKUPS
    // =========================================================================

    /// React to the player overlapping a trigger volume. Works on or off turn.
    pub fn on_trigger_overlap(&mut self, level: &mut Level, other: Entity) -> Result<OverlapEffect> {
        self.authority_ref()?;

        if !level.is_active(other) {
            return Ok(OverlapEffect::Ignored);
        }
        let tag = level
            .world
            .get::<&TriggerTag>(other)
            .map(|tag| *tag)
            .unwrap_or(TriggerTag::Other);

        match tag {
            TriggerTag::Exit => {
                if self.pending_restart.is_none() {
                    let delay = self.config.restart_level_delay;
                    let handle = self.deferred.schedule_in(delay, DeferredAction::RestartLevel);
                    self.pending_restart = Some(handle);
                    self.events.push(GameEvent::LevelRestartScheduled { delay });
                    info!("player reached the exit, restarting level in {}s", delay);
                }
                self.on_deactivate()?;
                Ok(OverlapEffect::LevelExit)
            }
            TriggerTag::ElementFire => {
                self.authority_mut()?.unlock_element(Element::Fire);
                self.collect(level, other, tag);
                Ok(OverlapEffect::ElementUnlocked(Element::Fire))
            }
            TriggerTag::Coin => {
                self.state.coin_balance = self
                    .state
                    .coin_balance
                    .saturating_add(self.config.points_per_coin);
                self.collect(level, other, tag);
                Ok(OverlapEffect::CoinCollected {
                    balance: self.state.coin_balance,
                })
            }
            TriggerTag::Other => {
                trace!("ignoring overlap with {:?}", other);
                Ok(OverlapEffect::Ignored)
            }
        }
    }

    fn collect(&mut self, level: &mut Level, entity: Entity, tag: TriggerTag) {
        level.deactivate(entity);
        self.events.push(GameEvent::PickupCollected { entity, tag });
        debug!("picked up {} ({:?})", tag.as_str(), entity);
    }

    // =========================================================================
    // HEALTH
    // =========================================================================

    pub fn apply_damage(&mut self, amount: u32) -> Result<()> {
        self.authority_ref()?;

        let loss = i32::try_from(amount).unwrap_or(i32::MAX);
        self.state.hit_points = self.state.hit_points.saturating_sub(loss);
        self.events.push(GameEvent::Hit {
            damage: amount,
            remaining: self.state.hit_points,
        });
        debug!("player hit for {}, {} hp left", amount, self.state.hit_points);

        self.check_game_over()?;
        Ok(())
    }

    /// Notify the authority once when hit points run out. Returns whether
    /// the player is dead.
    pub fn check_game_over(&mut self) -> Result<bool> {
        if self.state.hit_points > 0 {
            return Ok(false);
        }
        if !self.game_over_sent {
            self.authority_mut()?.notify_game_over();
            self.game_over_sent = true;
            self.events.push(GameEvent::GameOver);
        }
        Ok(true)
    }

    // =========================================================================
    // TIME
    // =========================================================================

    /// Advance deferred tasks by `elapsed` seconds. Runs whether or not the
    /// player is active. Returns the number of tasks that fired.
    pub fn advance_time(&mut self, elapsed: f32, scenes: &mut impl SceneTransitioner) -> usize {
        let due = self.deferred.advance(elapsed);
        let fired = due.len();
        for action in due {
            match action {
                DeferredAction::RestartLevel => {
                    self.pending_restart = None;
                    info!("restarting level");
                    scenes.reload_current_level();
                }
            }
        }
        fired
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn hit_points(&self) -> i32 {
        self.state.hit_points
    }

    pub fn coin_balance(&self) -> i32 {
        self.state.coin_balance
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    pub fn has_pending_restart(&self) -> bool {
        self.pending_restart.is_some()
    }

    pub fn authority(&self) -> Option<&A> {
        self.authority.as_ref()
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain().collect()
    }

    fn authority_ref(&self) -> Result<&A> {
        self.authority.as_ref().ok_or(GameError::AuthorityUnbound)
    }

    fn authority_mut(&mut self) -> Result<&mut A> {
        self.authority.as_mut().ok_or(GameError::AuthorityUnbound)
    }
}
