//! Core game state - owns the level, the game manager and the player.

use crate::authority::{RoomGameManager, TurnAuthority, Wallet};
use crate::config::PlayerConfig;
use crate::error::Result;
use crate::events::GameEvent;
use crate::level::Level;
use crate::player::{OverlapEffect, PlayerTurnController, TickOutcome};
use crate::systems::movement::MoveResult;

use glam::IVec2;
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

use super::floor_transition::LevelReloader;

/// Game manager handle shared between the session and its player
pub type SharedAuthority = Rc<RefCell<RoomGameManager>>;

/// Everything one frame produced
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub outcome: TickOutcome,
    /// Effects of the triggers under the tile the player moved onto
    pub overlaps: Vec<OverlapEffect>,
    pub events: Vec<GameEvent>,
    /// The level was rebuilt at the end of this frame
    pub reloaded: bool,
}

/// Core game state - owns all simulation data.
pub struct GameState {
    /// Map the level is rebuilt from on every reload
    map: String,
    config: PlayerConfig,

    /// Current room
    pub level: Level,

    /// Turn owner and wallet, lent to the player on activation
    pub authority: SharedAuthority,

    pub player: PlayerTurnController<SharedAuthority>,

    reloader: LevelReloader,
}

impl GameState {
    pub fn new(map: &str, config: PlayerConfig) -> Result<Self> {
        Self::with_authority(map, config, Rc::new(RefCell::new(RoomGameManager::new())))
    }

    pub fn with_authority(
        map: &str,
        config: PlayerConfig,
        authority: SharedAuthority,
    ) -> Result<Self> {
        config.validate()?;
        let level = Level::from_ascii(map)?;
        let player = spawn_player(&config, &level, &authority)?;

        Ok(Self {
            map: map.to_string(),
            config,
            level,
            authority,
            player,
            reloader: LevelReloader::new(),
        })
    }

    /// Run one frame: the player's tick, pickups under its new tile, the
    /// room's turn and deferred tasks. A requested reload happens last.
    pub fn frame(&mut self, input: IVec2, elapsed: f32) -> Result<FrameReport> {
        puffin::profile_function!();

        let outcome = self.player.on_tick(input, &mut self.level)?;

        let mut overlaps = Vec::new();
        if let TickOutcome::Acted(MoveResult::Moved(pos)) = outcome {
            for (entity, _) in self.level.triggers_at(pos) {
                overlaps.push(self.player.on_trigger_overlap(&mut self.level, entity)?);
            }
        }

        self.authority.borrow_mut().finish_room_turn();
        self.player.advance_time(elapsed, &mut self.reloader);

        let events = self.player.drain_events();
        let reloaded = self.reloader.take_request();
        if reloaded {
            self.reload()?;
        }

        Ok(FrameReport {
            outcome,
            overlaps,
            events,
            reloaded,
        })
    }

    /// Damage from outside the player's own turn (traps, enemies)
    pub fn damage_player(&mut self, amount: u32) -> Result<Vec<GameEvent>> {
        self.player.apply_damage(amount)?;
        Ok(self.player.drain_events())
    }

    /// Tear down the current player and rebuild the room from its map. The
    /// new player loads its coins from the wallet the old one stored.
    fn reload(&mut self) -> Result<()> {
        self.player.on_destroy();
        self.level = Level::from_ascii(&self.map)?;
        self.player = spawn_player(&self.config, &self.level, &self.authority)?;
        self.authority.borrow_mut().advance_level();
        info!(
            "level {} loaded with {} coins",
            self.level_number(),
            self.player.coin_balance()
        );
        Ok(())
    }

    pub fn level_number(&self) -> u32 {
        self.authority.borrow().level()
    }

    pub fn wallet(&self) -> Wallet {
        self.authority.borrow().wallet()
    }

    pub fn is_game_over(&self) -> bool {
        self.authority.borrow().is_game_over()
    }

    pub fn reloads(&self) -> u32 {
        self.reloader.reloads()
    }
}

fn spawn_player(
    config: &PlayerConfig,
    level: &Level,
    authority: &SharedAuthority,
) -> Result<PlayerTurnController<SharedAuthority>> {
    let mut player = PlayerTurnController::new(config.clone(), level.player_start);
    player.on_activate(Rc::clone(authority))?;
    Ok(player)
}
