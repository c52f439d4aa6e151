//! Game event system for decoupled communication between systems.
//!
//! The player controller emits events, the host drains them once per frame.
//! This allows animation, audio, UI, etc. to react without tight coupling.

use crate::components::{Element, Position, TriggerTag};
use hecs::Entity;
use rand::Rng;

/// Which of the two footstep clips accompanies a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSound {
    First,
    Second,
}

impl MoveSound {
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            MoveSound::First
        } else {
            MoveSound::Second
        }
    }
}

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The player stepped onto a new tile
    Moved {
        from: Position,
        to: Position,
        sound: MoveSound,
    },
    /// The player struck a totem that blocked its move
    Attacked {
        totem: Entity,
        element: Option<Element>,
    },
    /// The player took damage
    Hit { damage: u32, remaining: i32 },
    /// A pickup was collected and switched off
    PickupCollected { entity: Entity, tag: TriggerTag },
    /// The player reached the exit; the level reloads after `delay` seconds
    LevelRestartScheduled { delay: f32 },
    /// The player stopped processing ticks
    PlayerDisabled,
    /// Hit points ran out
    GameOver,
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
