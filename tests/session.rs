//! Whole-room scenarios driven through `GameState::frame`.

use glam::IVec2;
use totem_dungeon::components::{Element, Position, TriggerTag};
use totem_dungeon::config::PlayerConfig;
use totem_dungeon::constants::{DEFAULT_ROOM_MAP, FRAME_DURATION};
use totem_dungeon::engine::GameState;
use totem_dungeon::events::GameEvent;
use totem_dungeon::player::{OverlapEffect, TickOutcome};
use totem_dungeon::systems::{MoveResult, Obstacle};

const RIGHT: IVec2 = IVec2::new(1, 0);
const LEFT: IVec2 = IVec2::new(-1, 0);
const UP: IVec2 = IVec2::new(0, 1);
const DOWN: IVec2 = IVec2::new(0, -1);

fn new_game() -> GameState {
    GameState::new(DEFAULT_ROOM_MAP, PlayerConfig::default()).unwrap()
}

fn step(game: &mut GameState, input: IVec2) -> totem_dungeon::engine::FrameReport {
    game.frame(input, FRAME_DURATION).unwrap()
}

#[test]
fn test_turn_returns_every_frame() {
    let mut game = new_game();
    for _ in 0..2 {
        let report = step(&mut game, RIGHT);
        assert!(matches!(report.outcome, TickOutcome::Acted(MoveResult::Moved(_))));
    }
    assert_eq!(game.player.position(), Position::new(3, 4));
}

#[test]
fn test_idle_frame_does_nothing() {
    let mut game = new_game();
    let report = step(&mut game, IVec2::ZERO);
    assert_eq!(report.outcome, TickOutcome::Idle);
    assert!(report.events.is_empty());
    assert_eq!(game.player.position(), Position::new(1, 4));
}

#[test]
fn test_coin_then_exit_reloads_with_coins() {
    let mut game = new_game();

    for _ in 0..2 {
        step(&mut game, RIGHT);
    }
    let report = step(&mut game, RIGHT);
    assert_eq!(report.overlaps, vec![OverlapEffect::CoinCollected { balance: 20 }]);
    assert_eq!(game.level.count_active(TriggerTag::Coin), 2);

    for _ in 0..2 {
        step(&mut game, RIGHT);
    }
    let report = step(&mut game, RIGHT);
    assert_eq!(report.overlaps, vec![OverlapEffect::LevelExit]);
    assert!(report.events.contains(&GameEvent::LevelRestartScheduled { delay: 1.0 }));
    assert!(report.events.contains(&GameEvent::PlayerDisabled));
    assert!(!game.player.is_active());
    assert_eq!(game.wallet().coins, 20);

    // Input is ignored while waiting for the restart
    let report = step(&mut game, LEFT);
    assert_eq!(report.outcome, TickOutcome::Disabled);
    assert!(!report.reloaded);
    let report = step(&mut game, IVec2::ZERO);
    assert!(!report.reloaded);
    let report = step(&mut game, IVec2::ZERO);
    assert!(report.reloaded);

    assert_eq!(game.level_number(), 2);
    assert_eq!(game.reloads(), 1);
    assert!(game.player.is_active());
    assert_eq!(game.player.position(), Position::new(1, 4));
    assert_eq!(game.player.coin_balance(), 20);
    assert_eq!(game.player.hit_points(), 10);
    assert_eq!(game.level.count_active(TriggerTag::Coin), 3);

    let report = step(&mut game, RIGHT);
    assert!(matches!(report.outcome, TickOutcome::Acted(MoveResult::Moved(_))));
}

#[test]
fn test_totem_takes_fire_after_pickup() {
    let mut game = new_game();

    step(&mut game, DOWN);
    step(&mut game, DOWN);
    step(&mut game, RIGHT);
    assert_eq!(game.player.position(), Position::new(2, 2));

    let report = step(&mut game, RIGHT);
    let TickOutcome::Acted(MoveResult::Attacked(Obstacle::Totem(totem))) = report.outcome else {
        panic!("expected to hit the totem, got {:?}", report.outcome);
    };
    assert_eq!(game.player.position(), Position::new(2, 2));
    assert!(report.events.contains(&GameEvent::Attacked { totem, element: None }));

    // Around the totem: coin, then the fire element
    let report = step(&mut game, DOWN);
    assert_eq!(report.overlaps, vec![OverlapEffect::CoinCollected { balance: 20 }]);
    step(&mut game, RIGHT);
    step(&mut game, RIGHT);
    step(&mut game, UP);
    let report = step(&mut game, RIGHT);
    assert_eq!(report.overlaps, vec![OverlapEffect::ElementUnlocked(Element::Fire)]);
    assert!(game.wallet().elements.contains(&Element::Fire));

    step(&mut game, LEFT);
    let report = step(&mut game, LEFT);
    assert!(report.events.contains(&GameEvent::Attacked {
        totem,
        element: Some(Element::Fire)
    }));
}

#[test]
fn test_diagonal_press_moves_sideways() {
    let mut game = new_game();
    let report = step(&mut game, IVec2::new(1, -1));
    assert_eq!(
        report.outcome,
        TickOutcome::Acted(MoveResult::Moved(Position::new(2, 4)))
    );
}

#[test]
fn test_game_over_freezes_turns() {
    let mut game = new_game();
    game.damage_player(5).unwrap();
    assert!(!game.is_game_over());

    let events = game.damage_player(5).unwrap();
    assert!(events.contains(&GameEvent::GameOver));
    assert!(game.is_game_over());
    assert_eq!(game.authority.borrow().game_over_notifications(), 1);

    let report = step(&mut game, RIGHT);
    assert_eq!(report.outcome, TickOutcome::NotPlayersTurn);
    assert_eq!(game.player.position(), Position::new(1, 4));
}

#[test]
fn test_invalid_map_is_rejected() {
    assert!(GameState::new("#####", PlayerConfig::default()).is_err());
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = PlayerConfig {
        starting_hit_points: 0,
        ..PlayerConfig::default()
    };
    assert!(GameState::new(DEFAULT_ROOM_MAP, config).is_err());
}
