use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

use totem_dungeon::config::PlayerConfig;
use totem_dungeon::constants::{DEFAULT_ROOM_MAP, FRAME_DURATION};
use totem_dungeon::engine::{FrameReport, GameState};
use totem_dungeon::input::{InputState, Key};

/// Walk a dungeon room one turn at a time.
///
/// Each line on stdin is one frame: any of `w a s d` held for that frame,
/// an empty line or `.` to let time pass, `q` to quit.
#[derive(Parser, Debug)]
#[command(name = "totem-dungeon", version)]
struct Args {
    /// Player tuning as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// ASCII room map
    #[arg(long)]
    map: Option<PathBuf>,

    /// Serve puffin profiling data on the default puffin_http port
    #[arg(long)]
    profile: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let _profiler = if args.profile {
        puffin::set_scopes_on(true);
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        log::info!("serving profiler on {}", addr);
        Some(puffin_http::Server::new(&addr)?)
    } else {
        None
    };

    let config = match &args.config {
        Some(path) => PlayerConfig::load(path)?,
        None => PlayerConfig::default(),
    };
    let map = match &args.map {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_ROOM_MAP.to_string(),
    };

    let mut game = GameState::new(&map, config)?;
    let mut input = InputState::new();
    print_status(&game, None);

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let command = line.trim();
        if command.eq_ignore_ascii_case("q") {
            break;
        }

        input.clear();
        for key in command.chars().filter_map(Key::from_char) {
            input.press(key);
        }

        let report = game.frame(input.axes(), FRAME_DURATION)?;
        puffin::GlobalProfiler::lock().new_frame();
        print_status(&game, Some(&report));

        if game.is_game_over() {
            break;
        }
    }

    Ok(())
}

fn print_status(game: &GameState, report: Option<&FrameReport>) {
    let player = game.player.state();
    let wallet = game.wallet();
    let elements: Vec<&str> = wallet.elements.iter().map(|e| e.name()).collect();
    println!(
        "level {} | pos {} | hp {} | coins {} | elements [{}]",
        game.level_number(),
        player.position,
        player.hit_points,
        player.coin_balance,
        elements.join(", ")
    );

    if let Some(report) = report {
        println!("  {:?}", report.outcome);
        for event in &report.events {
            println!("  {:?}", event);
        }
        if report.reloaded {
            println!("  level reloaded");
        }
    }
}
