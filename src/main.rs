use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use pocket_snake::config::{
    BoardConfig, DEFAULT_CELL_SIZE_PX, DEFAULT_DISPLAY_HEIGHT_PX, DEFAULT_DISPLAY_WIDTH_PX,
    DEFAULT_TICK_INTERVAL_MS, INPUT_POLL_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
};
use pocket_snake::error::Error;
use pocket_snake::game::GameState;
use pocket_snake::input::{self, GameInput};
use pocket_snake::renderer;
use pocket_snake::settings::load_settings;
use pocket_snake::terminal_runtime::{AppTerminal, TerminalSession};
use pocket_snake::theme::{load_theme, Theme};
use pocket_snake::timer::TickTimer;
use pocket_snake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(name = "pocket-snake", version, about = "Grid-based Snake arcade game for the terminal")]
struct Cli {
    /// Display width in pixels.
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Display height in pixels, control panel included.
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Cell size in pixels.
    #[arg(long = "cell-size", value_name = "PX")]
    cell_size: Option<i32>,

    /// Tick interval in milliseconds.
    #[arg(long = "tick-ms", value_name = "MS")]
    tick_ms: Option<u64>,

    /// Theme id (built-in: classic, ocean, neon).
    #[arg(long, value_name = "ID")]
    theme: Option<String>,

    /// Seed for deterministic food placement.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let settings = load_settings()?;

    let board = BoardConfig::from_display(
        cli.width
            .or(settings.display_width)
            .unwrap_or(DEFAULT_DISPLAY_WIDTH_PX),
        cli.height
            .or(settings.display_height)
            .unwrap_or(DEFAULT_DISPLAY_HEIGHT_PX),
        cli.cell_size
            .or(settings.cell_size)
            .unwrap_or(DEFAULT_CELL_SIZE_PX),
    )?;

    let theme_id = cli
        .theme
        .or(settings.theme)
        .unwrap_or_else(|| "classic".to_owned());
    let theme = load_theme(&theme_id)?;

    let tick_interval = Duration::from_millis(
        cli.tick_ms
            .or(settings.tick_ms)
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .max(MIN_TICK_INTERVAL_MS),
    );

    let mut session = TerminalSession::enter()?;
    run(
        session.terminal_mut(),
        board,
        &theme,
        tick_interval,
        cli.seed,
    )?;

    Ok(())
}

fn run(
    terminal: &mut AppTerminal,
    board: BoardConfig,
    theme: &Theme,
    tick_interval: Duration,
    seed: Option<u64>,
) -> io::Result<()> {
    let mut state = match seed {
        Some(seed) => GameState::new_with_seed(board, seed),
        None => GameState::new(board),
    };
    let mut timer = TickTimer::new(tick_interval);
    let hud_info = HudInfo {
        theme,
        tick_interval,
    };

    loop {
        terminal.draw(|frame| renderer::render(frame, &state, &hud_info))?;

        if let Some(game_input) = input::poll_input(Duration::from_millis(INPUT_POLL_INTERVAL_MS))?
        {
            match game_input {
                GameInput::Quit => break,
                GameInput::Restart => {
                    state.reset();
                    timer.restart(Instant::now());
                }
                GameInput::Direction(direction) => state.set_direction(direction),
            }
        }

        if timer.poll(Instant::now()) {
            state.tick();
        }
    }

    Ok(())
}
