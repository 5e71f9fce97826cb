use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use gridsnake::config::{
    DEFAULT_TICK_INTERVAL_MS, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
use gridsnake::game::Game;
use gridsnake::grid::Grid;
use gridsnake::input::{Direction, InputEvent};
use gridsnake::renderer;
use gridsnake::score::{FileScoreStore, default_high_score_path};
use gridsnake::terminal_runtime::{TerminalSession, install_panic_hook};

/// Grid-based snake arcade for the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Viewport width in logical units (20 units per cell).
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    width: u16,

    /// Viewport height in logical units (20 units per cell).
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    height: u16,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// High-score file location.
    #[arg(long)]
    high_score_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Refuse to start on a viewport too small for the margins.
    let grid = Grid::from_viewport(cli.width, cli.height)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    install_panic_hook();
    run(&cli, grid)
}

fn run(cli: &Cli, grid: Grid) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;

    let score_path = cli
        .high_score_file
        .clone()
        .unwrap_or_else(default_high_score_path);
    let mut game = Game::new(grid, Box::new(FileScoreStore::new(score_path)));

    let tick_interval = Duration::from_millis(cli.tick_ms.max(1));
    let mut last_tick = Instant::now();
    let mut reset_deadline: Option<Instant> = None;

    loop {
        session.terminal_mut().draw(|frame| renderer::render(frame, &game))?;

        // Sleep inside the event poll until the next tick is due.
        let wait = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if is_quit(key) {
                        break;
                    }
                    if let Some(input) = map_key(key.code) {
                        game.enqueue(input);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            game.tick();
            last_tick = Instant::now();
        }

        // The core requests the delayed game-over reset; this loop owns
        // the one-shot timer that fulfills it.
        if let Some(delay) = game.take_reset_request() {
            reset_deadline = Some(Instant::now() + delay);
        }
        if reset_deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            game.fulfill_reset();
            reset_deadline = None;
        }
    }

    Ok(())
}

fn is_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn map_key(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(InputEvent::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(InputEvent::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(InputEvent::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(InputEvent::Move(Direction::Right)),
        KeyCode::Char('p') | KeyCode::Esc => Some(InputEvent::TogglePause),
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputEvent::RequestStart),
        _ => None,
    }
}
