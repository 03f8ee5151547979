use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use flappy_duck::compute::{init_state, tick};
use flappy_duck::config::{self, GameConfig, Settings};
use flappy_duck::display;
use flappy_duck::input::{map_event, Action};
use flappy_duck::view::{project, Viewport};

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so log lines go to a file in the data
/// directory. Without a usable directory logging stays off.
fn init_logging() {
    let Some(dir) = config::data_dir() else {
        return;
    };
    let Ok(file) = File::create(dir.join("flappy_duck.log")) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config() -> Result<(GameConfig, Settings)> {
    let settings = config::settings_path()
        .map(|path| config::load_settings(&path))
        .unwrap_or_default();
    let config = settings.apply(GameConfig::default());
    config.validate().context("invalid game configuration")?;
    Ok((config, settings))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One loop for the whole program: menu, play and game over are just
/// statuses of the same state. Returns when the player quits.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: GameConfig,
    rng: &mut StdRng,
) -> Result<()> {
    let frame_len = Duration::from_secs_f64(1.0 / config.fps as f64);
    let mut state = init_state(config);

    loop {
        let frame_start = Instant::now();
        let (cols, rows) = terminal::size()?;
        let viewport = Viewport::new(cols, rows, config.screen_width, config.screen_height);

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut commands = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(ev) => {
                    for action in map_event(&ev, &viewport) {
                        match action {
                            Action::Quit => {
                                log::info!("quit requested");
                                return Ok(());
                            }
                            Action::Command(command) => commands.push(command),
                        }
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("input thread stopped, exiting");
                    return Ok(());
                }
            }
        }

        state = tick(&state, &commands, rng);
        display::render(out, &project(&state), &viewport)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();
    let (config, settings) = load_config()?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("starting at {} ticks/s with seed {seed}", config.fps);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx, config, &mut rng);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
