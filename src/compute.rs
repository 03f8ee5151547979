/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`. Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Duck, GameState, GameStatus, Level, Rect};
use crate::input::Command;
use crate::obstacles::PipeStream;

// ── Menu layout ──────────────────────────────────────────────────────────────

pub const MENU_BUTTON_WIDTH: f32 = 300.0;
pub const MENU_BUTTON_HEIGHT: f32 = 60.0;
const MENU_FIRST_BUTTON_Y: f32 = 250.0;
const MENU_BUTTON_STEP: f32 = 80.0;

/// World-space rectangle of the menu button for `level`.
pub fn menu_button(level: Level, config: &GameConfig) -> Rect {
    Rect::new(
        config.screen_width / 2.0 - MENU_BUTTON_WIDTH / 2.0,
        MENU_FIRST_BUTTON_Y + MENU_BUTTON_STEP * level.index() as f32,
        MENU_BUTTON_WIDTH,
        MENU_BUTTON_HEIGHT,
    )
}

/// Menu button under a world-space point, if any.
pub fn button_at(x: f32, y: f32, config: &GameConfig) -> Option<Level> {
    Level::ALL
        .into_iter()
        .find(|&level| menu_button(level, config).contains(x, y))
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh state sitting on the difficulty menu.
pub fn init_state(config: GameConfig) -> GameState {
    GameState {
        duck: Duck::new(config.screen_height),
        pipes: PipeStream::new(),
        level: None,
        hover: None,
        score: 0,
        status: GameStatus::Menu,
        frame: 0,
        config,
    }
}

/// New session on `level`, waiting for the first flap.
pub fn start_session(state: &GameState, level: Level) -> GameState {
    log::info!("session started on {}", level.label());
    GameState {
        level: Some(level),
        status: GameStatus::Ready,
        ..init_state(state.config)
    }
}

/// Full reset back to the menu: new duck, no pipes, score and ticks zeroed.
pub fn reset_to_menu(state: &GameState) -> GameState {
    init_state(state.config)
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

fn cycle_hover(current: Option<Level>, step: isize) -> Level {
    let n = Level::ALL.len() as isize;
    let next = match current {
        Some(level) => (level.index() as isize + step).rem_euclid(n),
        None if step > 0 => 0,
        None => n - 1,
    };
    Level::ALL[next as usize]
}

/// Apply a single command. Commands that make no sense in the current
/// status are ignored.
pub fn apply_command(state: &GameState, command: Command) -> GameState {
    match (state.status, command) {
        (GameStatus::Menu, Command::Pointer { x, y }) => GameState {
            hover: button_at(x, y, &state.config),
            ..state.clone()
        },
        (GameStatus::Menu, Command::HoverPrev) => GameState {
            hover: Some(cycle_hover(state.hover, -1)),
            ..state.clone()
        },
        (GameStatus::Menu, Command::HoverNext) => GameState {
            hover: Some(cycle_hover(state.hover, 1)),
            ..state.clone()
        },
        (GameStatus::Menu, Command::Select(level)) => start_session(state, level),
        (GameStatus::Menu, Command::Primary) => match state.hover {
            Some(level) => start_session(state, level),
            None => state.clone(),
        },
        (GameStatus::Ready, Command::Primary) => {
            let mut next = flap(state);
            next.status = GameStatus::Playing;
            next
        }
        (GameStatus::Playing, Command::Primary) => flap(state),
        (GameStatus::GameOver, Command::Primary) => reset_to_menu(state),
        _ => state.clone(),
    }
}

fn flap(state: &GameState) -> GameState {
    let mut duck = state.duck.clone();
    if let Some(level) = state.level {
        duck.flap(state.config.profile(level).flap_strength);
    }
    GameState {
        duck,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the session by one tick: apply this tick's commands in order,
/// then run the simulation step if the session is live. All randomness
/// comes through `rng` so tests can pin the pipe layout.
pub fn tick(state: &GameState, commands: &[Command], rng: &mut impl Rng) -> GameState {
    let state = commands
        .iter()
        .fold(state.clone(), |s, &command| apply_command(&s, command));

    if state.status == GameStatus::Playing {
        step(&state, rng)
    } else {
        state
    }
}

/// One simulation step. Order matters: collisions and scoring use the
/// post-move positions, and pruning runs last so a pipe is scored before it
/// can be discarded.
fn step(state: &GameState, rng: &mut impl Rng) -> GameState {
    let Some(level) = state.level else {
        return state.clone();
    };
    let config = state.config;
    let profile = *config.profile(level);
    let frame = state.frame + 1;

    // ── 1. Duck physics & bounds ─────────────────────────────────────────────
    let mut duck = state.duck.clone();
    duck.update(profile.gravity);
    let out_of_bounds = duck.y > config.ground_line() || duck.y < 0.0;

    // ── 2. Pipes: spawn, move, hit/pass, prune ───────────────────────────────
    let mut pipes = state.pipes.clone();
    pipes.maybe_spawn(frame, &profile, &config, rng);
    pipes.advance_all(profile.pipe_speed);
    let report = pipes.test_collisions_and_scoring(&duck, config.screen_height);
    if report.scored > 0 {
        log::debug!("tick {frame}: passed {} pipe(s)", report.scored);
    }
    pipes.prune_off_screen();

    // ── 3. Score & status ────────────────────────────────────────────────────
    let score = state.score + report.scored;
    let status = if out_of_bounds || report.collided {
        log::info!("game over on {} at tick {frame}, score {score}", level.label());
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    };

    GameState {
        duck,
        pipes,
        score,
        status,
        frame,
        ..state.clone()
    }
}
