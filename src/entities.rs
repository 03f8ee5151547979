/// Game entity types and the per-entity kinematics.
///
/// Entities only know how to move themselves and report their geometry.
/// Ordering, spawning and scoring live in `obstacles` and `compute`.

use crate::config::GameConfig;
use crate::obstacles::PipeStream;

/// Maximum downward speed of the duck, in pixels per tick.
pub const TERMINAL_FALL_SPEED: f32 = 10.0;

pub const DUCK_X: f32 = 100.0;
pub const DUCK_WIDTH: f32 = 50.0;
pub const DUCK_HEIGHT: f32 = 40.0;

pub const PIPE_WIDTH: f32 = 70.0;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world pixels (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test: rectangles that merely share an edge do not
    /// intersect, and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0.0
            && self.h > 0.0
            && other.w > 0.0
            && other.h > 0.0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Half-open containment, `[x, x+w) × [y, y+h)`.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

// ── Difficulty & lifecycle ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    /// Menu button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Easy => "EASY",
            Level::Medium => "MEDIUM",
            Level::Hard => "HARD",
        }
    }

    /// Short tag shown in the HUD.
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Easy => "EASY",
            Level::Medium => "MID",
            Level::Hard => "HARD",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Level::Easy => 0,
            Level::Medium => 1,
            Level::Hard => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for a difficulty to be picked.
    Menu,
    /// Difficulty chosen, duck idle until the first flap.
    Ready,
    Playing,
    GameOver,
}

// ── Duck ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Duck {
    /// Fixed for the whole session.
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
}

impl Duck {
    pub fn new(screen_height: f32) -> Self {
        Self {
            x: DUCK_X,
            y: (screen_height / 2.0).floor(),
            velocity: 0.0,
            width: DUCK_WIDTH,
            height: DUCK_HEIGHT,
        }
    }

    /// Overwrites the current velocity with `impulse` (negative is upward).
    pub fn flap(&mut self, impulse: f32) {
        self.velocity = impulse;
    }

    /// One forward-Euler step. The position uses the unclamped velocity;
    /// the clamp only limits what carries into the next tick.
    pub fn update(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.y += self.velocity;

        if self.velocity > TERMINAL_FALL_SPEED {
            self.velocity = TERMINAL_FALL_SPEED;
        }
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Pipe ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    pub x: f32,
    pub width: f32,
    pub gap: f32,
    /// Top of the passable gap.
    pub gap_y: f32,
    /// Height of the top segment, equal to `gap_y`.
    pub top_height: f32,
    /// Where the bottom segment starts, `gap_y + gap`.
    pub bottom_y: f32,
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, gap: f32, gap_y: f32) -> Self {
        Self {
            x,
            width: PIPE_WIDTH,
            gap,
            gap_y,
            top_height: gap_y,
            bottom_y: gap_y + gap,
            passed: false,
        }
    }

    pub fn update(&mut self, speed: f32) {
        self.x -= speed;
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.top_height)
    }

    pub fn bottom_rect(&self, screen_height: f32) -> Rect {
        Rect::new(self.x, self.bottom_y, self.width, screen_height - self.bottom_y)
    }

    pub fn collides_with(&self, duck: &Duck, screen_height: f32) -> bool {
        let duck_rect = duck.bounding_box();
        duck_rect.intersects(&self.top_rect()) || duck_rect.intersects(&self.bottom_rect(screen_height))
    }

    /// True once the trailing edge is strictly left of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state. Cloneable so `compute::tick` can return a new
/// copy without touching the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub duck: Duck,
    pub pipes: PipeStream,
    /// `None` until a difficulty has been picked from the menu.
    pub level: Option<Level>,
    /// Menu button under the pointer (or keyboard cursor).
    pub hover: Option<Level>,
    pub score: u32,
    pub status: GameStatus,
    /// Ticks spent in `Playing` this session.
    pub frame: u64,
}
