/// Read-only projection of `GameState` into a render model, plus the
/// mapping between world pixels and terminal cells.
///
/// `project` never mutates simulation state; the renderer only ever sees a
/// `Frame`.

use crate::compute::menu_button;
use crate::entities::{GameState, GameStatus, Level, Pipe, Rect};

const PIPE_CAP_HEIGHT: f32 = 20.0;
const PIPE_CAP_OVERHANG: f32 = 5.0;

// ── Render model ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Title,
    Normal,
    Hint,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub anchor: Anchor,
    pub emphasis: Emphasis,
}

impl Label {
    fn centered(text: impl Into<String>, x: f32, y: f32, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            anchor: Anchor::Center,
            emphasis,
        }
    }

    fn top_left(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            anchor: Anchor::TopLeft,
            emphasis: Emphasis::Normal,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PipeView {
    pub top: Rect,
    pub bottom: Rect,
    pub top_cap: Rect,
    pub bottom_cap: Rect,
}

/// Duck sprite parts. The head sits forward on the body and overhangs its
/// top edge; the beak sticks out past the body's right side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DuckView {
    /// The collision box.
    pub body: Rect,
    pub head: Rect,
    pub beak: Rect,
    /// Eye position, inside the head.
    pub eye: (f32, f32),
}

impl DuckView {
    pub fn of(body: Rect) -> Self {
        Self {
            body,
            head: Rect::new(body.x + 20.0, body.y - 5.0, 30.0, 30.0),
            beak: Rect::new(body.right(), body.y + 8.0, 15.0, 7.0),
            eye: (body.x + 40.0, body.y + 8.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    pub level: Level,
    pub rect: Rect,
    pub label: &'static str,
    pub hovered: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub status: GameStatus,
    pub width: f32,
    pub height: f32,
    /// Absent on the menu.
    pub duck: Option<DuckView>,
    pub pipes: Vec<PipeView>,
    pub buttons: Vec<ButtonView>,
    pub labels: Vec<Label>,
    /// Dim everything under the labels.
    pub overlay: bool,
}

fn pipe_view(pipe: &Pipe, screen_height: f32) -> PipeView {
    PipeView {
        top: pipe.top_rect(),
        bottom: pipe.bottom_rect(screen_height),
        top_cap: Rect::new(
            pipe.x - PIPE_CAP_OVERHANG,
            pipe.top_height - PIPE_CAP_HEIGHT,
            pipe.width + 2.0 * PIPE_CAP_OVERHANG,
            PIPE_CAP_HEIGHT,
        ),
        bottom_cap: Rect::new(
            pipe.x - PIPE_CAP_OVERHANG,
            pipe.bottom_y,
            pipe.width + 2.0 * PIPE_CAP_OVERHANG,
            PIPE_CAP_HEIGHT,
        ),
    }
}

pub fn project(state: &GameState) -> Frame {
    let w = state.config.screen_width;
    let h = state.config.screen_height;
    let cx = w / 2.0;

    if state.status == GameStatus::Menu {
        let buttons = Level::ALL
            .into_iter()
            .map(|level| ButtonView {
                level,
                rect: menu_button(level, &state.config),
                label: level.label(),
                hovered: state.hover == Some(level),
            })
            .collect();
        return Frame {
            status: state.status,
            width: w,
            height: h,
            duck: None,
            pipes: Vec::new(),
            buttons,
            labels: vec![
                Label::centered("Duck Game", cx, 100.0, Emphasis::Title),
                Label::centered("Click or Space to Flap!", cx, 180.0, Emphasis::Normal),
                Label::centered(
                    "1 2 3 / ↑ ↓ : Choose   SPACE : Select   Q : Quit",
                    cx,
                    h - 30.0,
                    Emphasis::Hint,
                ),
            ],
            overlay: false,
        };
    }

    let mut labels = vec![Label::top_left(format!("Score: {}", state.score), 10.0, 10.0)];
    if let Some(level) = state.level {
        labels.push(Label::top_left(format!("Level: {}", level.tag()), 10.0, 50.0));
    }

    match state.status {
        GameStatus::Ready => labels.push(Label::centered(
            "Click or Press Space to Start!",
            cx,
            h / 2.0,
            Emphasis::Normal,
        )),
        GameStatus::GameOver => {
            labels.push(Label::centered("Game Over!", cx, h / 2.0 - 50.0, Emphasis::Title));
            labels.push(Label::centered(
                format!("Final Score: {}", state.score),
                cx,
                h / 2.0 + 20.0,
                Emphasis::Normal,
            ));
            labels.push(Label::centered(
                "Click or Press Space to Restart",
                cx,
                h / 2.0 + 80.0,
                Emphasis::Normal,
            ));
        }
        _ => {}
    }

    Frame {
        status: state.status,
        width: w,
        height: h,
        duck: Some(DuckView::of(state.duck.bounding_box())),
        pipes: state
            .pipes
            .pipes()
            .iter()
            .map(|p| pipe_view(p, h))
            .collect(),
        buttons: Vec::new(),
        labels,
        overlay: state.status == GameStatus::GameOver,
    }
}

// ── World ↔ terminal mapping ─────────────────────────────────────────────────

/// Scales the world onto a `cols × rows` terminal grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world_width: f32,
    pub world_height: f32,
}

/// Inclusive-exclusive cell span covered by a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpan {
    pub col: u16,
    pub row: u16,
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world_width: f32, world_height: f32) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            world_width,
            world_height,
        }
    }

    fn sx(&self) -> f32 {
        self.cols as f32 / self.world_width
    }

    fn sy(&self) -> f32 {
        self.rows as f32 / self.world_height
    }

    /// Cell containing a world point; may lie outside the grid.
    pub fn to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        ((x * self.sx()).floor() as i32, (y * self.sy()).floor() as i32)
    }

    /// World point at the centre of a cell.
    pub fn to_world(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) / self.sx(),
            (row as f32 + 0.5) / self.sy(),
        )
    }

    /// Cells covered by `rect`, clipped to the grid. Any rectangle with a
    /// positive area covers at least one cell when it is on screen.
    pub fn span(&self, rect: &Rect) -> Option<CellSpan> {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return None;
        }
        let c0 = ((rect.x * self.sx()).floor() as i32).max(0);
        let r0 = ((rect.y * self.sy()).floor() as i32).max(0);
        let c1 = ((rect.right() * self.sx()).ceil() as i32).min(self.cols as i32);
        let r1 = ((rect.bottom() * self.sy()).ceil() as i32).min(self.rows as i32);
        if c1 <= c0 || r1 <= r0 {
            return None;
        }
        Some(CellSpan {
            col: c0 as u16,
            row: r0 as u16,
            cols: (c1 - c0) as u16,
            rows: (r1 - r0) as u16,
        })
    }
}
