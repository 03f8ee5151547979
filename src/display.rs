/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer, an immutable `Frame` and the
/// viewport that maps world pixels onto terminal cells. No game logic is
/// performed; this module only translates frames into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::Rect;
use crate::view::{Anchor, ButtonView, DuckView, Emphasis, Frame, Label, PipeView, Viewport};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Rgb { r: 135, g: 206, b: 235 };
const C_PIPE: Color = Color::Rgb { r: 34, g: 139, b: 34 };
const C_PIPE_CAP: Color = Color::Rgb { r: 0, g: 100, b: 0 };
const C_DUCK: Color = Color::Rgb { r: 255, g: 255, b: 0 };
const C_BEAK: Color = Color::Rgb { r: 255, g: 165, b: 0 };
const C_TEXT: Color = Color::Black;
const C_OVERLAY_BG: Color = Color::Black;
const C_OVERLAY_TEXT: Color = Color::White;
const C_BUTTON: Color = Color::White;
const C_BUTTON_HOVER: Color = Color::Rgb { r: 255, g: 255, b: 0 };
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for pipe in &frame.pipes {
        draw_pipe(out, pipe, viewport)?;
    }
    if let Some(duck) = &frame.duck {
        draw_duck(out, duck, viewport)?;
    }
    for button in &frame.buttons {
        draw_button(out, button, viewport)?;
    }
    if frame.overlay {
        draw_overlay_band(out, frame, viewport)?;
    }
    for label in &frame.labels {
        draw_label(out, label, frame.overlay, viewport)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

fn fill_rect<W: Write>(
    out: &mut W,
    rect: &Rect,
    viewport: &Viewport,
    color: Color,
) -> std::io::Result<()> {
    let Some(span) = viewport.span(rect) else {
        return Ok(());
    };
    out.queue(style::SetBackgroundColor(color))?;
    let row_text = " ".repeat(span.cols as usize);
    for row in span.row..span.row + span.rows {
        out.queue(cursor::MoveTo(span.col, row))?;
        out.queue(Print(&row_text))?;
    }
    out.queue(style::SetBackgroundColor(C_SKY))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_pipe<W: Write>(out: &mut W, pipe: &PipeView, viewport: &Viewport) -> std::io::Result<()> {
    fill_rect(out, &pipe.top, viewport, C_PIPE)?;
    fill_rect(out, &pipe.bottom, viewport, C_PIPE)?;
    fill_rect(out, &pipe.top_cap, viewport, C_PIPE_CAP)?;
    fill_rect(out, &pipe.bottom_cap, viewport, C_PIPE_CAP)?;
    Ok(())
}

fn draw_duck<W: Write>(out: &mut W, duck: &DuckView, viewport: &Viewport) -> std::io::Result<()> {
    fill_rect(out, &duck.body, viewport, C_DUCK)?;
    fill_rect(out, &duck.head, viewport, C_DUCK)?;

    if let Some(span) = viewport.span(&duck.beak) {
        out.queue(style::SetBackgroundColor(C_SKY))?;
        out.queue(style::SetForegroundColor(C_BEAK))?;
        let beak = "▶".repeat(span.cols as usize);
        for row in span.row..span.row + span.rows {
            out.queue(cursor::MoveTo(span.col, row))?;
            out.queue(Print(&beak))?;
        }
    }

    let (col, row) = viewport.to_cell(duck.eye.0, duck.eye.1);
    if col >= 0 && row >= 0 && col < viewport.cols as i32 && row < viewport.rows as i32 {
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(style::SetBackgroundColor(C_DUCK))?;
        out.queue(style::SetForegroundColor(Color::Black))?;
        out.queue(Print("•"))?;
    }
    out.queue(style::SetBackgroundColor(C_SKY))?;
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_button<W: Write>(out: &mut W, button: &ButtonView, viewport: &Viewport) -> std::io::Result<()> {
    let Some(span) = viewport.span(&button.rect) else {
        return Ok(());
    };
    let fill = if button.hovered { C_BUTTON_HOVER } else { C_BUTTON };
    fill_rect(out, &button.rect, viewport, fill)?;

    let text = if button.hovered {
        format!("▸ {} ◂", button.label)
    } else {
        button.label.to_string()
    };
    let len = text.chars().count() as u16;
    let col = (span.col + span.cols / 2).saturating_sub(len / 2);
    let row = span.row + span.rows / 2;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetBackgroundColor(fill))?;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    out.queue(Print(text))?;
    out.queue(style::SetBackgroundColor(C_SKY))?;
    Ok(())
}

// ── Text & game-over overlay ──────────────────────────────────────────────────

/// Dark band behind the centred game-over lines.
fn draw_overlay_band<W: Write>(out: &mut W, frame: &Frame, viewport: &Viewport) -> std::io::Result<()> {
    let rows: Vec<i32> = frame
        .labels
        .iter()
        .filter(|l| l.anchor == Anchor::Center)
        .map(|l| viewport.to_cell(l.x, l.y).1)
        .collect();
    let (Some(&first), Some(&last)) = (rows.iter().min(), rows.iter().max()) else {
        return Ok(());
    };
    let top = (first - 1).max(0) as u16;
    let bottom = ((last + 1).max(0) as u16).min(viewport.rows.saturating_sub(1));

    out.queue(style::SetBackgroundColor(C_OVERLAY_BG))?;
    let blank = " ".repeat(viewport.cols as usize);
    for row in top..=bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(&blank))?;
    }
    out.queue(style::SetBackgroundColor(C_SKY))?;
    Ok(())
}

fn draw_label<W: Write>(
    out: &mut W,
    label: &Label,
    overlay: bool,
    viewport: &Viewport,
) -> std::io::Result<()> {
    let (cell_x, cell_y) = viewport.to_cell(label.x, label.y);
    if cell_y < 0 || cell_y >= viewport.rows as i32 {
        return Ok(());
    }
    let len = label.text.chars().count() as i32;
    let col = match label.anchor {
        Anchor::TopLeft => cell_x,
        Anchor::Center => cell_x - len / 2,
    }
    .max(0) as u16;

    let on_overlay = overlay && label.anchor == Anchor::Center;
    let (fg, bg) = match (on_overlay, label.emphasis) {
        (true, _) => (C_OVERLAY_TEXT, C_OVERLAY_BG),
        (false, Emphasis::Hint) => (C_HINT, C_SKY),
        (false, _) => (C_TEXT, C_SKY),
    };

    out.queue(cursor::MoveTo(col, cell_y as u16))?;
    out.queue(style::SetBackgroundColor(bg))?;
    out.queue(style::SetForegroundColor(fg))?;
    if label.emphasis == Emphasis::Title {
        out.queue(style::SetAttribute(style::Attribute::Bold))?;
        out.queue(Print(&label.text))?;
        out.queue(style::SetAttribute(style::Attribute::NormalIntensity))?;
    } else {
        out.queue(Print(&label.text))?;
    }
    out.queue(style::SetBackgroundColor(C_SKY))?;
    Ok(())
}
