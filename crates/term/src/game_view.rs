//! GameView: maps an engine [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Snapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::CellState;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const EMPTY: Style = Style::new(Rgb::new(90, 90, 100), WELL_BG);
const DEAD: Style = Style::new(Rgb::new(150, 150, 170), WELL_BG);
const ACTIVE: Style = Style::new(Rgb::new(80, 220, 220), WELL_BG).bold();
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// Renders the well, its cells and a score panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into a freshly allocated framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            *fb = FrameBuffer::new(viewport.width, viewport.height);
        }
        fb.fill_rect(0, 0, viewport.width, viewport.height, ' ', Style::default());

        let frame_w = snap.cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = snap.rows.saturating_mul(self.cell_h).saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..snap.rows {
            for x in 0..snap.cols {
                let (ch, style) = match snap.get(x as usize, y as usize) {
                    Some(CellState::Dead) => ('▓', DEAD),
                    Some(CellState::Active) => ('█', ACTIVE),
                    _ => ('·', EMPTY),
                };
                let px = start_x
                    .saturating_add(1)
                    .saturating_add(x.saturating_mul(self.cell_w));
                let py = start_y
                    .saturating_add(1)
                    .saturating_add(y.saturating_mul(self.cell_h));
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) >= 8 {
            fb.put_str(panel_x, start_y, "SCORE", LABEL);
            fb.put_str(panel_x, start_y + 1, &snap.score.to_string(), VALUE);
            fb.put_str(panel_x, start_y + 3, "LINES", LABEL);
            fb.put_str(panel_x, start_y + 4, &snap.lines.to_string(), VALUE);
        }

        if snap.game_over {
            let text = "GAME OVER";
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, start_y.saturating_add(frame_h / 2), text, LABEL);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put(x, y, '┌', BORDER);
    fb.put(x + w - 1, y, '┐', BORDER);
    fb.put(x, y + h - 1, '└', BORDER);
    fb.put(x + w - 1, y + h - 1, '┘', BORDER);
    for dx in 1..w - 1 {
        fb.put(x + dx, y, '─', BORDER);
        fb.put(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, '│', BORDER);
        fb.put(x + w - 1, y + dy, '│', BORDER);
    }
}
