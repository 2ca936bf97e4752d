//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::pieces::spawn_offsets;
use crate::core::{GameSnapshot, PieceView, QueuedPiece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::TetColor;

/// Preview box size in board cells; every spawn orientation fits.
const PREVIEW_COLS: u16 = 4;
const PREVIEW_ROWS: u16 = 2;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size of the bordered board for a snapshot.
    ///
    /// Saturates at `u16::MAX` for boards no terminal could show.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let side = |cells: i32, per_cell: u16| {
            u16::try_from(cells.max(0))
                .unwrap_or(u16::MAX)
                .saturating_mul(per_cell)
                .saturating_add(2)
        };
        (side(snap.width, self.cell_w), side(snap.height, self.cell_h))
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            CellStyle::plain(Rgb::new(80, 80, 90), BOARD_BG),
        );
        fb.frame(start_x, start_y, frame_w, frame_h, border);

        let origin = (start_x + 1, start_y + 1);

        // Locked cells.
        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x, y) {
                    Some(color) => self.draw_block(fb, origin, x, y, color, snap),
                    None => self.draw_empty_cell(fb, origin, x, y, snap),
                }
            }
        }

        if let Some(ghost) = snap.ghost {
            let style = CellStyle::plain(Rgb::new(140, 140, 140), BOARD_BG).dim(true);
            for p in ghost.blocks {
                if in_board(snap, p.x, p.y) {
                    self.fill_cell(fb, origin, p.x as u16, p.y as u16, '░', style);
                }
            }
        }

        if let Some(active) = snap.active {
            self.draw_piece(fb, origin, &active, snap);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.paused() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        x: i32,
        y: i32,
        snap: &GameSnapshot,
    ) {
        if !in_board(snap, x, y) {
            return;
        }
        let style = CellStyle::plain(Rgb::new(90, 90, 100), BOARD_BG).dim(true);
        self.fill_cell(fb, origin, x as u16, y as u16, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        x: i32,
        y: i32,
        color: TetColor,
        snap: &GameSnapshot,
    ) {
        if !in_board(snap, x, y) {
            return;
        }
        self.fill_cell(fb, origin, x as u16, y as u16, '█', block_style(color, BOARD_BG));
    }

    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        piece: &PieceView,
        snap: &GameSnapshot,
    ) {
        // Blocks above row 0 stay hidden until they fall into view.
        for p in piece.blocks {
            self.draw_block(fb, origin, p.x, p.y, piece.color, snap);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.0.saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = origin.1.saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Draw `piece` in a preview box whose top-left corner is (x, y).
    ///
    /// The pivot goes at box center minus the piece's presentation offset.
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        piece: QueuedPiece,
        style: CellStyle,
    ) {
        let pivot_x = PREVIEW_COLS as f32 / 2.0 - piece.presentation.x;
        let pivot_y = PREVIEW_ROWS as f32 / 2.0 - piece.presentation.y;

        for o in spawn_offsets(piece.kind) {
            let bx = ((pivot_x + o.x as f32) * self.cell_w as f32).round();
            let by = ((pivot_y + o.y as f32) * self.cell_h as f32).floor();
            if bx < 0.0 || by < 0.0 {
                continue;
            }
            fb.fill_rect(
                x.saturating_add(bx as u16),
                y.saturating_add(by as u16),
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let preview_w = PREVIEW_COLS * self.cell_w;
        let preview_h = PREVIEW_ROWS * self.cell_h;
        if viewport.width - panel_x < preview_w.max(6) {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "HOLD", label);
        y = y.saturating_add(1);
        match snap.hold {
            Some(kind) => {
                // Dim once used this placement.
                let style = block_style(kind.color(), PANEL_BG).dim(!snap.can_hold);
                self.draw_preview(fb, panel_x, y, QueuedPiece::new(kind), style);
            }
            None => fb.put_str(panel_x, y, "-", value),
        }
        y = y.saturating_add(preview_h + 1);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        for queued in snap.next.iter() {
            if y.saturating_add(preview_h) > viewport.height {
                break;
            }
            let style = block_style(queued.kind.color(), PANEL_BG);
            self.draw_preview(fb, panel_x, y, *queued, style);
            y = y.saturating_add(preview_h + 1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn in_board(snap: &GameSnapshot, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && x < snap.width && y < snap.height
}

/// Terminal color for a piece color
pub fn color_rgb(color: TetColor) -> Rgb {
    match color {
        TetColor::Red => Rgb::new(220, 70, 70),
        TetColor::Orange => Rgb::new(255, 165, 0),
        TetColor::Yellow => Rgb::new(240, 220, 80),
        TetColor::Green => Rgb::new(100, 220, 120),
        TetColor::LightBlue => Rgb::new(80, 220, 220),
        TetColor::DarkBlue => Rgb::new(70, 100, 220),
        TetColor::Purple => Rgb::new(200, 120, 220),
    }
}

fn block_style(color: TetColor, bg: Rgb) -> CellStyle {
    CellStyle::plain(color_rgb(color), bg).bold()
}
