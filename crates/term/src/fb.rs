//! Styled glyph grid the game view draws into.
//!
//! Every write is clipped to the grid, so callers can draw boxes and
//! previews that hang over the edge of a small terminal.

/// 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors and attributes of one glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn plain(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self, dim: bool) -> Self {
        self.dim = dim;
        self
    }

    pub const fn glyph(self, ch: char) -> Glyph {
        Glyph { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::plain(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A character with its style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Glyph {
    fn default() -> Self {
        CellStyle::default().glyph(' ')
    }
}

/// Line-drawing characters for [`FrameBuffer::frame`]
const FRAME_CORNERS: [char; 4] = ['┌', '┐', '└', '┘'];
const FRAME_H: char = '─';
const FRAME_V: char = '│';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    /// Row-major, `width * height` long
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the dimensions. Contents are unspecified afterwards; callers
    /// repaint with [`FrameBuffer::clear`].
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// One row of glyphs, or an empty slice below the grid
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.row(y).get(x as usize).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if x < self.width && y < self.height {
            let i = y as usize * self.width as usize + x as usize;
            self.glyphs[i] = glyph;
        }
    }

    pub fn clear(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Fill the clipped part of a `w` by `h` rectangle
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end {
            return;
        }
        let stride = self.width as usize;
        for row in y..y_end {
            let base = row as usize * stride;
            self.glyphs[base + x as usize..base + x_end as usize].fill(style.glyph(ch));
        }
    }

    /// Write `text` left to right from (x, y); characters past the edge are dropped.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (col, ch) in (x..self.width).zip(text.chars()) {
            self.set(col, y, style.glyph(ch));
        }
    }

    /// Decimal `value` starting at (x, y), without allocating
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let digits = if value == 0 { 1 } else { value.ilog10() + 1 };
        let mut rest = value;
        for i in (0..digits as u16).rev() {
            let ch = char::from(b'0' + (rest % 10) as u8);
            self.set(x.saturating_add(i), y, style.glyph(ch));
            rest /= 10;
        }
    }

    /// Outline a `w` by `h` box with line-drawing characters. Boxes smaller
    /// than 2x2 are not drawn.
    pub fn frame(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        let (inner_x, inner_y) = (x.saturating_add(1), y.saturating_add(1));
        self.fill_rect(inner_x, y, w - 2, 1, FRAME_H, style);
        self.fill_rect(inner_x, bottom, w - 2, 1, FRAME_H, style);
        self.fill_rect(x, inner_y, 1, h - 2, FRAME_V, style);
        self.fill_rect(right, inner_y, 1, h - 2, FRAME_V, style);

        let [tl, tr, bl, br] = FRAME_CORNERS;
        self.set(x, y, style.glyph(tl));
        self.set(right, y, style.glyph(tr));
        self.set(x, bottom, style.glyph(bl));
        self.set(right, bottom, style.glyph(br));
    }

    /// Characters of row `y`
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }
}
