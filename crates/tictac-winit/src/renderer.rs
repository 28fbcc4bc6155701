//! Rasterizes a board [`Snapshot`] into a CPU pixel buffer.
//!
//! The grid is drawn as one-pixel lines in the colour of the current phase.
//! X is two crossing thick strokes, O a filled ring, each in its owner's
//! colour.

use tictac_core::{Color, Mark, Palette, Snapshot};

use crate::layout::Layout;

pub(crate) struct BoardRenderer {
    layout: Layout,
    palette: Palette,
    thickness: f32,
    /// 0xFFRRGGBB pixels, `layout.width()` x `layout.height()`.
    pixels: Vec<u32>,
}

impl BoardRenderer {
    pub fn new(layout: Layout, palette: Palette, thickness: u32) -> Self {
        let pixels = vec![color_to_pixel(palette.background); pixel_count(&layout)];
        Self {
            layout,
            palette,
            thickness: thickness.max(1) as f32,
            pixels,
        }
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Change the pixel size, keeping the board side. The buffer must be
    /// re-rendered afterwards.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.layout = Layout::new(width, height, self.layout.size() as usize);
        self.pixels
            .resize(pixel_count(&self.layout), color_to_pixel(self.palette.background));
    }

    /// Redraw the whole buffer from `snap`.
    pub fn render(&mut self, snap: &Snapshot) {
        if snap.size as u32 != self.layout.size() {
            self.layout = Layout::new(self.layout.width(), self.layout.height(), snap.size);
        }

        self.pixels.fill(color_to_pixel(self.palette.background));
        self.draw_grid(self.palette.grid_color(snap.phase));

        for (row, column, mark) in snap.marks() {
            let color = self.palette.mark_color(mark);
            match mark {
                Mark::X => self.draw_x(row, column, color),
                Mark::O => self.draw_o(row, column, color),
            }
        }
    }

    fn draw_grid(&mut self, color: Color) {
        let pixel = color_to_pixel(color);
        let (w, h) = (self.layout.width(), self.layout.height());
        for i in 1..self.layout.size() {
            let x = i * self.layout.cell_width();
            let y = i * self.layout.cell_height();
            for py in 0..h {
                self.put(x as i64, py as i64, pixel);
            }
            for px in 0..w {
                self.put(px as i64, y as i64, pixel);
            }
        }
    }

    fn draw_x(&mut self, row: usize, column: usize, color: Color) {
        let (cx, cy) = self.layout.cell_center(row, column);
        let r = self.layout.glyph_radius();
        self.thick_line((cx - r, cy - r), (cx + r, cy + r), color);
        self.thick_line((cx + r, cy - r), (cx - r, cy + r), color);
    }

    fn draw_o(&mut self, row: usize, column: usize, color: Color) {
        let center = self.layout.cell_center(row, column);
        let outer = self.layout.glyph_radius();
        let inner = (outer - self.thickness).max(0.0);
        self.ring(center, outer, inner, color);
    }

    /// Every pixel within `thickness / 2` of the segment.
    fn thick_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
        let pixel = color_to_pixel(color);
        let half = self.thickness * 0.5;
        let (x0, x1) = (from.0.min(to.0) - half, from.0.max(to.0) + half);
        let (y0, y1) = (from.1.min(to.1) - half, from.1.max(to.1) + half);
        for py in y0.floor() as i64..=y1.ceil() as i64 {
            for px in x0.floor() as i64..=x1.ceil() as i64 {
                if segment_distance((px as f32, py as f32), from, to) <= half {
                    self.put(px, py, pixel);
                }
            }
        }
    }

    /// Pixels with `inner < distance <= outer` from `center`.
    fn ring(&mut self, center: (f32, f32), outer: f32, inner: f32, color: Color) {
        let pixel = color_to_pixel(color);
        let (cx, cy) = center;
        for py in (cy - outer).floor() as i64..=(cy + outer).ceil() as i64 {
            for px in (cx - outer).floor() as i64..=(cx + outer).ceil() as i64 {
                let d = (px as f32 - cx).hypot(py as f32 - cy);
                if d > inner && d <= outer {
                    self.put(px, py, pixel);
                }
            }
        }
    }

    /// Write one pixel, clipping to the buffer.
    #[inline]
    fn put(&mut self, x: i64, y: i64, pixel: u32) {
        let (w, h) = (self.layout.width() as i64, self.layout.height() as i64);
        if x < 0 || y < 0 || x >= w || y >= h {
            return;
        }
        let idx = (y * w + x) as usize;
        if let Some(p) = self.pixels.get_mut(idx) {
            *p = pixel;
        }
    }

    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.layout.width() + x) as usize]
    }

    /// Copy the internal pixel buffer into the softbuffer surface buffer.
    pub fn blit_to_buffer(&self, buf: &mut [u32], buf_width: usize, buf_height: usize) {
        let src_w = self.layout.width() as usize;
        let src_h = self.layout.height() as usize;
        let copy_w = src_w.min(buf_width);
        let copy_h = src_h.min(buf_height);

        // Clear areas outside the board
        if buf_width > src_w || buf_height > src_h {
            buf.fill(color_to_pixel(self.palette.background));
        }

        for y in 0..copy_h {
            let src_start = y * src_w;
            let dst_start = y * buf_width;
            let src_end = src_start + copy_w;
            let dst_end = dst_start + copy_w;
            if src_end <= self.pixels.len() && dst_end <= buf.len() {
                buf[dst_start..dst_end].copy_from_slice(&self.pixels[src_start..src_end]);
            }
        }
    }
}

#[inline]
fn pixel_count(layout: &Layout) -> usize {
    layout.width() as usize * layout.height() as usize
}

#[inline]
fn color_to_pixel(c: Color) -> u32 {
    0xFF000000 | c.0
}

/// Distance from `p` to the segment `a`-`b`.
fn segment_distance(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len2).clamp(0.0, 1.0)
    };
    let (qx, qy) = (a.0 + t * dx, a.1 + t * dy);
    (p.0 - qx).hypot(p.1 - qy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::{GamePhase, GameState};

    const BG: u32 = 0xFF1C1C1C;
    const WHITE: u32 = 0xFFFFFFFF;
    const RED: u32 = 0xFFFF0000;
    const BLUE: u32 = 0xFF3264FF;

    fn renderer() -> BoardRenderer {
        BoardRenderer::new(Layout::new(300, 300, 3), Palette::default(), 10)
    }

    #[test]
    fn empty_board_draws_grid_only() {
        let mut r = renderer();
        r.render(&GameState::new(3).snapshot());
        assert_eq!(r.pixel(100, 50), WHITE);
        assert_eq!(r.pixel(200, 250), WHITE);
        assert_eq!(r.pixel(50, 100), WHITE);
        assert_eq!(r.pixel(50, 50), BG);
        assert_eq!(r.pixel(0, 0), BG);
    }

    #[test]
    fn x_is_two_crossing_strokes() {
        let mut game = GameState::new(3);
        game.apply_move(0, 0);
        let mut r = renderer();
        r.render(&game.snapshot());
        assert_eq!(r.pixel(50, 50), RED);
        assert_eq!(r.pixel(30, 30), RED);
        assert_eq!(r.pixel(70, 30), RED);
        assert_eq!(r.pixel(50, 30), BG);
        assert_eq!(r.pixel(10, 10), BG);
    }

    #[test]
    fn o_is_a_ring() {
        let mut game = GameState::new(3);
        game.apply_move(0, 0);
        game.apply_move(1, 1);
        let mut r = renderer();
        r.render(&game.snapshot());
        assert_eq!(r.pixel(150, 150), BG);
        assert_eq!(r.pixel(170, 150), BLUE);
        assert_eq!(r.pixel(150, 130), BLUE);
        assert_eq!(r.pixel(180, 150), BG);
    }

    #[test]
    fn grid_takes_phase_color() {
        let mut game = GameState::new(3);
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            game.apply_move(row, col);
        }
        assert_eq!(game.phase(), GamePhase::XWon);
        let mut r = renderer();
        r.render(&game.snapshot());
        assert_eq!(r.pixel(100, 280), RED);

        game.reset();
        r.render(&game.snapshot());
        assert_eq!(r.pixel(100, 280), WHITE);
        assert_eq!(r.pixel(50, 50), BG);
    }

    #[test]
    fn resize_rescales_cells() {
        let mut r = renderer();
        r.resize(600, 300);
        assert_eq!(r.layout().cell_width(), 200);
        r.render(&GameState::new(3).snapshot());
        assert_eq!(r.pixel(200, 10), WHITE);
        assert_eq!(r.pixel(100, 10), BG);
    }

    #[test]
    fn blit_pads_with_background() {
        let mut r = BoardRenderer::new(Layout::new(2, 2, 1), Palette::default(), 10);
        r.render(&GameState::new(1).snapshot());
        let mut buf = vec![0u32; 9];
        r.blit_to_buffer(&mut buf, 3, 3);
        assert!(buf.iter().all(|&p| p == BG));

        let mut small = vec![0u32; 1];
        r.blit_to_buffer(&mut small, 1, 1);
        assert_eq!(small[0], BG);
    }

    #[test]
    fn distance_to_segment() {
        assert_eq!(segment_distance((0.0, 5.0), (0.0, 0.0), (10.0, 0.0)), 5.0);
        assert_eq!(segment_distance((13.0, 4.0), (0.0, 0.0), (10.0, 0.0)), 5.0);
        assert_eq!(segment_distance((3.0, 4.0), (0.0, 0.0), (0.0, 0.0)), 5.0);
    }
}
