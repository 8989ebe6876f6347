//! Terminal drawing surface: an additive RGB buffer at half-block
//! sub-cell resolution, emitted as truecolor ANSI.

use std::io::Write;

use crate::canvas::Canvas;
use crate::geom::Vec2;
use crate::util::Rgb;

pub struct TermCanvas {
    width: usize,
    height: usize,
    /// Accumulated light per sub-pixel, each channel in 0..=1 over bg.
    buffer: Vec<(f32, f32, f32)>,
    bg: Rgb,
    output_buf: Vec<u8>,
}

impl TermCanvas {
    /// `cols` x `rows` terminal cells; each cell holds two vertical
    /// sub-pixels, so the drawable surface is `cols` x `rows * 2`.
    pub fn new(cols: u16, rows: u16, bg: Rgb) -> Self {
        let width = cols as usize;
        let height = rows as usize * 2;
        Self {
            width,
            height,
            buffer: vec![(0.0, 0.0, 0.0); width * height],
            bg,
            output_buf: Vec::with_capacity(width * height * 25),
        }
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgb, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let cell = &mut self.buffer[y as usize * self.width + x as usize];
        cell.0 = (cell.0 + color.0 as f32 / 255.0 * alpha).min(1.0);
        cell.1 = (cell.1 + color.1 as f32 / 255.0 * alpha).min(1.0);
        cell.2 = (cell.2 + color.2 as f32 / 255.0 * alpha).min(1.0);
    }

    fn lit(&self, color: (f32, f32, f32)) -> (u8, u8, u8) {
        (
            (self.bg.0 as f32 + color.0 * 255.0).min(255.0) as u8,
            (self.bg.1 as f32 + color.1 * 255.0).min(255.0) as u8,
            (self.bg.2 as f32 + color.2 * 255.0).min(255.0) as u8,
        )
    }

    /// Half-block emission: background color carries the top sub-pixel,
    /// foreground the bottom, one `▄` per cell. Color codes are elided
    /// while unchanged from the previous cell.
    pub fn render(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        let mut prev_top: (u8, u8, u8) = (255, 255, 255);
        let mut prev_bot: (u8, u8, u8) = (255, 255, 255);

        for y in (0..self.height).step_by(2) {
            for x in 0..self.width {
                let top = self.lit(self.buffer[y * self.width + x]);
                let bot = if y + 1 < self.height {
                    self.lit(self.buffer[(y + 1) * self.width + x])
                } else {
                    top
                };

                if top != prev_top {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", top.0, top.1, top.2)?;
                    prev_top = top;
                }
                if bot != prev_bot {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", bot.0, bot.1, bot.2)?;
                    prev_bot = bot;
                }
                self.output_buf.extend_from_slice("▄".as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_top = (255, 255, 255);
            prev_bot = (255, 255, 255);
            if y + 2 < self.height {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        out.write_all(&self.output_buf)?;
        out.flush()?;
        Ok(())
    }
}

impl Canvas for TermCanvas {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn fade(&mut self, amount: f32) {
        let keep = 1.0 - amount;
        for cell in &mut self.buffer {
            cell.0 *= keep;
            cell.1 *= keep;
            cell.2 *= keep;
        }
    }

    fn stroke(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32, width: f32) {
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as i32;

        for i in 0..=steps {
            let p = from + delta * (i as f32 / steps as f32);
            let x = p.x.floor() as i32;
            let y = p.y.floor() as i32;
            self.plot(x, y, color, alpha);
            if width >= 2.0 {
                self.plot(x + 1, y, color, alpha * 0.5);
                self.plot(x, y + 1, color, alpha * 0.5);
            }
        }
    }

    fn fill_rect(&mut self, origin: Vec2, size: f32, color: Rgb, alpha: f32) {
        let x0 = origin.x.floor() as i32;
        let y0 = origin.y.floor() as i32;
        let extent = size.ceil().max(1.0) as i32;
        for dy in 0..extent {
            for dx in 0..extent {
                self.plot(x0 + dx, y0 + dy, color, alpha);
            }
        }
    }

    fn clear(&mut self) {
        self.buffer.fill((0.0, 0.0, 0.0));
    }
}
