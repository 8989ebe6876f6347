//! Seam between the simulation and whatever actually draws pixels.

use crate::geom::Vec2;
use crate::util::Rgb;

/// A 2D drawing surface of known pixel size. All coordinates are
/// viewport-space. Strokes and rects accumulate additively; `fade`
/// is the per-frame darkening that turns old strokes into trails.
pub trait Canvas {
    fn size(&self) -> Vec2;

    /// Scales every stored intensity by `1 - amount`.
    fn fade(&mut self, amount: f32);

    fn stroke(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32, width: f32);

    /// Small filled square, `origin` at its top-left corner.
    fn fill_rect(&mut self, origin: Vec2, size: f32, color: Rgb, alpha: f32);

    fn clear(&mut self);
}
