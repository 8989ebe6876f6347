//! Scroll-aware firework overlay: rockets climb out of a header region of
//! a simulated document, burst into kind-specific particle populations, and
//! stay fixed to the document while the viewport scrolls over it.

pub mod canvas;
pub mod display;
pub mod explosion;
pub mod geom;
pub mod particle;
pub mod rocket;
pub mod term;
pub mod util;

/// World units advanced per integration step.
pub const STEP_SIZE: f32 = 1.0;
