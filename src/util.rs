//! Random helpers and the display color palette.

/// Uniform float in `[min, max)`.
pub fn random(min: f32, max: f32) -> f32 {
    min + fastrand::f32() * (max - min)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const GOLD: Rgb = Rgb(255, 215, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);

// Shell star colors: gold, red, green, deep sky blue, orange red,
// white, violet, hot pink.
pub const PALETTE: [Rgb; 8] = [
    Rgb(255, 215, 0),
    Rgb(255, 0, 0),
    Rgb(0, 255, 0),
    Rgb(0, 191, 255),
    Rgb(255, 69, 0),
    Rgb(255, 255, 255),
    Rgb(148, 0, 211),
    Rgb(255, 105, 180),
];

pub fn random_palette_color() -> Rgb {
    PALETTE[fastrand::usize(0..PALETTE.len())]
}

impl Rgb {
    /// Parses `RRGGBB` or `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Rgb(r, g, b))
    }
}

/// HSL to RGB, `h` in degrees, `s` and `l` in `[0, 1]`. Used for the
/// rocket exhaust stroke, which sweeps a narrow gold hue band.
pub fn hsl(h: f32, s: f32, l: f32) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
