use std::fmt;

use crate::domain::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.1}, {:.1}%, {:.1}%)",
            self.hue.rem_euclid(360.0),
            self.saturation.clamp(0.0, 100.0),
            self.lightness.clamp(0.0, 100.0)
        )
    }
}

pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    let chroma = (1.0 - 2.0_f64.mul_add(l, -1.0).abs()) * s;
    let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match h {
        h if h < 1.0 => (chroma, x, 0.0),
        h if h < 2.0 => (x, chroma, 0.0),
        h if h < 3.0 => (0.0, chroma, x),
        h if h < 4.0 => (0.0, x, chroma),
        h if h < 5.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb(channel(r + m), channel(g + m), channel(b + m))
}

fn channel(value: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    value
}

pub const fn level_hue(level: Level) -> f64 {
    match level {
        Level::Beginner => 152.0,
        Level::Intermediate => 213.0,
        Level::Advanced => 262.0,
        Level::Expert => 36.0,
    }
}

/// Base color for a level ring; `shade` in `[0, 1)` nudges lightness so
/// neighbouring petals are not identical.
pub fn level_color(level: Level, shade: f64) -> Hsl {
    Hsl::new(level_hue(level), 68.0, (shade - 0.5).mul_add(12.0, 56.0))
}

pub const INACTIVE_STROKE: Rgb = Rgb(0xcb, 0xd5, 0xe1);
