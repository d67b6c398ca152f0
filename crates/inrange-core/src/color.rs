use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        if !s.is_ascii() {
            return Color::BLACK;
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).unwrap_or(0);
        match s.len() {
            6 => Color(channel(0), channel(2), channel(4), 255),
            8 => Color(channel(0), channel(2), channel(4), channel(6)),
            _ => Color::BLACK,
        }
    }
}

/// Fill for track and active segment backgrounds.
///
/// Gradient stops are positions in `0..=1` along the box's width.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brush {
    Solid(Color),
    LinearGradient { stops: Vec<(f32, Color)> },
}

impl From<Color> for Brush {
    fn from(c: Color) -> Self {
        Brush::Solid(c)
    }
}

impl Brush {
    /// Evenly spaced horizontal gradient.
    pub fn horizontal(colors: &[Color]) -> Brush {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        Brush::LinearGradient {
            stops: colors
                .iter()
                .enumerate()
                .map(|(i, c)| (i as f32 / last, *c))
                .collect(),
        }
    }
}
