//! CSS-like lengths used in computed styles.
//!
//! `Display` prints the CSS form (`35%`, `12px`, `calc(50% - 10px)`), and
//! `resolve` turns a length into pixels against the containing box's width
//! for hosts that lay out without a CSS engine.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    Px(f32),
    Percent(f32),
    /// Unit-less number. Hosts that follow CSS rules treat it as `0px`
    /// unless it is zero.
    Number(f32),
    /// `calc(percent% - minus_px px)`
    Calc { percent: f32, minus_px: f32 },
}

impl Length {
    /// Pixel value relative to a container of width `basis`.
    pub fn resolve(&self, basis: f32) -> f32 {
        match *self {
            Length::Px(px) => px,
            Length::Percent(p) => basis * p / 100.0,
            Length::Number(n) => n,
            Length::Calc { percent, minus_px } => basis * percent / 100.0 - minus_px,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Length::Px(px) => write!(f, "{}px", fmt_number(px)),
            Length::Percent(p) => write!(f, "{}%", fmt_number(p)),
            Length::Number(n) => write!(f, "{}", fmt_number(n)),
            Length::Calc { percent, minus_px } => write!(
                f,
                "calc({}% - {}px)",
                fmt_number(percent),
                fmt_number(minus_px)
            ),
        }
    }
}

/// At most 4 decimals, no trailing zeros, no negative zero.
pub fn fmt_number(v: f32) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}
