//! Inline styles and class names.
//!
//! `Style` is the small set of inline properties the range widget computes
//! or lets the owner override. Owner overrides come in through
//! `StyleOverrides`, keyed by the part they apply to; computed values are
//! merged on top with `Style::merge`, so geometry always wins over an
//! override of the same property.

use serde::{Deserialize, Serialize};

use crate::{Brush, Color, Length};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Relative,
    Absolute,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub position: Option<Position>,
    pub left: Option<Length>,
    pub width: Option<Length>,
    pub text_align: Option<TextAlign>,
    pub background: Option<Brush>,
    pub color: Option<Color>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, p: Position) -> Self {
        self.position = Some(p);
        self
    }
    pub fn left(mut self, l: Length) -> Self {
        self.left = Some(l);
        self
    }
    pub fn width(mut self, w: Length) -> Self {
        self.width = Some(w);
        self
    }
    pub fn text_align(mut self, a: TextAlign) -> Self {
        self.text_align = Some(a);
        self
    }
    pub fn background(mut self, b: impl Into<Brush>) -> Self {
        self.background = Some(b.into());
        self
    }
    pub fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }

    /// Properties set in `top` replace ours.
    pub fn merge(self, top: Style) -> Style {
        Style {
            position: top.position.or(self.position),
            left: top.left.or(self.left),
            width: top.width.or(self.width),
            text_align: top.text_align.or(self.text_align),
            background: top.background.or(self.background),
            color: top.color.or(self.color),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}

/// Owner-supplied inline style overrides, keyed by widget part.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub track: Option<Style>,
    pub active: Option<Style>,
    pub label: Option<Style>,
}

impl StyleOverrides {
    pub fn track(&self) -> Style {
        self.track.clone().unwrap_or_default()
    }
    pub fn active(&self) -> Style {
        self.active.clone().unwrap_or_default()
    }
    pub fn label(&self) -> Style {
        self.label.clone().unwrap_or_default()
    }
}

/// Class names keyed by semantic part.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub track: String,
    pub active_track: String,
    pub min_label: String,
    pub max_label: String,
    pub value_label: String,
    pub label_container: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            track: "input-range__track input-range__track--background".into(),
            active_track: "input-range__track input-range__track--active".into(),
            min_label: "input-range__label input-range__label--min".into(),
            max_label: "input-range__label input-range__label--max".into(),
            value_label: "input-range__label input-range__label--value".into(),
            label_container: "input-range__label-container".into(),
        }
    }
}
